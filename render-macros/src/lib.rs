//! Procedural macros for the render crate.
//!
//! This crate provides `#[derive(Renderable)]`, which implements
//! `render::Renderable` by exposing capabilities the type already has.
//! It is re-exported as `render::Renderable` behind the `derive` feature.
//!
//! # Example
//!
//! ```ignore
//! use render::Renderable;
//! use serde::Serialize;
//!
//! #[derive(Serialize, Renderable)]
//! #[renderable(serialize, display)]
//! struct Version {
//!     major: u32,
//!     minor: u32,
//! }
//!
//! impl std::fmt::Display for Version {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         write!(f, "v{}.{}", self.major, self.minor)
//!     }
//! }
//! ```
//!
//! This will generate a `Renderable` impl whose `as_serialize` and
//! `as_display` accessors return the value itself. Every other accessor keeps
//! its default and reports the capability as absent.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod generate;
mod parse;

/// Derives `render::Renderable`.
///
/// # Attributes
///
/// `#[renderable(...)]` takes a comma-separated list of capabilities. It may
/// be repeated.
///
/// - `serialize`: the type implements `serde::Serialize`
/// - `display`: the type implements `std::fmt::Display`
/// - `error`: the type implements `std::error::Error`
/// - `write_to`: the type implements `render::WriteTo`
/// - `binary`: the type implements `render::MarshalBinary`
///
/// Unknown or repeated capabilities are compile errors. Generic types get a
/// `Self: Trait` bound per capability, so the impl applies exactly when the
/// capability does.
#[proc_macro_derive(Renderable, attributes(renderable))]
pub fn derive_renderable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let renderable = match parse::parse_renderable(&input) {
        Ok(renderable) => renderable,
        Err(err) => return err.to_compile_error().into(),
    };

    TokenStream::from(generate::generate_renderable(&renderable))
}
