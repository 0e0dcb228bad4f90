//
// Copyright 2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

#![doc = include_str!("../../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

//! ## Architecture
//!
//! The crate is organized in layers, leaves first:
//!
//! - **[`value`]**: the [`Renderable`] trait through which a value exposes
//!   the capabilities handlers probe for
//! - **[`handler`]**: the [`Handler`] trait and its optional
//!   [`PrettyHandler`] capability
//! - **[`handlers`]**: built-in handlers, including the [`TextHandler`]
//!   coercion chain and the [`MultiHandler`] fallback composer
//! - **[`Renderer`]**: the case-insensitive format registry
//! - **[`defaults`]**: ready-made registries
//! - **[`observability`]**: structured logging integration
//!
//! ## Feature Flags
//!
//! - `derive` (default): `#[derive(Renderable)]`
//! - `observability` (default): `tracing` events
//! - `postcard` (default): [`PostcardHandler`]

pub mod defaults;
pub mod error;
pub mod handler;
pub mod handlers;
pub mod observability;
mod renderer;
pub mod value;

pub use error::{BoxError, RenderError, Result};
pub use handler::{Handler, PrettyHandler, render_with};
#[cfg(feature = "postcard")]
pub use handlers::PostcardHandler;
pub use handlers::{
    BinaryHandler, DisplayHandler, JsonHandler, MultiHandler, TEXT_PRECEDENCE, TextCapability,
    TextHandler, WriteToHandler, XmlHandler, YamlHandler,
};
pub use renderer::Renderer;
pub use value::{Displayed, MarshalBinary, Reader, Renderable, Scalar, Serialized, WriteTo};

#[doc(hidden)]
pub use erased_serde;

/// Derives [`Renderable`] for a type.
///
/// Each key in `#[renderable(...)]` turns on one capability, which the type
/// must already implement:
///
/// | Key | Accessor | Required impl |
/// |-----|----------|---------------|
/// | `serialize` | [`Renderable::as_serialize`] | `serde::Serialize` |
/// | `display` | [`Renderable::as_display`] | `std::fmt::Display` |
/// | `error` | [`Renderable::as_error`] | `std::error::Error` |
/// | `write_to` | [`Renderable::as_write_to`] | [`WriteTo`] |
/// | `binary` | [`Renderable::as_binary`] | [`MarshalBinary`] |
///
/// ```rust
/// use render::Renderable;
/// use serde::Serialize;
///
/// #[derive(Serialize, Renderable)]
/// #[renderable(serialize)]
/// struct Person {
///     age: u32,
/// }
///
/// let mut out = Vec::new();
/// render::defaults::compact(&mut out, "json", &Person { age: 30 }).unwrap();
/// assert_eq!(out, b"{\"age\":30}\n");
/// ```
#[cfg(feature = "derive")]
pub use render_macros::Renderable;
