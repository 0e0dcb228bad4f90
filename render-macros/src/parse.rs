//! Parsing logic for `#[derive(Renderable)]`.
//!
//! This module reads the `#[renderable(...)]` attributes of the input type
//! and extracts the capabilities to expose.

use syn::{DeriveInput, Error, Generics, Ident, Result};

/// Name of the helper attribute.
const ATTRIBUTE: &str = "renderable";

/// A capability the derived impl exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// `as_serialize`, requires `serde::Serialize`
    Serialize,
    /// `as_display`, requires `std::fmt::Display`
    Display,
    /// `as_error`, requires `std::error::Error`
    Error,
    /// `as_write_to`, requires `render::WriteTo`
    WriteTo,
    /// `as_binary`, requires `render::MarshalBinary`
    Binary,
}

impl Capability {
    /// Every capability, in the order accessors are generated.
    pub const ALL: [Capability; 5] = [
        Capability::Serialize,
        Capability::Display,
        Capability::Error,
        Capability::WriteTo,
        Capability::Binary,
    ];

    /// The attribute key naming this capability.
    pub fn key(self) -> &'static str {
        match self {
            Capability::Serialize => "serialize",
            Capability::Display => "display",
            Capability::Error => "error",
            Capability::WriteTo => "write_to",
            Capability::Binary => "binary",
        }
    }

    /// Parse a capability from its attribute key.
    pub fn from_ident(ident: &Ident) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|capability| ident == capability.key())
            .ok_or_else(|| {
                Error::new_spanned(
                    ident,
                    format!(
                        "Unknown renderable capability '{ident}'. Expected one of: serialize, display, error, write_to, binary"
                    ),
                )
            })
    }
}

/// Parsed derive input.
#[derive(Debug)]
pub struct RenderableDef {
    /// Type name
    pub name: Ident,
    /// Type generics
    pub generics: Generics,
    /// Requested capabilities, in declaration order
    pub capabilities: Vec<Capability>,
}

/// Parse the derive input into a [`RenderableDef`].
pub fn parse_renderable(input: &DeriveInput) -> Result<RenderableDef> {
    let mut capabilities = Vec::new();

    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident(ATTRIBUTE)) {
        attr.parse_nested_meta(|meta| {
            let ident = meta
                .path
                .get_ident()
                .ok_or_else(|| meta.error("Expected a capability name"))?;
            let capability = Capability::from_ident(ident)?;

            if capabilities.contains(&capability) {
                return Err(meta.error(format!("Duplicate renderable capability '{ident}'")));
            }
            capabilities.push(capability);
            Ok(())
        })?;
    }

    Ok(RenderableDef {
        name: input.ident.clone(),
        generics: input.generics.clone(),
        capabilities,
    })
}
