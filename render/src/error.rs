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

//! Error types for rendering.
//!
//! Every error produced by this crate is a [`RenderError`]. The variants form
//! a small taxonomy that callers match on by variant, never by message:
//!
//! - **Capability mismatch** ([`RenderError::CannotRender`]): a handler was
//!   given a value it structurally cannot handle. Composing handlers treat
//!   this as "try the next option".
//! - **Operation failure** ([`RenderError::Failed`]): a handler accepted the
//!   value but encoding or writing failed. Fatal to the call.
//! - **Unsupported format** ([`RenderError::UnsupportedFormat`]): the format
//!   name is not registered, or its handler rejected the value.
//!
//! All variants display with a common `render:` prefix.
//!
//! # Examples
//!
//! ```rust
//! use render::RenderError;
//!
//! let error = RenderError::unsupported_format("toml");
//! assert!(error.is_unsupported_format());
//! assert_eq!(error.to_string(), "render: unsupported format: toml");
//! ```

use std::io;
use thiserror::Error;

/// Boxed error used as the source of operation failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result alias used throughout the crate.
pub type Result<T, E = RenderError> = std::result::Result<T, E>;

/// Errors that can occur while rendering a value.
///
/// # Examples
///
/// ```rust
/// use render::RenderError;
/// use std::io;
///
/// let error = RenderError::failed(io::Error::other("disk full"));
/// assert!(error.is_failed());
/// assert_eq!(error.to_string(), "render: failed: disk full");
/// ```
#[derive(Debug, Error)]
pub enum RenderError {
    /// A handler accepted the value but an underlying step failed.
    ///
    /// Covers encoder errors and I/O errors from the destination writer.
    /// Output may already be partially written.
    #[error("render: failed: {source}")]
    Failed {
        /// The underlying encoder or I/O error
        #[source]
        source: BoxError,
    },

    /// The value does not provide the capability the handler requires.
    ///
    /// Only handlers return this. The registry never surfaces it to callers;
    /// it is reported as [`RenderError::UnsupportedFormat`] instead.
    #[error("render: cannot render: {type_name}")]
    CannotRender {
        /// Concrete type name of the rejected value
        type_name: String,
    },

    /// The requested format has no handler, or its handler cannot express
    /// the value.
    #[error("render: unsupported format: {format}")]
    UnsupportedFormat {
        /// The format name as requested
        format: String,
    },

    /// A restricted renderer was requested without any formats.
    #[error("render: no formats specified")]
    NoFormats,
}

impl RenderError {
    /// Wraps an encoder or I/O error as an operation failure.
    pub fn failed(source: impl Into<BoxError>) -> Self {
        Self::Failed {
            source: source.into(),
        }
    }

    /// Creates a capability mismatch for a value of the given type.
    pub fn cannot_render(type_name: impl Into<String>) -> Self {
        Self::CannotRender {
            type_name: type_name.into(),
        }
    }

    /// Creates an unsupported format error naming `format`.
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// Returns `true` if this is an operation failure.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Returns `true` if this is a capability mismatch.
    #[must_use]
    pub const fn is_cannot_render(&self) -> bool {
        matches!(self, Self::CannotRender { .. })
    }

    /// Returns `true` if this is an unsupported format error.
    #[must_use]
    pub const fn is_unsupported_format(&self) -> bool {
        matches!(self, Self::UnsupportedFormat { .. })
    }

    /// Converts this error into the form the registry reports to callers.
    ///
    /// Capability mismatches become [`RenderError::UnsupportedFormat`] for
    /// `format`. Operation failures pass through unchanged. Anything else is
    /// wrapped as an operation failure.
    pub(crate) fn classify(self, format: &str) -> Self {
        match self {
            Self::CannotRender { .. } => Self::unsupported_format(format),
            Self::Failed { .. } => self,
            other => Self::failed(other),
        }
    }
}

impl From<io::Error> for RenderError {
    fn from(error: io::Error) -> Self {
        Self::failed(error)
    }
}
