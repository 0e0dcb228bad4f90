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

//! Structured logging integration.
//!
//! With the `observability` feature (on by default) the crate emits
//! `tracing` events:
//!
//! - `DEBUG` when the registry resolves a format and when it reclassifies a
//!   handler error;
//! - `TRACE` each time a [`MultiHandler`](crate::MultiHandler) moves past a
//!   handler that cannot render the value.
//!
//! Nothing is logged for errors returned to the caller. Callers that want
//! them in their logs pass them to [`log_error`].
//!
//! # Examples
//!
//! ```rust
//! use render::observability::log_error;
//! use render::defaults;
//!
//! let renderer = defaults::standard();
//! let mut out = Vec::new();
//! if let Err(error) = renderer.compact(&mut out, "toml", &"value") {
//!     log_error(&error);
//! }
//! ```

use crate::error::RenderError;

/// Logs a render error with structured context.
///
/// Operation failures are logged at `ERROR`. Every other category is a
/// caller-side problem (an unknown format, a value the format cannot
/// express) and is logged at `WARN`.
#[cfg(feature = "observability")]
pub fn log_error(error: &RenderError) {
    match error {
        RenderError::Failed { source } => {
            tracing::error!(error = %error, source = %source, "Render failed");
        }
        RenderError::CannotRender { type_name } => {
            tracing::warn!(error = %error, type_name = %type_name, "Value cannot be rendered");
        }
        RenderError::UnsupportedFormat { format } => {
            tracing::warn!(error = %error, format = %format, "Unsupported render format");
        }
        RenderError::NoFormats => {
            tracing::warn!(error = %error, "No render formats specified");
        }
    }
}

/// Logs a render error with structured context (no-op when observability is
/// disabled).
#[cfg(not(feature = "observability"))]
pub fn log_error(_error: &RenderError) {}
