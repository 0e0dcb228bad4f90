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

//! Handler trait definitions.
//!
//! A [`Handler`] renders a value in one format family. Two capabilities are
//! optional:
//!
//! - **Pretty**: a human-formatted variant of the output, offered by
//!   implementing [`PrettyHandler`] and returning it from
//!   [`Handler::as_pretty`].
//! - **Formats**: the format names (including aliases) the handler owns,
//!   returned from [`Handler::formats`].
//!
//! # Implementing a handler
//!
//! ```rust
//! use render::{Handler, RenderError, Renderable, Result};
//! use std::io::Write;
//!
//! /// Renders strings upper-cased.
//! struct Shout;
//!
//! impl Handler for Shout {
//!     fn render(&self, writer: &mut dyn Write, value: &dyn Renderable) -> Result<()> {
//!         let text = value
//!             .as_str()
//!             .ok_or_else(|| RenderError::cannot_render(value.type_name()))?;
//!         writer.write_all(text.to_uppercase().as_bytes())?;
//!         Ok(())
//!     }
//!
//!     fn formats(&self) -> Option<Vec<String>> {
//!         Some(vec!["shout".to_string(), "loud".to_string()])
//!     }
//! }
//!
//! let mut out = Vec::new();
//! Shout.render(&mut out, &"hey").unwrap();
//! assert_eq!(out, b"HEY");
//! ```

use crate::error::Result;
use crate::value::Renderable;
use std::io::Write;

/// Renders values in a single format family.
///
/// # Thread Safety
///
/// Handlers are shared between format aliases and across threads, so they
/// must be `Send + Sync`. The built-in handlers are stateless.
pub trait Handler: Send + Sync {
    /// Writes `value` into `writer` in the handler's format.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::CannotRender`](crate::RenderError::CannotRender)
    /// when `value` lacks the capability this handler requires. Any other
    /// error means the handler accepted the value and then failed.
    fn render(&self, writer: &mut dyn Write, value: &dyn Renderable) -> Result<()>;

    /// Returns the pretty-printing capability, if this handler has one.
    fn as_pretty(&self) -> Option<&dyn PrettyHandler> {
        None
    }

    /// Returns every format name that should route to this handler.
    ///
    /// `None` means the handler does not declare any names of its own.
    fn formats(&self) -> Option<Vec<String>> {
        None
    }
}

/// Optional pretty-printing capability of a [`Handler`].
pub trait PrettyHandler: Handler {
    /// Writes `value` into `writer` using the pretty variant of the format.
    ///
    /// # Errors
    ///
    /// Same contract as [`Handler::render`].
    fn render_pretty(&self, writer: &mut dyn Write, value: &dyn Renderable) -> Result<()>;
}

/// Renders through the pretty path when requested and available, otherwise
/// through [`Handler::render`].
pub fn render_with(
    handler: &dyn Handler,
    writer: &mut dyn Write,
    value: &dyn Renderable,
    pretty: bool,
) -> Result<()> {
    match handler.as_pretty() {
        Some(pretty_handler) if pretty => pretty_handler.render_pretty(writer, value),
        _ => handler.render(writer, value),
    }
}
