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

//! Postcard handler implementation.
//!
//! This module provides a handler based on the postcard format, a compact
//! binary encoding for serde types.

use crate::error::{RenderError, Result};
use crate::handler::Handler;
use crate::value::Renderable;
use std::io::Write;

/// Postcard handler.
///
/// `PostcardHandler` writes the postcard encoding of any value exposing a
/// serde serialization. It is not part of the default registries; add it to
/// a [`Renderer`](crate::Renderer) explicitly.
///
/// # Examples
///
/// ## Basic usage
///
/// ```rust
/// use render::{Handler, PostcardHandler, Serialized};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Message {
///     id: u32,
///     text: String,
/// }
///
/// let message = Serialized(Message { id: 42, text: "Hello".to_string() });
/// let mut out = Vec::new();
/// PostcardHandler::new().render(&mut out, &message).unwrap();
/// assert_eq!(out, [42, 5, b'H', b'e', b'l', b'l', b'o']);
/// ```
///
/// ## With maximum size limit
///
/// ```rust
/// use render::{Handler, PostcardHandler};
///
/// let handler = PostcardHandler::new().with_max_size(2);
/// let mut out = Vec::new();
/// let err = handler.render(&mut out, &"too long").unwrap_err();
/// assert!(err.is_failed());
/// assert!(out.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct PostcardHandler {
    max_size: Option<usize>,
}

impl PostcardHandler {
    /// Creates a new postcard handler with no size limit.
    pub fn new() -> Self {
        Self { max_size: None }
    }

    /// Sets a maximum encoded size. Larger encodings fail without writing
    /// anything.
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = Some(max_size);
        self
    }

    /// Removes any size limit.
    pub fn with_no_limit(mut self) -> Self {
        self.max_size = None;
        self
    }
}

impl Handler for PostcardHandler {
    fn render(&self, writer: &mut dyn Write, value: &dyn Renderable) -> Result<()> {
        let value = super::serializable(value)?;
        let bytes = postcard::to_allocvec(value).map_err(RenderError::failed)?;

        if let Some(max_size) = self.max_size.filter(|max| bytes.len() > *max) {
            return Err(RenderError::failed(format!(
                "encoded size {} exceeds maximum {max_size}",
                bytes.len()
            )));
        }

        writer.write_all(&bytes)?;
        Ok(())
    }

    fn formats(&self) -> Option<Vec<String>> {
        super::format_names(&["postcard"])
    }
}
