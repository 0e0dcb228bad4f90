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

//! XML handler implementation.
//!
//! Encoding is delegated to the `quick-xml` serde serializer. The root
//! element is named after the serialized struct unless a root tag is
//! configured; values without a natural element name (numbers, strings,
//! sequences, maps) therefore need [`XmlHandler::with_root`].

use crate::error::{RenderError, Result};
use crate::handler::{Handler, PrettyHandler};
use crate::value::Renderable;
use quick_xml::se::Serializer;
use std::io::Write;

/// XML handler.
///
/// # Examples
///
/// ```rust
/// use render::{Handler, PrettyHandler, Serialized, XmlHandler};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Person {
///     age: u32,
/// }
///
/// let person = Serialized(Person { age: 30 });
///
/// let mut compact = Vec::new();
/// XmlHandler::new().render(&mut compact, &person).unwrap();
/// assert_eq!(compact, b"<Person><age>30</age></Person>");
///
/// let mut pretty = Vec::new();
/// XmlHandler::new().render_pretty(&mut pretty, &person).unwrap();
/// assert_eq!(pretty, b"<Person>\n  <age>30</age>\n</Person>");
/// ```
#[derive(Clone, Debug)]
pub struct XmlHandler {
    root: Option<String>,
    indent_char: char,
    indent_size: usize,
}

impl XmlHandler {
    /// Indentation width used by the pretty path unless configured
    /// otherwise.
    pub const DEFAULT_INDENT_SIZE: usize = 2;

    /// Creates a handler that indents pretty output with two spaces.
    pub fn new() -> Self {
        Self {
            root: None,
            indent_char: ' ',
            indent_size: Self::DEFAULT_INDENT_SIZE,
        }
    }

    /// Wraps every document in an element named `root`.
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Sets the pretty indentation to `size` copies of `indent_char`.
    ///
    /// A size of zero restores [`XmlHandler::DEFAULT_INDENT_SIZE`].
    pub fn with_indent(mut self, indent_char: char, size: usize) -> Self {
        self.indent_char = indent_char;
        self.indent_size = if size == 0 {
            Self::DEFAULT_INDENT_SIZE
        } else {
            size
        };
        self
    }

    fn encode(&self, writer: &mut dyn Write, value: &dyn Renderable, pretty: bool) -> Result<()> {
        let value = super::serializable(value)?;

        let mut document = String::new();
        let mut serializer = match &self.root {
            Some(root) => Serializer::with_root(&mut document, Some(root.as_str()))
                .map_err(RenderError::failed)?,
            None => Serializer::new(&mut document),
        };
        if pretty {
            serializer.indent(self.indent_char, self.indent_size);
        }
        serde::Serialize::serialize(value, serializer).map_err(RenderError::failed)?;

        writer.write_all(document.as_bytes())?;
        Ok(())
    }
}

impl Default for XmlHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for XmlHandler {
    fn render(&self, writer: &mut dyn Write, value: &dyn Renderable) -> Result<()> {
        self.encode(writer, value, false)
    }

    fn as_pretty(&self) -> Option<&dyn PrettyHandler> {
        Some(self)
    }

    fn formats(&self) -> Option<Vec<String>> {
        super::format_names(&["xml"])
    }
}

impl PrettyHandler for XmlHandler {
    fn render_pretty(&self, writer: &mut dyn Write, value: &dyn Renderable) -> Result<()> {
        self.encode(writer, value, true)
    }
}
