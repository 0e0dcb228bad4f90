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

//! JSON handler implementation.
//!
//! This module provides a handler based on `serde_json`, producing compact
//! JSON by default and indented JSON through the pretty path.

use crate::error::{RenderError, Result};
use crate::handler::{Handler, PrettyHandler};
use crate::value::Renderable;
use serde_json::ser::PrettyFormatter;
use std::io::{self, Write};

/// JSON handler.
///
/// `JsonHandler` renders any value exposing a serde serialization. Output
/// is terminated by a newline in both modes.
///
/// # Examples
///
/// ## Compact and pretty output
///
/// ```rust
/// use render::{Handler, JsonHandler, PrettyHandler};
///
/// let value = serde_json::json!({"age": 30});
/// let handler = JsonHandler::new();
///
/// let mut compact = Vec::new();
/// handler.render(&mut compact, &value).unwrap();
/// assert_eq!(compact, b"{\"age\":30}\n");
///
/// let mut pretty = Vec::new();
/// handler.render_pretty(&mut pretty, &value).unwrap();
/// assert_eq!(pretty, b"{\n  \"age\": 30\n}\n");
/// ```
///
/// ## Custom indentation
///
/// ```rust
/// use render::{JsonHandler, PrettyHandler};
///
/// let value = serde_json::json!({"age": 30});
/// let handler = JsonHandler::new().with_prefix("// ").with_indent("\t");
///
/// let mut out = Vec::new();
/// handler.render_pretty(&mut out, &value).unwrap();
/// assert_eq!(out, b"{\n// \t\"age\": 30\n// }\n");
/// ```
#[derive(Clone, Debug)]
pub struct JsonHandler {
    prefix: String,
    indent: String,
}

impl JsonHandler {
    /// Indentation used by the pretty path unless configured otherwise.
    pub const DEFAULT_INDENT: &'static str = "  ";

    /// Creates a new JSON handler with two-space indentation and no prefix.
    pub fn new() -> Self {
        Self {
            prefix: String::new(),
            indent: Self::DEFAULT_INDENT.to_string(),
        }
    }

    /// Sets the string written at the start of every pretty line after the
    /// first.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the string used for each pretty indentation level.
    ///
    /// An empty string restores [`JsonHandler::DEFAULT_INDENT`].
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        let indent = indent.into();
        self.indent = if indent.is_empty() {
            Self::DEFAULT_INDENT.to_string()
        } else {
            indent
        };
        self
    }
}

impl Default for JsonHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for JsonHandler {
    fn render(&self, writer: &mut dyn Write, value: &dyn Renderable) -> Result<()> {
        let value = super::serializable(value)?;
        serde_json::to_writer(&mut *writer, value).map_err(RenderError::failed)?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    fn as_pretty(&self) -> Option<&dyn PrettyHandler> {
        Some(self)
    }

    fn formats(&self) -> Option<Vec<String>> {
        super::format_names(&["json"])
    }
}

impl PrettyHandler for JsonHandler {
    fn render_pretty(&self, writer: &mut dyn Write, value: &dyn Renderable) -> Result<()> {
        let value = super::serializable(value)?;
        let mut prefixed = LinePrefixWriter::new(writer, self.prefix.as_bytes());
        let formatter = PrettyFormatter::with_indent(self.indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(&mut prefixed, formatter);
        serde::Serialize::serialize(value, &mut serializer).map_err(RenderError::failed)?;
        prefixed.into_inner().write_all(b"\n")?;
        Ok(())
    }
}

/// Writes `prefix` before every line that follows a newline.
///
/// JSON strings never contain raw newlines, so every newline seen here was
/// emitted by the formatter.
struct LinePrefixWriter<'a> {
    inner: &'a mut dyn Write,
    prefix: &'a [u8],
    at_line_start: bool,
}

impl<'a> LinePrefixWriter<'a> {
    fn new(inner: &'a mut dyn Write, prefix: &'a [u8]) -> Self {
        Self {
            inner,
            prefix,
            at_line_start: false,
        }
    }

    fn into_inner(self) -> &'a mut dyn Write {
        self.inner
    }
}

impl Write for LinePrefixWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.prefix.is_empty() {
            return self.inner.write(buf);
        }
        for line in buf.split_inclusive(|byte| *byte == b'\n') {
            if self.at_line_start {
                self.inner.write_all(self.prefix)?;
            }
            self.inner.write_all(line)?;
            self.at_line_start = line.ends_with(b"\n");
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::FailingWriter;
    use crate::value::Serialized;

    #[derive(serde::Serialize)]
    struct Person {
        age: u32,
    }

    fn compact(value: &dyn Renderable) -> Result<String> {
        let mut out = Vec::new();
        JsonHandler::new().render(&mut out, value)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn pretty(handler: &JsonHandler, value: &dyn Renderable) -> Result<String> {
        let mut out = Vec::new();
        handler.render_pretty(&mut out, value)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_json_compact() {
        assert_eq!(compact(&Serialized(Person { age: 30 })).unwrap(), "{\"age\":30}\n");
    }

    #[test]
    fn test_json_pretty() {
        let value = Serialized(Person { age: 30 });
        assert_eq!(
            pretty(&JsonHandler::new(), &value).unwrap(),
            "{\n  \"age\": 30\n}\n"
        );
    }

    #[test]
    fn test_json_prefix_and_indent() {
        let handler = JsonHandler::new().with_prefix("// ").with_indent("\t");
        let value = serde_json::json!({"age": 30, "tags": ["a"]});
        assert_eq!(
            pretty(&handler, &value).unwrap(),
            "{\n// \t\"age\": 30,\n// \t\"tags\": [\n// \t\t\"a\"\n// \t]\n// }\n"
        );
    }

    #[test]
    fn test_json_empty_indent_uses_default() {
        let handler = JsonHandler::new().with_indent("");
        let value = serde_json::json!({"a": 1});
        assert_eq!(pretty(&handler, &value).unwrap(), "{\n  \"a\": 1\n}\n");
    }

    #[test]
    fn test_json_scalars_and_strings() {
        assert_eq!(compact(&42u8).unwrap(), "42\n");
        assert_eq!(compact(&"hi").unwrap(), "\"hi\"\n");
        assert_eq!(compact(&true).unwrap(), "true\n");
    }

    #[test]
    fn test_json_string_with_newline_is_not_prefixed() {
        let handler = JsonHandler::new().with_prefix("> ");
        let value = serde_json::json!({"text": "line1\nline2"});
        assert_eq!(
            pretty(&handler, &value).unwrap(),
            "{\n>   \"text\": \"line1\\nline2\"\n> }\n"
        );
    }

    #[test]
    fn test_json_cannot_render_without_serialize() {
        let err = compact(&io::Error::other("nope")).unwrap_err();
        assert!(err.is_cannot_render());
    }

    #[test]
    fn test_json_encoder_error_is_failure() {
        use std::collections::HashMap;
        // Non-string map keys are rejected by serde_json.
        let mut map = HashMap::new();
        map.insert(vec![1u8], 1);
        let err = compact(&Serialized(map)).unwrap_err();
        assert!(err.is_failed());
    }

    #[test]
    fn test_json_write_error_is_failure() {
        let mut writer = FailingWriter("write error!!1");
        let err = JsonHandler::new().render(&mut writer, &1u8).unwrap_err();
        assert!(err.is_failed());
        assert!(err.to_string().contains("write error!!1"));
    }

    #[test]
    fn test_json_formats() {
        assert_eq!(JsonHandler::new().formats(), Some(vec!["json".to_string()]));
        assert!(JsonHandler::new().as_pretty().is_some());
    }
}
