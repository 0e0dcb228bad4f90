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

//! Text coercion handler.

use crate::error::{RenderError, Result};
use crate::handler::Handler;
use crate::value::Renderable;
use std::io::{self, Write};

/// A value capability the [`TextHandler`] knows how to write as text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextCapability {
    /// Raw bytes, written verbatim.
    Bytes,
    /// Characters, written UTF-8 encoded.
    Chars,
    /// A string, written verbatim.
    Str,
    /// A number or boolean, written in its default textual form.
    Scalar,
    /// A byte stream, drained into the writer.
    Reader,
    /// A value that writes itself into the writer.
    WriteTo,
    /// The value's display string.
    Display,
    /// The message of an error value.
    Error,
}

/// Order in which [`TextHandler`] probes a value's capabilities.
///
/// The first capability the value offers is used, even if writing it fails.
pub const TEXT_PRECEDENCE: [TextCapability; 8] = [
    TextCapability::Bytes,
    TextCapability::Chars,
    TextCapability::Str,
    TextCapability::Scalar,
    TextCapability::Reader,
    TextCapability::WriteTo,
    TextCapability::Display,
    TextCapability::Error,
];

impl TextCapability {
    /// Writes `value` through this capability.
    ///
    /// Returns `None` if `value` does not offer it.
    pub fn write(self, writer: &mut dyn Write, value: &dyn Renderable) -> Option<io::Result<()>> {
        match self {
            Self::Bytes => value.as_bytes().map(|bytes| writer.write_all(bytes)),
            Self::Chars => value.as_chars().map(|chars| {
                let text: String = chars.iter().collect();
                writer.write_all(text.as_bytes())
            }),
            Self::Str => value.as_str().map(|text| writer.write_all(text.as_bytes())),
            Self::Scalar => value.as_scalar().map(|scalar| write!(writer, "{scalar}")),
            Self::Reader => value.as_reader().map(|cell| -> io::Result<()> {
                let mut reader = cell
                    .try_borrow_mut()
                    .map_err(|_| io::Error::other("reader is already in use"))?;
                io::copy(&mut *reader, writer).map(drop)
            }),
            Self::WriteTo => value
                .as_write_to()
                .map(|source| source.write_to(writer).map(drop)),
            Self::Display => value.as_display().map(|display| write!(writer, "{display}")),
            Self::Error => value.as_error().map(|error| write!(writer, "{error}")),
        }
    }
}

/// Writes values as plain text.
///
/// Supports every capability in [`TEXT_PRECEDENCE`], probed in that order:
/// bytes, characters, strings, numbers and booleans, readers, [`WriteTo`],
/// [`Display`](std::fmt::Display) and errors. Anything else is rejected with
/// [`RenderError::CannotRender`].
///
/// [`WriteTo`]: crate::WriteTo
///
/// # Examples
///
/// ```rust
/// use render::{Handler, TextHandler};
///
/// let mut out = Vec::new();
/// TextHandler.render(&mut out, &42u32).unwrap();
/// assert_eq!(out, b"42");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TextHandler;

impl Handler for TextHandler {
    fn render(&self, writer: &mut dyn Write, value: &dyn Renderable) -> Result<()> {
        let outcome = TEXT_PRECEDENCE
            .iter()
            .find_map(|capability| capability.write(writer, value));

        match outcome {
            Some(Ok(())) => Ok(()),
            Some(Err(err)) => Err(RenderError::failed(err)),
            None => Err(RenderError::cannot_render(value.type_name())),
        }
    }

    fn formats(&self) -> Option<Vec<String>> {
        super::format_names(&["text", "txt", "plain"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::FailingWriter;
    use crate::value::{Reader, WriteTo};
    use std::fmt;

    fn text(value: &dyn Renderable) -> Result<String> {
        let mut out = Vec::new();
        TextHandler.render(&mut out, value)?;
        Ok(String::from_utf8(out).unwrap())
    }

    struct Version;

    impl fmt::Display for Version {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("v1.2.3")
        }
    }

    impl Renderable for Version {
        fn as_display(&self) -> Option<&dyn fmt::Display> {
            Some(self)
        }
    }

    struct Report {
        body: &'static str,
        fail: bool,
    }

    impl WriteTo for Report {
        fn write_to(&self, writer: &mut dyn Write) -> io::Result<u64> {
            writer.write_all(self.body.as_bytes())?;
            if self.fail {
                return Err(io::Error::other("WriteTo error"));
            }
            Ok(self.body.len() as u64)
        }
    }

    impl fmt::Display for Report {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("display form")
        }
    }

    impl Renderable for Report {
        fn as_write_to(&self) -> Option<&dyn WriteTo> {
            Some(self)
        }

        fn as_display(&self) -> Option<&dyn fmt::Display> {
            Some(self)
        }
    }

    #[derive(Debug)]
    struct Oops;

    impl fmt::Display for Oops {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("something broke")
        }
    }

    impl std::error::Error for Oops {}

    impl Renderable for Oops {
        fn as_error(&self) -> Option<&dyn std::error::Error> {
            Some(self)
        }
    }

    struct Opaque;

    impl Renderable for Opaque {}

    #[test]
    fn test_precedence_order() {
        assert_eq!(
            TEXT_PRECEDENCE,
            [
                TextCapability::Bytes,
                TextCapability::Chars,
                TextCapability::Str,
                TextCapability::Scalar,
                TextCapability::Reader,
                TextCapability::WriteTo,
                TextCapability::Display,
                TextCapability::Error,
            ]
        );
    }

    #[test]
    fn test_bytes() {
        assert_eq!(text(&b"ab".to_vec()).unwrap(), "ab");
        assert_eq!(text(&&b"raw"[..]).unwrap(), "raw");
    }

    #[test]
    fn test_chars() {
        assert_eq!(text(&vec!['h', 'é', '!']).unwrap(), "hé!");
        assert_eq!(text(&'z').unwrap(), "z");
    }

    #[test]
    fn test_strings() {
        assert_eq!(text(&"hello").unwrap(), "hello");
        assert_eq!(text(&String::from("world")).unwrap(), "world");
    }

    #[test]
    fn test_scalars() {
        assert_eq!(text(&42i32).unwrap(), "42");
        assert_eq!(text(&-7i8).unwrap(), "-7");
        assert_eq!(text(&u64::MAX).unwrap(), "18446744073709551615");
        assert_eq!(text(&0.25f64).unwrap(), "0.25");
        assert_eq!(text(&2.5f32).unwrap(), "2.5");
        assert_eq!(text(&false).unwrap(), "false");
        assert_eq!(text(&true).unwrap(), "true");
    }

    #[test]
    fn test_reader_is_drained() {
        let reader = Reader::new(&b"from a reader"[..]);
        assert_eq!(text(&reader).unwrap(), "from a reader");
        // Exhausted after the first render.
        assert_eq!(text(&reader).unwrap(), "");
    }

    #[test]
    fn test_write_to_beats_display() {
        let report = Report {
            body: "written directly",
            fail: false,
        };
        assert_eq!(text(&report).unwrap(), "written directly");
    }

    #[test]
    fn test_failed_branch_does_not_fall_through() {
        let report = Report {
            body: "partial",
            fail: true,
        };
        let mut out = Vec::new();
        let err = TextHandler.render(&mut out, &report).unwrap_err();
        assert!(err.is_failed());
        assert_eq!(err.to_string(), "render: failed: WriteTo error");
        assert_eq!(out, b"partial");
    }

    #[test]
    fn test_display() {
        assert_eq!(text(&Version).unwrap(), "v1.2.3");
    }

    #[test]
    fn test_error_message() {
        assert_eq!(text(&Oops).unwrap(), "something broke");
        assert_eq!(
            text(&io::Error::other("io went wrong")).unwrap(),
            "io went wrong"
        );
    }

    #[test]
    fn test_cannot_render_names_type() {
        let err = text(&Opaque).unwrap_err();
        assert!(err.is_cannot_render());
        assert!(err.to_string().starts_with("render: cannot render: "));
        assert!(err.to_string().ends_with("Opaque"));
    }

    #[test]
    fn test_serialize_only_value_is_rejected() {
        let value = serde_json::json!({"age": 30});
        assert!(text(&value).unwrap_err().is_cannot_render());
    }

    #[test]
    fn test_write_errors_are_failures() {
        let mut writer = FailingWriter("write error");
        let err = TextHandler.render(&mut writer, &"text").unwrap_err();
        assert!(err.is_failed());
        assert_eq!(err.to_string(), "render: failed: write error");

        let err = TextHandler.render(&mut writer, &Version).unwrap_err();
        assert!(err.is_failed());
    }

    #[test]
    fn test_formats() {
        assert_eq!(
            TextHandler.formats(),
            Some(vec!["text".to_string(), "txt".to_string(), "plain".to_string()])
        );
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(text(&3.5f64).unwrap(), text(&3.5f64).unwrap());
    }
}
