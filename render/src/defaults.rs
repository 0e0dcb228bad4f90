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

//! Ready-made registries.
//!
//! Every function here builds a fresh [`Renderer`]; there is no shared
//! global state. Build one registry up front when rendering in a loop.
//!
//! # Examples
//!
//! ```rust
//! use render::defaults;
//!
//! let mut out = Vec::new();
//! defaults::pretty(&mut out, "json", &serde_json::json!({"age": 30})).unwrap();
//! assert_eq!(out, b"{\n  \"age\": 30\n}\n");
//! ```

use crate::error::{RenderError, Result};
use crate::handlers::{BinaryHandler, JsonHandler, TextHandler, XmlHandler, YamlHandler};
use crate::renderer::Renderer;
use crate::value::Renderable;
use std::io::Write;

/// Format names served by [`standard`].
pub const STANDARD_FORMATS: [&str; 7] = ["json", "plain", "text", "txt", "xml", "yaml", "yml"];

/// Registry with every built-in format except postcard: `binary`/`bin`,
/// `json`, `text`/`txt`/`plain`, `xml` and `yaml`/`yml`.
pub fn all() -> Renderer {
    Renderer::new()
        .with("binary", BinaryHandler)
        .with("json", JsonHandler::new())
        .with("text", TextHandler)
        .with("xml", XmlHandler::new())
        .with("yaml", YamlHandler)
}

/// [`all`] without the binary formats; the set a command line `--format`
/// flag usually offers.
pub fn standard() -> Renderer {
    all().only_with(STANDARD_FORMATS)
}

/// [`all`] restricted to `formats`.
///
/// # Errors
///
/// - [`RenderError::NoFormats`] if `formats` is empty.
/// - [`RenderError::UnsupportedFormat`] naming the first format [`all`]
///   does not know.
///
/// # Examples
///
/// ```rust
/// use render::defaults;
///
/// let renderer = defaults::restricted(["json", "yaml"]).unwrap();
/// assert_eq!(renderer.formats(), ["json", "yaml"]);
///
/// let err = defaults::restricted(["json", "toml"]).unwrap_err();
/// assert_eq!(err.to_string(), "render: unsupported format: toml");
/// ```
pub fn restricted<I, S>(formats: I) -> Result<Renderer>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let formats: Vec<S> = formats.into_iter().collect();
    if formats.is_empty() {
        return Err(RenderError::NoFormats);
    }

    let all = all();
    if let Some(unknown) = formats.iter().find(|format| !all.supports(format.as_ref())) {
        return Err(RenderError::unsupported_format(unknown.as_ref()));
    }

    Ok(all.only_with(formats))
}

/// Renders `value` with a [`standard`] registry.
pub fn render(writer: &mut dyn Write, format: &str, pretty: bool, value: &dyn Renderable) -> Result<()> {
    standard().render(writer, format, pretty, value)
}

/// Renders the pretty variant of `format` with a [`standard`] registry.
pub fn pretty(writer: &mut dyn Write, format: &str, value: &dyn Renderable) -> Result<()> {
    render(writer, format, true, value)
}

/// Renders the compact variant of `format` with a [`standard`] registry.
pub fn compact(writer: &mut dyn Write, format: &str, value: &dyn Renderable) -> Result<()> {
    render(writer, format, false, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_formats() {
        assert_eq!(
            all().formats(),
            ["bin", "binary", "json", "plain", "text", "txt", "xml", "yaml", "yml"]
        );
    }

    #[test]
    fn test_standard_excludes_binary() {
        let renderer = standard();
        assert_eq!(renderer.formats(), STANDARD_FORMATS);
        assert!(!renderer.supports("binary"));
        assert!(!renderer.supports("bin"));
    }

    #[test]
    fn test_restricted() {
        let renderer = restricted(["YAML", "bin"]).unwrap();
        assert_eq!(renderer.formats(), ["bin", "yaml"]);
    }

    #[test]
    fn test_restricted_errors() {
        let err = restricted(Vec::<&str>::new()).unwrap_err();
        assert!(matches!(err, RenderError::NoFormats));
        assert_eq!(err.to_string(), "render: no formats specified");

        let err = restricted(["json", "toml", "ini"]).unwrap_err();
        assert!(err.is_unsupported_format());
        assert_eq!(err.to_string(), "render: unsupported format: toml");
    }

    #[test]
    fn test_conveniences() {
        let mut out = Vec::new();
        compact(&mut out, "TEXT", &42u8).unwrap();
        compact(&mut out, "json", &42u8).unwrap();
        pretty(&mut out, "plain", &true).unwrap();
        assert_eq!(out, b"4242\ntrue");

        let err = render(&mut out, "binary", false, &1u8).unwrap_err();
        assert!(err.is_unsupported_format());
    }
}
