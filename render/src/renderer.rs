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

//! Format registry.

use crate::error::{RenderError, Result};
use crate::handler::{Handler, render_with};
use crate::value::Renderable;
use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

#[cfg(feature = "observability")]
use tracing::debug;

/// Maps case-insensitive format names to handlers.
///
/// Registering a handler under a name also registers it under every alias
/// the handler declares through [`Handler::formats`], so a
/// [`YamlHandler`](crate::YamlHandler) added as `"yaml"` answers to `"yml"`
/// too. All aliases share one `Arc`. Registering a name again replaces the
/// previous handler.
///
/// Rendering never surfaces [`RenderError::CannotRender`]: a handler that
/// rejects the value is reported as [`RenderError::UnsupportedFormat`],
/// exactly like an unknown name.
///
/// # Examples
///
/// ```rust
/// use render::{JsonHandler, Renderer, TextHandler, YamlHandler};
///
/// let renderer = Renderer::new()
///     .with("json", JsonHandler::new())
///     .with("text", TextHandler)
///     .with("yaml", YamlHandler);
///
/// assert_eq!(renderer.formats(), ["json", "plain", "text", "txt", "yaml", "yml"]);
///
/// let mut out = Vec::new();
/// renderer.compact(&mut out, "YML", &"hello").unwrap();
/// assert_eq!(out, b"hello\n");
///
/// let err = renderer.compact(&mut out, "toml", &"hello").unwrap_err();
/// assert_eq!(err.to_string(), "render: unsupported format: toml");
/// ```
#[derive(Clone, Default)]
pub struct Renderer {
    handlers: BTreeMap<String, Arc<dyn Handler>>,
}

impl Renderer {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under `format` and its declared aliases.
    pub fn add(&mut self, format: &str, handler: impl Handler + 'static) -> &mut Self {
        self.add_shared(format, Arc::new(handler))
    }

    /// Registers an already shared handler under `format` and its declared
    /// aliases.
    ///
    /// An empty `format` registers the aliases only. Empty aliases are
    /// ignored.
    pub fn add_shared(&mut self, format: &str, handler: Arc<dyn Handler>) -> &mut Self {
        if !format.is_empty() {
            self.handlers
                .insert(format.to_lowercase(), Arc::clone(&handler));
        }

        for alias in handler.formats().unwrap_or_default() {
            if !alias.is_empty() && alias != format {
                self.handlers
                    .insert(alias.to_lowercase(), Arc::clone(&handler));
            }
        }

        self
    }

    /// Builder form of [`Renderer::add`].
    pub fn with(mut self, format: &str, handler: impl Handler + 'static) -> Self {
        self.add(format, handler);
        self
    }

    /// Builder form of [`Renderer::add_shared`].
    pub fn with_shared(mut self, format: &str, handler: Arc<dyn Handler>) -> Self {
        self.add_shared(format, handler);
        self
    }

    /// Renders `value` into `writer` in the named format.
    ///
    /// The pretty variant is used when `pretty` is set and the handler has
    /// one; otherwise the compact variant is used.
    ///
    /// # Errors
    ///
    /// - [`RenderError::UnsupportedFormat`] if `format` is not registered or
    ///   its handler cannot render `value`.
    /// - [`RenderError::Failed`] if the handler accepted the value and then
    ///   failed. Bytes already written stay written.
    pub fn render(
        &self,
        writer: &mut dyn Write,
        format: &str,
        pretty: bool,
        value: &dyn Renderable,
    ) -> Result<()> {
        let Some(handler) = self.handler(format) else {
            #[cfg(feature = "observability")]
            debug!(format, "No handler registered for format");
            return Err(RenderError::unsupported_format(format));
        };

        #[cfg(feature = "observability")]
        debug!(format, pretty, type_name = value.type_name(), "Rendering value");

        render_with(handler.as_ref(), writer, value, pretty).map_err(|error| {
            #[cfg(feature = "observability")]
            debug!(format, error = %error, "Handler returned an error");
            error.classify(format)
        })
    }

    /// Renders the compact variant of `format`.
    pub fn compact(&self, writer: &mut dyn Write, format: &str, value: &dyn Renderable) -> Result<()> {
        self.render(writer, format, false, value)
    }

    /// Renders the pretty variant of `format`, falling back to compact for
    /// handlers without one.
    pub fn pretty(&self, writer: &mut dyn Write, format: &str, value: &dyn Renderable) -> Result<()> {
        self.render(writer, format, true, value)
    }

    /// Returns a new registry holding only the listed formats.
    ///
    /// Names are looked up case-insensitively. Names that are not
    /// registered are dropped. Aliases are not expanded again, so
    /// restricting to `["yml"]` keeps `yml` without `yaml`.
    ///
    /// ```rust
    /// use render::{Renderer, YamlHandler};
    ///
    /// let renderer = Renderer::new().with("yaml", YamlHandler);
    /// let only_yml = renderer.only_with(["YML", "toml"]);
    /// assert_eq!(only_yml.formats(), ["yml"]);
    /// ```
    pub fn only_with<I, S>(&self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let handlers = formats
            .into_iter()
            .filter_map(|format| {
                let key = format.as_ref().to_lowercase();
                let handler = self.handlers.get(&key).map(Arc::clone)?;
                Some((key, handler))
            })
            .collect();
        Self { handlers }
    }

    /// Registered format names, sorted.
    pub fn formats(&self) -> Vec<&str> {
        self.handlers.keys().map(String::as_str).collect()
    }

    /// Returns the handler registered for `format`, ignoring case.
    pub fn handler(&self, format: &str) -> Option<&Arc<dyn Handler>> {
        self.handlers.get(&format.to_lowercase())
    }

    /// Returns `true` if `format` is registered, ignoring case.
    pub fn supports(&self, format: &str) -> bool {
        self.handler(format).is_some()
    }

    /// Number of registered format names, aliases included.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if no format is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, Arc<dyn Handler>)> for Renderer {
    fn from_iter<I: IntoIterator<Item = (S, Arc<dyn Handler>)>>(iter: I) -> Self {
        let mut renderer = Self::new();
        for (format, handler) in iter {
            renderer.add_shared(format.as_ref(), handler);
        }
        renderer
    }
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("formats", &self.formats())
            .finish()
    }
}
