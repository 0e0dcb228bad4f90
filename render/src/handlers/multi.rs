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

//! Fallback composition of handlers.

use crate::error::{RenderError, Result};
use crate::handler::{Handler, PrettyHandler, render_with};
use crate::value::Renderable;
use std::io::Write;
use std::sync::Arc;

#[cfg(feature = "observability")]
use tracing::trace;

/// Tries a list of handlers in order until one succeeds.
///
/// For each handler in turn:
///
/// - success ends the search, so later handlers are never invoked;
/// - [`RenderError::CannotRender`] moves on to the next handler;
/// - any other error is returned immediately and unchanged.
///
/// If every handler rejects the value, the result is
/// [`RenderError::CannotRender`] naming the value's type.
///
/// # Examples
///
/// ```rust
/// use render::{Handler, DisplayHandler, MultiHandler, Displayed, WriteToHandler};
///
/// let text = MultiHandler::new()
///     .with_handler(WriteToHandler)
///     .with_handler(DisplayHandler);
///
/// let mut out = Vec::new();
/// text.render(&mut out, &Displayed("v1.2.3")).unwrap();
/// assert_eq!(out, b"v1.2.3");
/// ```
#[derive(Clone, Default)]
pub struct MultiHandler {
    handlers: Vec<Arc<dyn Handler>>,
}

impl MultiHandler {
    /// Creates an empty composer. It rejects every value until handlers are
    /// added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a composer over `handlers`, tried in iteration order.
    pub fn from_handlers(handlers: impl IntoIterator<Item = Arc<dyn Handler>>) -> Self {
        Self {
            handlers: handlers.into_iter().collect(),
        }
    }

    /// Appends `handler` to the end of the list.
    pub fn with_handler(mut self, handler: impl Handler + 'static) -> Self {
        self.handlers.push(Arc::new(handler));
        self
    }

    /// Appends an already shared handler to the end of the list.
    pub fn with_shared(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// The handlers, in the order they are tried.
    pub fn handlers(&self) -> &[Arc<dyn Handler>] {
        &self.handlers
    }

    fn render_first(&self, writer: &mut dyn Write, value: &dyn Renderable, pretty: bool) -> Result<()> {
        for handler in &self.handlers {
            match render_with(handler.as_ref(), writer, value, pretty) {
                Err(RenderError::CannotRender { .. }) => {
                    #[cfg(feature = "observability")]
                    trace!(type_name = value.type_name(), "handler cannot render value");
                }
                result => return result,
            }
        }

        Err(RenderError::cannot_render(value.type_name()))
    }
}

impl std::fmt::Debug for MultiHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiHandler")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl Handler for MultiHandler {
    fn render(&self, writer: &mut dyn Write, value: &dyn Renderable) -> Result<()> {
        self.render_first(writer, value, false)
    }

    fn as_pretty(&self) -> Option<&dyn PrettyHandler> {
        Some(self)
    }

    /// Union of the contained handlers' formats, de-duplicated in first-seen
    /// order.
    fn formats(&self) -> Option<Vec<String>> {
        let mut formats: Vec<String> = Vec::new();
        for declared in self.handlers.iter().filter_map(|handler| handler.formats()) {
            for format in declared {
                if !formats.contains(&format) {
                    formats.push(format);
                }
            }
        }
        Some(formats)
    }
}

impl PrettyHandler for MultiHandler {
    fn render_pretty(&self, writer: &mut dyn Write, value: &dyn Renderable) -> Result<()> {
        self.render_first(writer, value, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted handler that counts its invocations.
    struct Mock {
        output: &'static str,
        pretty_output: Option<&'static str>,
        outcome: Outcome,
        formats: Option<&'static [&'static str]>,
        calls: AtomicUsize,
    }

    #[derive(Clone, Copy)]
    enum Outcome {
        Succeed,
        CannotRender,
        Fail(&'static str),
    }

    impl Mock {
        fn new(output: &'static str, outcome: Outcome) -> Arc<Self> {
            Arc::new(Self {
                output,
                pretty_output: None,
                outcome,
                formats: None,
                calls: AtomicUsize::new(0),
            })
        }

        fn with_formats(formats: &'static [&'static str]) -> Arc<Self> {
            Arc::new(Self {
                output: "",
                pretty_output: None,
                outcome: Outcome::CannotRender,
                formats: Some(formats),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn run(&self, writer: &mut dyn Write, output: &str) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.outcome {
                Outcome::Succeed => {
                    writer.write_all(output.as_bytes())?;
                    Ok(())
                }
                Outcome::CannotRender => Err(RenderError::cannot_render("mock")),
                Outcome::Fail(message) => Err(RenderError::failed(io::Error::other(message))),
            }
        }
    }

    impl Handler for Mock {
        fn render(&self, writer: &mut dyn Write, _value: &dyn Renderable) -> Result<()> {
            self.run(writer, self.output)
        }

        fn as_pretty(&self) -> Option<&dyn PrettyHandler> {
            self.pretty_output.map(|_| self as &dyn PrettyHandler)
        }

        fn formats(&self) -> Option<Vec<String>> {
            self.formats
                .map(|formats| formats.iter().map(|f| (*f).to_string()).collect())
        }
    }

    impl PrettyHandler for Mock {
        fn render_pretty(&self, writer: &mut dyn Write, _value: &dyn Renderable) -> Result<()> {
            self.run(writer, self.pretty_output.unwrap_or(self.output))
        }
    }

    fn multi(handlers: &[Arc<Mock>]) -> MultiHandler {
        MultiHandler::from_handlers(handlers.iter().map(|h| h.clone() as Arc<dyn Handler>))
    }

    fn render(multi: &MultiHandler, pretty: bool) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = render_with(multi, &mut out, &"value", pretty);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_first_success_short_circuits() {
        let a = Mock::new("", Outcome::CannotRender);
        let b = Mock::new("X", Outcome::Succeed);
        let c = Mock::new("Y", Outcome::Succeed);
        let (result, out) = render(&multi(&[a.clone(), b.clone(), c.clone()]), false);

        assert!(result.is_ok());
        assert_eq!(out, "X");
        assert_eq!(a.calls(), 1);
        assert_eq!(b.calls(), 1);
        assert_eq!(c.calls(), 0);
    }

    #[test]
    fn test_success_before_failure_never_invokes_failure() {
        let a = Mock::new("X", Outcome::Succeed);
        let b = Mock::new("", Outcome::Fail("E"));
        let (result, out) = render(&multi(&[a, b.clone()]), false);

        assert!(result.is_ok());
        assert_eq!(out, "X");
        assert_eq!(b.calls(), 0);
    }

    #[test]
    fn test_failure_is_authoritative() {
        let a = Mock::new("", Outcome::CannotRender);
        let b = Mock::new("", Outcome::Fail("mock error"));
        let c = Mock::new("never", Outcome::Succeed);
        let (result, out) = render(&multi(&[a, b, c.clone()]), false);

        let err = result.unwrap_err();
        assert!(err.is_failed());
        assert_eq!(err.to_string(), "render: failed: mock error");
        assert_eq!(out, "");
        assert_eq!(c.calls(), 0);
    }

    #[test]
    fn test_exhaustion_names_value_type() {
        let a = Mock::new("", Outcome::CannotRender);
        let b = Mock::new("", Outcome::CannotRender);
        let (result, _) = render(&multi(&[a, b]), false);

        let err = result.unwrap_err();
        assert!(err.is_cannot_render());
        assert_eq!(err.to_string(), "render: cannot render: &str");
    }

    #[test]
    fn test_empty_rejects_everything() {
        let (result, _) = render(&MultiHandler::new(), true);
        assert!(result.unwrap_err().is_cannot_render());
    }

    #[test]
    fn test_pretty_uses_pretty_capable_handlers() {
        let skip = Mock::new("", Outcome::CannotRender);
        let fancy = Arc::new(Mock {
            output: "compact",
            pretty_output: Some("pretty"),
            outcome: Outcome::Succeed,
            formats: None,
            calls: AtomicUsize::new(0),
        });
        let handler = multi(&[skip, fancy]);

        assert_eq!(render(&handler, true).1, "pretty");
        assert_eq!(render(&handler, false).1, "compact");
    }

    #[test]
    fn test_pretty_falls_back_to_render() {
        let plain = Mock::new("plain", Outcome::Succeed);
        let handler = multi(&[plain]);
        assert_eq!(render(&handler, true).1, render(&handler, false).1);
    }

    #[test]
    fn test_formats_union_in_first_seen_order() {
        let handler = multi(&[
            Mock::with_formats(&["yaml", "yml"]),
            Mock::new("", Outcome::Succeed),
            Mock::with_formats(&["text", "yml", "txt"]),
        ]);
        assert_eq!(
            handler.formats(),
            Some(vec![
                "yaml".to_string(),
                "yml".to_string(),
                "text".to_string(),
                "txt".to_string(),
            ])
        );
    }

    #[test]
    fn test_formats_without_declaring_handlers() {
        let handler = multi(&[Mock::new("", Outcome::Succeed)]);
        assert_eq!(handler.formats(), Some(Vec::new()));
    }

    #[test]
    fn test_nested_multi() {
        let inner = MultiHandler::new().with_shared(Mock::new("inner", Outcome::Succeed));
        let outer = MultiHandler::new()
            .with_shared(Mock::new("", Outcome::CannotRender))
            .with_handler(inner);
        assert_eq!(render(&outer, false).1, "inner");
        assert_eq!(outer.handlers().len(), 2);
    }
}
