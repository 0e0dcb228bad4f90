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

//! YAML handler implementation.

use crate::error::{RenderError, Result};
use crate::handler::Handler;
use crate::value::Renderable;
use std::io::Write;

/// YAML handler.
///
/// Writes the `serde_yaml` encoding of any value exposing a serde
/// serialization. YAML is already human-oriented, so there is no separate
/// pretty variant.
///
/// # Examples
///
/// ```rust
/// use render::{Handler, YamlHandler};
///
/// let mut out = Vec::new();
/// YamlHandler.render(&mut out, &serde_json::json!({"age": 30})).unwrap();
/// assert_eq!(out, b"age: 30\n");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct YamlHandler;

impl Handler for YamlHandler {
    fn render(&self, writer: &mut dyn Write, value: &dyn Renderable) -> Result<()> {
        let value = super::serializable(value)?;
        serde_yaml::to_writer(writer, value).map_err(RenderError::failed)
    }

    fn formats(&self) -> Option<Vec<String>> {
        super::format_names(&["yaml", "yml"])
    }
}
