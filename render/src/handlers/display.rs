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

//! Display-only text handler.

use crate::error::{RenderError, Result};
use crate::handler::Handler;
use crate::value::Renderable;
use std::io::Write;

/// Writes a value's [`Display`](std::fmt::Display) form and nothing else.
///
/// Declares no formats. Useful as a building block for a custom text
/// strategy inside a [`MultiHandler`](crate::MultiHandler).
#[derive(Clone, Copy, Debug, Default)]
pub struct DisplayHandler;

impl Handler for DisplayHandler {
    fn render(&self, writer: &mut dyn Write, value: &dyn Renderable) -> Result<()> {
        let display = value
            .as_display()
            .ok_or_else(|| RenderError::cannot_render(value.type_name()))?;
        write!(writer, "{display}")?;
        Ok(())
    }
}
