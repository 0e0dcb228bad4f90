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

//! [`WriteTo`](crate::WriteTo) text handler.

use crate::error::{RenderError, Result};
use crate::handler::Handler;
use crate::value::Renderable;
use std::io::Write;

/// Lets a value write itself through [`WriteTo`](crate::WriteTo).
///
/// Declares no formats.
#[derive(Clone, Copy, Debug, Default)]
pub struct WriteToHandler;

impl Handler for WriteToHandler {
    fn render(&self, writer: &mut dyn Write, value: &dyn Renderable) -> Result<()> {
        let source = value
            .as_write_to()
            .ok_or_else(|| RenderError::cannot_render(value.type_name()))?;
        source.write_to(writer)?;
        Ok(())
    }
}
