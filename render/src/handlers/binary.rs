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

//! Binary handler implementation.

use crate::error::{RenderError, Result};
use crate::handler::Handler;
use crate::value::Renderable;
use std::io::Write;

/// Writes the bytes produced by a value's [`MarshalBinary`] implementation.
///
/// [`MarshalBinary`]: crate::MarshalBinary
///
/// # Examples
///
/// ```rust
/// use render::{BinaryHandler, BoxError, Handler, MarshalBinary, Renderable};
///
/// struct Packet(u16);
///
/// impl MarshalBinary for Packet {
///     fn marshal_binary(&self) -> Result<Vec<u8>, BoxError> {
///         Ok(self.0.to_be_bytes().to_vec())
///     }
/// }
///
/// impl Renderable for Packet {
///     fn as_binary(&self) -> Option<&dyn MarshalBinary> {
///         Some(self)
///     }
/// }
///
/// let mut out = Vec::new();
/// BinaryHandler.render(&mut out, &Packet(0x0102)).unwrap();
/// assert_eq!(out, [1, 2]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct BinaryHandler;

impl Handler for BinaryHandler {
    fn render(&self, writer: &mut dyn Write, value: &dyn Renderable) -> Result<()> {
        let marshaler = value
            .as_binary()
            .ok_or_else(|| RenderError::cannot_render(value.type_name()))?;
        let bytes = marshaler.marshal_binary().map_err(RenderError::failed)?;
        writer.write_all(&bytes)?;
        Ok(())
    }

    fn formats(&self) -> Option<Vec<String>> {
        super::format_names(&["binary", "bin"])
    }
}
