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

//! Built-in handlers.
//!
//! # Structured formats
//!
//! [`JsonHandler`], [`YamlHandler`] and [`XmlHandler`] require the value's
//! serde serialization ([`Renderable::as_serialize`]) and delegate encoding
//! to `serde_json`, `serde_yaml` and `quick-xml`. [`PostcardHandler`]
//! (feature `postcard`) does the same with postcard's compact binary form.
//!
//! # Binary
//!
//! [`BinaryHandler`] writes whatever [`MarshalBinary`](crate::MarshalBinary)
//! produces.
//!
//! # Text
//!
//! [`TextHandler`] coerces many kinds of values to text. [`DisplayHandler`]
//! and [`WriteToHandler`] each cover a single text capability and are meant
//! for composing custom text strategies with [`MultiHandler`].
//!
//! # Composition
//!
//! [`MultiHandler`] tries a list of handlers in order until one accepts the
//! value.
//!
//! | Handler | Pretty | Formats |
//! |---------|--------|---------|
//! | [`JsonHandler`] | yes | `json` |
//! | [`YamlHandler`] | no | `yaml`, `yml` |
//! | [`XmlHandler`] | yes | `xml` |
//! | [`BinaryHandler`] | no | `binary`, `bin` |
//! | [`TextHandler`] | no | `text`, `txt`, `plain` |
//! | [`MultiHandler`] | yes | union of its handlers |

mod binary;
mod display;
mod json;
mod multi;
#[cfg(feature = "postcard")]
mod postcard;
mod text;
mod write_to;
mod xml;
mod yaml;

pub use self::binary::BinaryHandler;
pub use self::display::DisplayHandler;
pub use self::json::JsonHandler;
pub use self::multi::MultiHandler;
#[cfg(feature = "postcard")]
pub use self::postcard::PostcardHandler;
pub use self::text::{TEXT_PRECEDENCE, TextCapability, TextHandler};
pub use self::write_to::WriteToHandler;
pub use self::xml::XmlHandler;
pub use self::yaml::YamlHandler;

use crate::error::{RenderError, Result};
use crate::value::Renderable;

/// Returns the serde view of `value`, or a capability mismatch.
fn serializable(value: &dyn Renderable) -> Result<&dyn erased_serde::Serialize> {
    value
        .as_serialize()
        .ok_or_else(|| RenderError::cannot_render(value.type_name()))
}

fn format_names(names: &[&str]) -> Option<Vec<String>> {
    Some(names.iter().map(|name| (*name).to_string()).collect())
}
