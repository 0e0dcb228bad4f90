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

//! Value capabilities.
//!
//! Handlers never see concrete types. They receive a `&dyn Renderable` and
//! probe it for the capability they need: raw bytes, text, a scalar, a serde
//! serialization, a binary encoding, and so on. Each probe returns `None`
//! when the value does not offer that capability, which is how a handler
//! decides to report [`RenderError::CannotRender`](crate::RenderError).
//!
//! Common std types implement [`Renderable`] out of the box. Custom types
//! either implement it by hand or use `#[derive(Renderable)]` with the
//! `derive` feature:
//!
//! ```rust
//! use render::{Renderable, Scalar};
//!
//! struct Version(u32, u32, u32);
//!
//! impl std::fmt::Display for Version {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         write!(f, "v{}.{}.{}", self.0, self.1, self.2)
//!     }
//! }
//!
//! impl Renderable for Version {
//!     fn as_display(&self) -> Option<&dyn std::fmt::Display> {
//!         Some(self)
//!     }
//! }
//!
//! let version = Version(1, 2, 3);
//! assert!(version.as_display().is_some());
//! assert!(version.as_serialize().is_none());
//! assert_eq!(42u8.as_scalar(), Some(Scalar::U8(42)));
//! ```

use crate::error::BoxError;
use std::cell::RefCell;
use std::fmt;
use std::io::{self, Read, Write};
use std::sync::Arc;

/// A value that can be handed to a [`Handler`](crate::Handler).
///
/// Every accessor is optional and returns `None` unless overridden. A type
/// overrides exactly the capabilities it has.
pub trait Renderable {
    /// Concrete type name, used in diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Raw byte sequence.
    fn as_bytes(&self) -> Option<&[u8]> {
        None
    }

    /// Character sequence.
    fn as_chars(&self) -> Option<&[char]> {
        None
    }

    /// Text string.
    fn as_str(&self) -> Option<&str> {
        None
    }

    /// Numeric or boolean scalar.
    fn as_scalar(&self) -> Option<Scalar> {
        None
    }

    /// Byte stream read until exhaustion.
    fn as_reader(&self) -> Option<&RefCell<dyn Read + '_>> {
        None
    }

    /// Writes itself directly into a writer.
    fn as_write_to(&self) -> Option<&dyn WriteTo> {
        None
    }

    /// Human-readable display form.
    fn as_display(&self) -> Option<&dyn fmt::Display> {
        None
    }

    /// Failure or error condition.
    fn as_error(&self) -> Option<&dyn std::error::Error> {
        None
    }

    /// Serde serialization, used by the structured format handlers.
    fn as_serialize(&self) -> Option<&dyn erased_serde::Serialize> {
        None
    }

    /// Self-describing binary encoding.
    fn as_binary(&self) -> Option<&dyn MarshalBinary> {
        None
    }
}

/// A value that can write itself into a writer, reporting bytes written.
pub trait WriteTo {
    /// Writes `self` into `writer` and returns the number of bytes written.
    fn write_to(&self, writer: &mut dyn Write) -> io::Result<u64>;
}

/// A value with its own binary encoding.
pub trait MarshalBinary {
    /// Encodes `self` into bytes.
    fn marshal_binary(&self) -> Result<Vec<u8>, BoxError>;
}

/// A primitive numeric or boolean value.
///
/// Displays using the primitive's own [`Display`](fmt::Display): decimal
/// integers, shortest round-trip floats, `true`/`false`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[allow(missing_docs)]
pub enum Scalar {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
    F32(f32),
    F64(f64),
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I8(v) => fmt::Display::fmt(v, f),
            Self::I16(v) => fmt::Display::fmt(v, f),
            Self::I32(v) => fmt::Display::fmt(v, f),
            Self::I64(v) => fmt::Display::fmt(v, f),
            Self::I128(v) => fmt::Display::fmt(v, f),
            Self::Isize(v) => fmt::Display::fmt(v, f),
            Self::U8(v) => fmt::Display::fmt(v, f),
            Self::U16(v) => fmt::Display::fmt(v, f),
            Self::U32(v) => fmt::Display::fmt(v, f),
            Self::U64(v) => fmt::Display::fmt(v, f),
            Self::U128(v) => fmt::Display::fmt(v, f),
            Self::Usize(v) => fmt::Display::fmt(v, f),
            Self::F32(v) => fmt::Display::fmt(v, f),
            Self::F64(v) => fmt::Display::fmt(v, f),
            Self::Bool(v) => fmt::Display::fmt(v, f),
        }
    }
}

macro_rules! scalar_renderable {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl Renderable for $ty {
                fn as_scalar(&self) -> Option<Scalar> {
                    Some(Scalar::$variant(*self))
                }

                fn as_serialize(&self) -> Option<&dyn erased_serde::Serialize> {
                    Some(self)
                }
            }
        )*
    };
}

scalar_renderable! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    bool => Bool,
}

impl Renderable for String {
    fn as_str(&self) -> Option<&str> {
        Some(String::as_str(self))
    }

    fn as_serialize(&self) -> Option<&dyn erased_serde::Serialize> {
        Some(self)
    }
}

impl Renderable for &str {
    fn as_str(&self) -> Option<&str> {
        Some(*self)
    }

    fn as_serialize(&self) -> Option<&dyn erased_serde::Serialize> {
        Some(self)
    }
}

impl Renderable for Vec<u8> {
    fn as_bytes(&self) -> Option<&[u8]> {
        Some(self.as_slice())
    }

    fn as_serialize(&self) -> Option<&dyn erased_serde::Serialize> {
        Some(self)
    }
}

impl Renderable for &[u8] {
    fn as_bytes(&self) -> Option<&[u8]> {
        Some(*self)
    }

    fn as_serialize(&self) -> Option<&dyn erased_serde::Serialize> {
        Some(self)
    }
}

impl Renderable for Vec<char> {
    fn as_chars(&self) -> Option<&[char]> {
        Some(self.as_slice())
    }

    fn as_serialize(&self) -> Option<&dyn erased_serde::Serialize> {
        Some(self)
    }
}

impl Renderable for char {
    fn as_chars(&self) -> Option<&[char]> {
        Some(std::slice::from_ref(self))
    }

    fn as_serialize(&self) -> Option<&dyn erased_serde::Serialize> {
        Some(self)
    }
}

impl Renderable for serde_json::Value {
    fn as_serialize(&self) -> Option<&dyn erased_serde::Serialize> {
        Some(self)
    }
}

impl Renderable for io::Error {
    fn as_error(&self) -> Option<&dyn std::error::Error> {
        Some(self)
    }
}

impl Renderable for dyn std::error::Error + Send + Sync {
    fn as_error(&self) -> Option<&dyn std::error::Error> {
        Some(self)
    }
}

macro_rules! forward_renderable {
    ($($wrapper:ident),*) => {
        $(
            impl<T: Renderable + ?Sized> Renderable for $wrapper<T> {
                fn type_name(&self) -> &'static str {
                    (**self).type_name()
                }

                fn as_bytes(&self) -> Option<&[u8]> {
                    (**self).as_bytes()
                }

                fn as_chars(&self) -> Option<&[char]> {
                    (**self).as_chars()
                }

                fn as_str(&self) -> Option<&str> {
                    (**self).as_str()
                }

                fn as_scalar(&self) -> Option<Scalar> {
                    (**self).as_scalar()
                }

                fn as_reader(&self) -> Option<&RefCell<dyn Read + '_>> {
                    (**self).as_reader()
                }

                fn as_write_to(&self) -> Option<&dyn WriteTo> {
                    (**self).as_write_to()
                }

                fn as_display(&self) -> Option<&dyn fmt::Display> {
                    (**self).as_display()
                }

                fn as_error(&self) -> Option<&dyn std::error::Error> {
                    (**self).as_error()
                }

                fn as_serialize(&self) -> Option<&dyn erased_serde::Serialize> {
                    (**self).as_serialize()
                }

                fn as_binary(&self) -> Option<&dyn MarshalBinary> {
                    (**self).as_binary()
                }
            }
        )*
    };
}

forward_renderable!(Box, Arc);

/// Exposes a [`Read`] source as a renderable byte stream.
///
/// The stream is consumed by the first handler that drains it.
///
/// ```rust
/// use render::{Reader, TextHandler, Handler};
///
/// let reader = Reader::new(&b"streamed"[..]);
/// let mut out = Vec::new();
/// TextHandler.render(&mut out, &reader).unwrap();
/// assert_eq!(out, b"streamed");
/// ```
pub struct Reader<R> {
    inner: RefCell<R>,
}

impl<R: Read> Reader<R> {
    /// Wraps `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            inner: RefCell::new(reader),
        }
    }

    /// Returns the wrapped reader.
    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }
}

impl<R: Read> Renderable for Reader<R> {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<R>()
    }

    fn as_reader(&self) -> Option<&RefCell<dyn Read + '_>> {
        Some(&self.inner)
    }
}

/// Exposes only the serde serialization of a value.
///
/// Handy for rendering `#[derive(Serialize)]` types without implementing
/// [`Renderable`] for them.
#[derive(Clone, Debug)]
pub struct Serialized<T>(pub T);

impl<T: serde::Serialize> Renderable for Serialized<T> {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn as_serialize(&self) -> Option<&dyn erased_serde::Serialize> {
        Some(&self.0)
    }
}

/// Exposes only the [`Display`](fmt::Display) form of a value.
#[derive(Clone, Debug)]
pub struct Displayed<T>(pub T);

impl<T: fmt::Display> Renderable for Displayed<T> {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn as_display(&self) -> Option<&dyn fmt::Display> {
        Some(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Opaque;

    impl Renderable for Opaque {}

    #[test]
    fn test_defaults_are_none() {
        let value = Opaque;
        assert!(value.as_bytes().is_none());
        assert!(value.as_chars().is_none());
        assert!(value.as_str().is_none());
        assert!(value.as_scalar().is_none());
        assert!(value.as_reader().is_none());
        assert!(value.as_write_to().is_none());
        assert!(value.as_display().is_none());
        assert!(value.as_error().is_none());
        assert!(value.as_serialize().is_none());
        assert!(value.as_binary().is_none());
    }

    #[test]
    fn test_type_name_is_concrete() {
        let value: &dyn Renderable = &Opaque;
        assert!(value.type_name().ends_with("Opaque"));
        assert_eq!(String::new().type_name(), "alloc::string::String");
    }

    #[test]
    fn test_scalar_display() {
        assert_eq!(Scalar::I32(-42).to_string(), "-42");
        assert_eq!(Scalar::U128(u128::MAX).to_string(), u128::MAX.to_string());
        assert_eq!(Scalar::F64(0.1).to_string(), "0.1");
        assert_eq!(Scalar::F32(1.5).to_string(), "1.5");
        assert_eq!(Scalar::Bool(true).to_string(), "true");
    }

    #[test]
    fn test_primitives_are_scalars_and_serializable() {
        assert_eq!(7u16.as_scalar(), Some(Scalar::U16(7)));
        assert_eq!(false.as_scalar(), Some(Scalar::Bool(false)));
        assert!(3.25f64.as_serialize().is_some());
        assert_eq!(Scalar::from(9i64), Scalar::I64(9));
    }

    #[test]
    fn test_strings_and_bytes() {
        assert_eq!(Renderable::as_str(&"abc"), Some("abc"));
        assert_eq!(Renderable::as_str(&String::from("abc")), Some("abc"));
        assert_eq!(vec![1u8, 2].as_bytes(), Some(&[1u8, 2][..]));
        assert_eq!('x'.as_chars(), Some(&['x'][..]));
    }

    #[test]
    fn test_box_forwards_capabilities() {
        let boxed: Box<dyn Renderable> = Box::new(String::from("inner"));
        assert_eq!(Renderable::as_str(&boxed), Some("inner"));
        assert_eq!(boxed.type_name(), "alloc::string::String");

        let shared = Arc::new(5u8);
        assert_eq!(shared.as_scalar(), Some(Scalar::U8(5)));
    }

    #[test]
    fn test_reader_wrapper() {
        let reader = Reader::new(&b"data"[..]);
        let cell = reader.as_reader().unwrap();
        let mut buf = Vec::new();
        cell.borrow_mut().read_to_end(&mut buf).unwrap();
        assert_eq!(buf, b"data");
    }

    #[test]
    fn test_errors_expose_message() {
        let error = io::Error::other("disk on fire");
        assert_eq!(error.as_error().unwrap().to_string(), "disk on fire");

        let boxed: BoxError = "boxed failure".into();
        assert_eq!(boxed.as_error().unwrap().to_string(), "boxed failure");
    }

    #[test]
    fn test_wrappers_expose_single_capability() {
        let serialized = Serialized(vec![1, 2, 3]);
        assert!(serialized.as_serialize().is_some());
        assert!(serialized.as_display().is_none());

        let displayed = Displayed(12.5f32);
        assert!(displayed.as_display().is_some());
        assert!(displayed.as_scalar().is_none());
        assert_eq!(displayed.type_name(), "f32");
    }
}
