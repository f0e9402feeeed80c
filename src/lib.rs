//! # cton
//!
//! A Serde-compatible codec for CTON (Compact Token-Oriented Notation), a
//! data format built for low token count in LLM contexts: `()` objects,
//! `[N]=`/`[N]{h1,...}=` arrays and tables, and bare top-level `key=value`
//! pairs in place of JSON's braces and repeated quoting.
//!
//! ## Quick start
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use cton::{to_string, from_str};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User { id: 123, name: "Alice".to_string(), active: true };
//!
//! let cton = to_string(&user).unwrap();
//! let user_back: User = from_str(&cton).unwrap();
//! assert_eq!(user, user_back);
//! ```
//!
//! ## Tabular arrays
//!
//! A homogeneous array of flat objects encodes as a table instead of a
//! repeated-key list:
//!
//! ```rust
//! use serde::Serialize;
//! use cton::to_string;
//!
//! #[derive(Serialize)]
//! struct Product { id: u32, name: String }
//!
//! let products = vec![
//!     Product { id: 1, name: "Widget".to_string() },
//!     Product { id: 2, name: "Gadget".to_string() },
//! ];
//!
//! let cton = to_string(&products).unwrap();
//! assert_eq!(cton, "[2]{id,name}=1,Widget;2,Gadget");
//! ```
//!
//! ## Dynamic values with the `cton!` macro
//!
//! ```rust
//! use cton::{cton, CtonValue};
//!
//! let data = cton!({
//!     "name": "Alice",
//!     "tags": ["rust", "serde"]
//! });
//!
//! if let CtonValue::Object(obj) = data {
//!     assert_eq!(obj.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! }
//! ```

pub mod de;
pub mod error;
pub mod grammar;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use de::{validate, ValueDeserializer};
pub use error::{EncodeError, Error, ParseError, Result, ValidationError};
pub use map::CtonMap;
pub use options::{DecimalMode, DecoderOptions, EncoderOptions};
pub use ser::CtonValueSerializer;
pub use value::{CtonValue, ToCton};

use serde::{Deserialize, Serialize};
use std::io;

/// Serializes any `T: Serialize` to a CTON string using default options.
///
/// # Errors
///
/// Returns an error if the value cannot be represented in CTON (an
/// unsafe map key, or a value variant the encoder doesn't support).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, EncoderOptions::default())
}

/// Serializes any `T: Serialize` to a pretty-printed (indented, multi-line)
/// CTON string.
///
/// # Errors
///
/// Returns an error if the value cannot be represented in CTON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, EncoderOptions::new().pretty())
}

/// Serializes any `T: Serialize` to a CTON string with custom
/// [`EncoderOptions`].
///
/// # Examples
///
/// ```rust
/// use cton::{to_string_with_options, EncoderOptions, DecimalMode};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// let options = EncoderOptions::new().with_decimal_mode(DecimalMode::Precise);
/// let cton = to_string_with_options(&point, options).unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented in CTON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: EncoderOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let tree = to_value(value)?;
    ser::encode(&tree, &options).map_err(Error::from)
}

/// Converts any `T: Serialize` into a dynamic [`CtonValue`] tree.
///
/// Useful for working with CTON data when the shape isn't known at compile
/// time, or as the first half of [`to_string_with_options`].
///
/// # Errors
///
/// Returns an error if the value cannot be represented in CTON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<CtonValue>
where
    T: ?Sized + Serialize,
{
    value.serialize(CtonValueSerializer).map_err(Error::from)
}

/// Serializes any `T: Serialize` to a writer, in CTON format, using default
/// options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to `writer` fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, EncoderOptions::default())
}

/// Serializes any `T: Serialize` to a writer with custom [`EncoderOptions`].
///
/// # Errors
///
/// Returns an error if serialization fails or writing to `writer` fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: EncoderOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let cton_string = to_string_with_options(value, options)?;
    writer
        .write_all(cton_string.as_bytes())
        .map_err(|e| Error::io(e.to_string()))?;
    Ok(())
}

/// Deserializes an instance of type `T` from a string of CTON text, using
/// default [`DecoderOptions`].
///
/// # Examples
///
/// ```rust
/// use cton::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x=1\ny=2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid CTON, or cannot be
/// deserialized to type `T`. Parse failures carry line/column information.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<'a, T>(s: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    from_str_with_options(s, DecoderOptions::default())
}

/// Deserializes an instance of type `T` from a string of CTON text with
/// custom [`DecoderOptions`].
///
/// # Errors
///
/// Returns an error if the input is not valid CTON, or cannot be
/// deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<'a, T>(s: &'a str, options: DecoderOptions) -> Result<T>
where
    T: Deserialize<'a>,
{
    let value = de::decode(s, &options)?;
    T::deserialize(ValueDeserializer::new(value))
}

/// Deserializes an instance of type `T` from an I/O stream of CTON text.
///
/// # Errors
///
/// Returns an error if reading from `reader` fails, the input is not valid
/// CTON, or the data cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: for<'de> Deserialize<'de>,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(e.to_string()))?;
    from_str(&string)
}

/// Deserializes an instance of type `T` from bytes of CTON text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, the input is not
/// valid CTON, or cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<'a, T>(v: &'a [u8]) -> Result<T>
where
    T: Deserialize<'a>,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    #[test]
    fn serialize_deserialize_point() {
        let point = Point { x: 1, y: 2 };
        let cton = to_string(&point).unwrap();
        let point_back: Point = from_str(&cton).unwrap();
        assert_eq!(point, point_back);
    }

    #[test]
    fn serialize_deserialize_user() {
        let user = User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        };

        let cton = to_string(&user).unwrap();
        let user_back: User = from_str(&cton).unwrap();
        assert_eq!(user, user_back);
    }

    #[test]
    fn pretty_printing_round_trips() {
        let user = User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        };

        let cton = to_string_pretty(&user).unwrap();
        let user_back: User = from_str(&cton).unwrap();
        assert_eq!(user, user_back);
    }

    #[test]
    fn to_value_produces_expected_tree() {
        let point = Point { x: 1, y: 2 };
        let value = to_value(&point).unwrap();

        match value {
            CtonValue::Object(obj) => {
                assert_eq!(obj.get("x").and_then(CtonValue::as_i64), Some(1));
                assert_eq!(obj.get("y").and_then(CtonValue::as_i64), Some(2));
            }
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn arrays_round_trip() {
        let numbers = vec![1, 2, 3, 4, 5];
        let cton = to_string(&numbers).unwrap();
        let numbers_back: Vec<i32> = from_str(&cton).unwrap();
        assert_eq!(numbers, numbers_back);
    }

    #[test]
    fn custom_options_round_trip() {
        let user = User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        };

        let options = EncoderOptions::new().pretty().with_indent(4);
        let cton = to_string_with_options(&user, options).unwrap();
        let user_back: User = from_str(&cton).unwrap();
        assert_eq!(user, user_back);
    }

    #[test]
    fn validate_reports_no_errors_for_well_formed_input() {
        assert!(validate("a=1\nb=2").is_empty());
    }
}
