//! Dynamic value representation for CTON data.
//!
//! This module provides [`CtonValue`], the six-variant tagged tree every
//! encode/decode call operates on, plus [`ToCton`], the projection trait
//! that lets external code (e.g. a caller's own date/time type) turn itself
//! into one of the closed variants without this crate depending on that
//! caller's crate.
//!
//! ## Examples
//!
//! ```rust
//! use cton::{CtonValue, CtonMap};
//!
//! let mut obj = CtonMap::new();
//! obj.insert("name".to_string(), CtonValue::from("Alice"));
//! obj.insert("age".to_string(), CtonValue::from(30));
//!
//! let value = CtonValue::Object(obj);
//! assert!(value.is_object());
//! ```

use crate::CtonMap;
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed CTON value: the six variants named in the data model,
/// plus nothing else. There is no `Table` variant — "table form" is a
/// wire-level choice the encoder makes for a uniform `Array` of objects, not
/// a distinct value kind — and no `Date`/custom-type variant; those project
/// into these six through [`ToCton`] before the encoder ever sees them.
///
/// # Examples
///
/// ```rust
/// use cton::CtonValue;
///
/// let null = CtonValue::Null;
/// let text = CtonValue::from("hello");
///
/// assert!(null.is_null());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, Default)]
pub enum CtonValue {
    #[default]
    Null,
    Bool(bool),
    /// Signed, arbitrary-range integer. Canonical decimal form has no
    /// leading zero except a bare `0`, with an optional leading `-`.
    Integer(BigInt),
    /// Real number, canonicalized on encode per the two formatting modes in
    /// [`crate::options::DecimalMode`]. Non-finite values (NaN, ±Infinity)
    /// encode as `null` and never round-trip back as `Decimal`.
    Decimal(f64),
    String(String),
    Array(Vec<CtonValue>),
    Object(CtonMap),
}

impl PartialEq for CtonValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CtonValue::Null, CtonValue::Null) => true,
            (CtonValue::Bool(a), CtonValue::Bool(b)) => a == b,
            (CtonValue::Integer(a), CtonValue::Integer(b)) => a == b,
            (CtonValue::Decimal(a), CtonValue::Decimal(b)) => a == b,
            (CtonValue::String(a), CtonValue::String(b)) => a == b,
            (CtonValue::Array(a), CtonValue::Array(b)) => a == b,
            (CtonValue::Object(a), CtonValue::Object(b)) => a == b,
            _ => false,
        }
    }
}

/// Projects a foreign value into one of [`CtonValue`]'s closed variants.
///
/// This is the "encode-as" seam the design notes call for: the variant set
/// stays closed (no per-caller extension of the enum itself), but a
/// downstream crate can implement `ToCton` for its own types — a
/// `chrono::DateTime`, a domain newtype — and this crate never has to know
/// those types exist.
///
/// # Examples
///
/// ```rust
/// use cton::{CtonValue, ToCton};
///
/// struct Celsius(f64);
///
/// impl ToCton for Celsius {
///     fn to_cton(&self) -> CtonValue {
///         CtonValue::Decimal(self.0)
///     }
/// }
///
/// assert_eq!(Celsius(20.5).to_cton(), CtonValue::Decimal(20.5));
/// ```
pub trait ToCton {
    fn to_cton(&self) -> CtonValue;
}

impl ToCton for CtonValue {
    fn to_cton(&self) -> CtonValue {
        self.clone()
    }
}

impl ToCton for bool {
    fn to_cton(&self) -> CtonValue {
        CtonValue::Bool(*self)
    }
}

macro_rules! impl_to_cton_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl ToCton for $t {
                fn to_cton(&self) -> CtonValue {
                    CtonValue::Integer(BigInt::from(*self))
                }
            }
        )*
    };
}

impl_to_cton_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, isize, usize);

impl ToCton for f32 {
    fn to_cton(&self) -> CtonValue {
        CtonValue::Decimal(*self as f64)
    }
}

impl ToCton for f64 {
    fn to_cton(&self) -> CtonValue {
        CtonValue::Decimal(*self)
    }
}

impl ToCton for str {
    fn to_cton(&self) -> CtonValue {
        CtonValue::String(self.to_string())
    }
}

impl ToCton for String {
    fn to_cton(&self) -> CtonValue {
        CtonValue::String(self.clone())
    }
}

impl<T: ToCton> ToCton for Option<T> {
    fn to_cton(&self) -> CtonValue {
        match self {
            Some(v) => v.to_cton(),
            None => CtonValue::Null,
        }
    }
}

impl<T: ToCton> ToCton for Vec<T> {
    fn to_cton(&self) -> CtonValue {
        CtonValue::Array(self.iter().map(ToCton::to_cton).collect())
    }
}

impl<T: ToCton> ToCton for [T] {
    fn to_cton(&self) -> CtonValue {
        CtonValue::Array(self.iter().map(ToCton::to_cton).collect())
    }
}

impl CtonValue {
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, CtonValue::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, CtonValue::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, CtonValue::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_decimal(&self) -> bool {
        matches!(self, CtonValue::Decimal(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, CtonValue::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, CtonValue::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, CtonValue::Object(_))
    }

    /// A scalar is anything that can sit inside an array element/table row
    /// without further structure: everything except `Array`/`Object`.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, CtonValue::Array(_) | CtonValue::Object(_))
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CtonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CtonValue::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            CtonValue::Integer(i) => Some(i),
            _ => None,
        }
    }

    /// The integer value as an `i64`, if it's an `Integer` in range or a
    /// whole-number `Decimal`. Returns `None` for out-of-range integers so
    /// callers who need the full range should match on `Integer` directly.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CtonValue::Integer(i) => i.to_string().parse::<i64>().ok(),
            CtonValue::Decimal(f) if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 => {
                Some(*f as i64)
            }
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CtonValue::Decimal(f) => Some(*f),
            CtonValue::Integer(i) => i.to_string().parse::<f64>().ok(),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<CtonValue>> {
        match self {
            CtonValue::Array(a) => Some(a),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&CtonMap> {
        match self {
            CtonValue::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Whether a `String` value would be emitted quoted by the encoder.
    /// See [`crate::grammar::needs_quoting`] for the exact predicate.
    #[inline]
    #[must_use]
    pub fn needs_quotes(&self) -> bool {
        match self {
            CtonValue::String(s) => crate::grammar::needs_quoting(s),
            _ => false,
        }
    }
}

impl fmt::Display for CtonValue {
    /// Renders the canonical CTON encoding of this value in isolation
    /// (compact, `Fast` decimal mode), the way it would appear nested inside
    /// a larger document rather than as a top-level pair sequence.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match crate::ser::encode_value_standalone(self) {
            Ok(s) => write!(f, "{s}"),
            Err(_) => write!(f, "<invalid cton value>"),
        }
    }
}

impl Serialize for CtonValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            CtonValue::Null => serializer.serialize_unit(),
            CtonValue::Bool(b) => serializer.serialize_bool(*b),
            CtonValue::Integer(n) => {
                let s = n.to_string();
                if let Ok(i) = s.parse::<i64>() {
                    serializer.serialize_i64(i)
                } else {
                    serializer.serialize_str(&s)
                }
            }
            CtonValue::Decimal(f) => serializer.serialize_f64(*f),
            CtonValue::String(s) => serializer.serialize_str(s),
            CtonValue::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            CtonValue::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for CtonValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct CtonValueVisitor;

        impl<'de> Visitor<'de> for CtonValueVisitor {
            type Value = CtonValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid CTON value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(CtonValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(CtonValue::Integer(BigInt::from(value)))
            }

            fn visit_i128<E>(self, value: i128) -> Result<Self::Value, E> {
                Ok(CtonValue::Integer(BigInt::from(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(CtonValue::Integer(BigInt::from(value)))
            }

            fn visit_u128<E>(self, value: u128) -> Result<Self::Value, E> {
                Ok(CtonValue::Integer(BigInt::from(value)))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(CtonValue::Decimal(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(CtonValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(CtonValue::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(CtonValue::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(CtonValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(CtonValue::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = CtonMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(CtonValue::Object(values))
            }
        }

        deserializer.deserialize_any(CtonValueVisitor)
    }
}

impl TryFrom<CtonValue> for i64 {
    type Error = crate::Error;

    fn try_from(value: CtonValue) -> crate::Result<Self> {
        value
            .as_i64()
            .ok_or_else(|| crate::Error::custom(format!("expected integer, found {value:?}")))
    }
}

impl TryFrom<CtonValue> for f64 {
    type Error = crate::Error;

    fn try_from(value: CtonValue) -> crate::Result<Self> {
        value
            .as_f64()
            .ok_or_else(|| crate::Error::custom(format!("expected number, found {value:?}")))
    }
}

impl TryFrom<CtonValue> for bool {
    type Error = crate::Error;

    fn try_from(value: CtonValue) -> crate::Result<Self> {
        match value {
            CtonValue::Bool(b) => Ok(b),
            _ => Err(crate::Error::custom(format!("expected bool, found {value:?}"))),
        }
    }
}

impl TryFrom<CtonValue> for String {
    type Error = crate::Error;

    fn try_from(value: CtonValue) -> crate::Result<Self> {
        match value {
            CtonValue::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!("expected string, found {value:?}"))),
        }
    }
}

impl From<bool> for CtonValue {
    fn from(value: bool) -> Self {
        CtonValue::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for CtonValue {
                fn from(value: $t) -> Self {
                    CtonValue::Integer(BigInt::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, isize, usize);

impl From<f32> for CtonValue {
    fn from(value: f32) -> Self {
        CtonValue::Decimal(value as f64)
    }
}

impl From<f64> for CtonValue {
    fn from(value: f64) -> Self {
        CtonValue::Decimal(value)
    }
}

impl From<String> for CtonValue {
    fn from(value: String) -> Self {
        CtonValue::String(value)
    }
}

impl From<&str> for CtonValue {
    fn from(value: &str) -> Self {
        CtonValue::String(value.to_string())
    }
}

impl From<Vec<CtonValue>> for CtonValue {
    fn from(value: Vec<CtonValue>) -> Self {
        CtonValue::Array(value)
    }
}

impl From<CtonMap> for CtonValue {
    fn from(value: CtonMap) -> Self {
        CtonValue::Object(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tryfrom_i64() {
        let value = CtonValue::Integer(BigInt::from(42));
        let result: i64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 42);

        let value = CtonValue::String("test".to_string());
        assert!(i64::try_from(value).is_err());
    }

    #[test]
    fn test_tryfrom_f64() {
        let value = CtonValue::Decimal(3.5);
        let result: f64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 3.5);
    }

    #[test]
    fn test_tryfrom_bool() {
        let value = CtonValue::Bool(true);
        let result: bool = TryFrom::try_from(value).unwrap();
        assert!(result);

        let value = CtonValue::Integer(BigInt::from(1));
        assert!(bool::try_from(value).is_err());
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(CtonValue::from(true), CtonValue::Bool(true));
        assert_eq!(CtonValue::from(42i32), CtonValue::Integer(BigInt::from(42)));
        assert_eq!(CtonValue::from(3.5f64), CtonValue::Decimal(3.5));
        assert_eq!(CtonValue::from("test"), CtonValue::String("test".to_string()));
    }

    #[test]
    fn test_from_collections() {
        let vec = vec![CtonValue::from(1i32), CtonValue::from(2i32)];
        let value = CtonValue::from(vec.clone());
        assert_eq!(value, CtonValue::Array(vec));

        let mut map = CtonMap::new();
        map.insert("key".to_string(), CtonValue::from(42i32));
        let value = CtonValue::from(map.clone());
        assert_eq!(value, CtonValue::Object(map));
    }

    #[test]
    fn test_to_cton_projection() {
        assert_eq!(42i32.to_cton(), CtonValue::Integer(BigInt::from(42)));
        assert_eq!(Some(3.0f64).to_cton(), CtonValue::Decimal(3.0));
        assert_eq!(None::<i32>.to_cton(), CtonValue::Null);
    }

    #[test]
    fn test_is_scalar() {
        assert!(CtonValue::Null.is_scalar());
        assert!(CtonValue::from(1i32).is_scalar());
        assert!(!CtonValue::Array(vec![]).is_scalar());
        assert!(!CtonValue::Object(CtonMap::new()).is_scalar());
    }

    #[test]
    fn test_bigint_beyond_i64_survives_as_integer() {
        let huge = BigInt::parse_bytes(b"123456789012345678901234567890", 10).unwrap();
        let value = CtonValue::Integer(huge.clone());
        assert_eq!(value.as_bigint(), Some(&huge));
        assert_eq!(value.as_i64(), None);
    }
}
