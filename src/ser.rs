//! The CTON encoder (§4.2).
//!
//! [`Encoder`] walks a [`CtonValue`] tree and writes the canonical wire
//! grammar: `()` objects, `[N]=`/`[N]{h1,...}=` arrays and tables, `=`-joined
//! top-level pairs. [`CtonValueSerializer`] is the other half of the
//! generic convenience layer — it turns an arbitrary `Serialize` type into a
//! `CtonValue` tree, which then goes through the exact same `Encoder` any
//! hand-built tree would. There is no separate text-writing path for the
//! serde sugar; both surfaces share one grammar implementation.

use crate::grammar::{canonical_decimal, canonical_integer, is_safe_key, needs_quoting};
use crate::options::EncoderOptions;
use crate::{CtonMap, CtonValue, EncodeError};
use std::collections::HashMap;
use std::io;

/// Serializes `value` as a full document: top-level pairs if `value` is an
/// `Object`, or a single standalone value otherwise (§4.2's dispatch rule).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode(value: &CtonValue, options: &EncoderOptions) -> Result<String, EncodeError> {
    let mut out = String::new();
    let mut enc = Encoder::new(options);
    enc.encode_document(value, &mut out)?;
    Ok(out)
}

/// Like [`encode`], but writes to a caller-supplied sink instead of
/// returning an owned `String`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_to<W: io::Write>(
    value: &CtonValue,
    writer: &mut W,
    options: &EncoderOptions,
) -> Result<(), EncodeError> {
    let text = encode(value, options)?;
    writer.write_all(text.as_bytes()).map_err(EncodeError::io)
}

/// Encodes a single value outside of document/pair context — used by
/// [`CtonValue`]'s `Display` impl so a value nested inside an error message
/// or a `{}` format shows its canonical inline form.
pub(crate) fn encode_value_standalone(value: &CtonValue) -> Result<String, EncodeError> {
    let options = EncoderOptions::default();
    let mut enc = Encoder::new(&options);
    let mut out = String::new();
    enc.encode_value(value, &mut out)?;
    Ok(out)
}

/// Walks a value tree once, writing CTON text.
///
/// `table_memo` caches the table-vs-list decision for an array by the
/// pointer identity of its `CtonValue::Array` node (§4.2, §9): scoped to
/// this `Encoder` and dropped with it, so it never escapes a single encode
/// call per §5's resource model.
struct Encoder<'a> {
    options: &'a EncoderOptions,
    indent_level: usize,
    table_memo: HashMap<*const CtonValue, bool>,
}

impl<'a> Encoder<'a> {
    fn new(options: &'a EncoderOptions) -> Self {
        Encoder {
            options,
            indent_level: 0,
            table_memo: HashMap::new(),
        }
    }

    fn indent(&self) -> String {
        " ".repeat(self.indent_level * self.options.indent)
    }

    fn encode_document(&mut self, value: &CtonValue, out: &mut String) -> Result<(), EncodeError> {
        match value {
            CtonValue::Object(map) => {
                let mut first = true;
                for (key, val) in map.iter() {
                    if !first {
                        out.push_str(&self.options.separator);
                    }
                    first = false;
                    if let Some(comment) = self.options.comments.get(key) {
                        for line in comment.split('\n') {
                            out.push_str("# ");
                            out.push_str(line);
                            out.push('\n');
                        }
                    }
                    self.encode_pair(key, val, out)?;
                }
                Ok(())
            }
            other => self.encode_value(other, out),
        }
    }

    /// A `KEY (obj | array-body | "=" scalar)` pair, used at the document
    /// top level and for object members.
    fn encode_pair(&mut self, key: &str, value: &CtonValue, out: &mut String) -> Result<(), EncodeError> {
        if !is_safe_key(key) {
            return Err(EncodeError::invalid_key(key));
        }
        out.push_str(key);
        match value {
            CtonValue::Object(map) => self.encode_object(map, out),
            CtonValue::Array(arr) => self.encode_array(arr, value as *const CtonValue, out),
            scalar => {
                out.push('=');
                self.encode_scalar(scalar, out)
            }
        }
    }

    /// Any value in a context with no surrounding key (array elements, or
    /// [`encode_value_standalone`]).
    fn encode_value(&mut self, value: &CtonValue, out: &mut String) -> Result<(), EncodeError> {
        match value {
            CtonValue::Object(map) => self.encode_object(map, out),
            CtonValue::Array(arr) => self.encode_array(arr, value as *const CtonValue, out),
            scalar => self.encode_scalar(scalar, out),
        }
    }

    fn encode_object(&mut self, map: &CtonMap, out: &mut String) -> Result<(), EncodeError> {
        if map.is_empty() {
            out.push_str("()");
            return Ok(());
        }
        out.push('(');
        self.indent_level += 1;
        if self.options.pretty {
            out.push('\n');
        }
        let mut first = true;
        for (key, val) in map.iter() {
            if !first {
                out.push(',');
                if self.options.pretty {
                    out.push('\n');
                }
            }
            first = false;
            if self.options.pretty {
                out.push_str(&self.indent());
            }
            self.encode_pair(key, val, out)?;
        }
        self.indent_level -= 1;
        if self.options.pretty {
            out.push('\n');
            out.push_str(&self.indent());
        }
        out.push(')');
        Ok(())
    }

    fn encode_array(
        &mut self,
        arr: &[CtonValue],
        ptr: *const CtonValue,
        out: &mut String,
    ) -> Result<(), EncodeError> {
        out.push('[');
        out.push_str(&arr.len().to_string());
        out.push(']');

        if arr.is_empty() {
            out.push('=');
            return Ok(());
        }

        if let Some(header) = self.detect_table(arr, ptr) {
            out.push('{');
            out.push_str(&header.join(","));
            out.push_str("}=");
            let mut first_row = true;
            for element in arr {
                if !first_row {
                    out.push(';');
                }
                first_row = false;
                let CtonValue::Object(map) = element else {
                    unreachable!("table detection guarantees every element is an Object");
                };
                let mut first_col = true;
                for key in &header {
                    if !first_col {
                        out.push(',');
                    }
                    first_col = false;
                    let value = map
                        .get(key)
                        .expect("table detection guarantees every header key is present");
                    self.encode_scalar(value, out)?;
                }
            }
            Ok(())
        } else {
            out.push('=');
            let mut first = true;
            for element in arr {
                if !first {
                    out.push(',');
                }
                first = false;
                self.encode_value(element, out)?;
            }
            Ok(())
        }
    }

    fn detect_table(&mut self, arr: &[CtonValue], ptr: *const CtonValue) -> Option<Vec<String>> {
        if let Some(&is_table) = self.table_memo.get(&ptr) {
            if !is_table {
                return None;
            }
        }
        let header = compute_table_header(arr);
        self.table_memo.insert(ptr, header.is_some());
        header
    }

    fn encode_scalar(&mut self, value: &CtonValue, out: &mut String) -> Result<(), EncodeError> {
        match value {
            CtonValue::Null => out.push_str("null"),
            CtonValue::Bool(true) => out.push_str("true"),
            CtonValue::Bool(false) => out.push_str("false"),
            CtonValue::Integer(n) => out.push_str(&canonical_integer(n)),
            CtonValue::Decimal(f) => match canonical_decimal(*f, self.options.decimal_mode) {
                Some(s) => out.push_str(&s),
                None => out.push_str("null"),
            },
            CtonValue::String(s) => encode_string(s, out),
            CtonValue::Object(_) | CtonValue::Array(_) => {
                return Err(EncodeError::unsupported(
                    "expected a scalar value in this position",
                ));
            }
        }
        Ok(())
    }
}

fn encode_string(s: &str, out: &mut String) {
    if !needs_quoting(s) {
        out.push_str(s);
        return;
    }
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
}

/// Single-pass table detection over one array (§4.2). The first element
/// must be a non-empty object; every subsequent element must be an object
/// with the identical key sequence and every value a scalar.
fn compute_table_header(arr: &[CtonValue]) -> Option<Vec<String>> {
    let first_map = match arr.first()? {
        CtonValue::Object(map) if !map.is_empty() => map,
        _ => return None,
    };
    if !first_map.values().all(CtonValue::is_scalar) {
        return None;
    }
    let header: Vec<String> = first_map.keys().cloned().collect();

    for element in &arr[1..] {
        let map = match element {
            CtonValue::Object(map) => map,
            _ => return None,
        };
        if map.len() != header.len() {
            return None;
        }
        if !map.keys().zip(header.iter()).all(|(a, b)| a == b) {
            return None;
        }
        if !map.values().all(CtonValue::is_scalar) {
            return None;
        }
    }
    Some(header)
}

// ---------------------------------------------------------------------
// CtonValueSerializer: turns an arbitrary `Serialize` into a `CtonValue`.
// ---------------------------------------------------------------------

/// A `serde::Serializer` whose output is a [`CtonValue`] tree rather than
/// text. [`crate::to_value`] uses this directly; [`crate::to_string`] and
/// friends compose it with [`encode`].
pub struct CtonValueSerializer;

impl serde::Serializer for CtonValueSerializer {
    type Ok = CtonValue;
    type Error = EncodeError;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeCtonMap;
    type SerializeStruct = SerializeCtonMap;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok, Self::Error> {
        Ok(CtonValue::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok, Self::Error> {
        self.serialize_i64(v as i64)
    }
    fn serialize_i16(self, v: i16) -> Result<Self::Ok, Self::Error> {
        self.serialize_i64(v as i64)
    }
    fn serialize_i32(self, v: i32) -> Result<Self::Ok, Self::Error> {
        self.serialize_i64(v as i64)
    }
    fn serialize_i64(self, v: i64) -> Result<Self::Ok, Self::Error> {
        Ok(CtonValue::Integer(num_bigint::BigInt::from(v)))
    }
    fn serialize_i128(self, v: i128) -> Result<Self::Ok, Self::Error> {
        Ok(CtonValue::Integer(num_bigint::BigInt::from(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok, Self::Error> {
        self.serialize_u64(v as u64)
    }
    fn serialize_u16(self, v: u16) -> Result<Self::Ok, Self::Error> {
        self.serialize_u64(v as u64)
    }
    fn serialize_u32(self, v: u32) -> Result<Self::Ok, Self::Error> {
        self.serialize_u64(v as u64)
    }
    fn serialize_u64(self, v: u64) -> Result<Self::Ok, Self::Error> {
        Ok(CtonValue::Integer(num_bigint::BigInt::from(v)))
    }
    fn serialize_u128(self, v: u128) -> Result<Self::Ok, Self::Error> {
        Ok(CtonValue::Integer(num_bigint::BigInt::from(v)))
    }

    fn serialize_f32(self, v: f32) -> Result<Self::Ok, Self::Error> {
        Ok(CtonValue::Decimal(v as f64))
    }
    fn serialize_f64(self, v: f64) -> Result<Self::Ok, Self::Error> {
        Ok(CtonValue::Decimal(v))
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok, Self::Error> {
        Ok(CtonValue::String(v.to_string()))
    }
    fn serialize_str(self, v: &str) -> Result<Self::Ok, Self::Error> {
        Ok(CtonValue::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Self::Ok, Self::Error> {
        Ok(CtonValue::Array(
            v.iter()
                .map(|b| CtonValue::Integer(num_bigint::BigInt::from(*b)))
                .collect(),
        ))
    }

    fn serialize_none(self) -> Result<Self::Ok, Self::Error> {
        Ok(CtonValue::Null)
    }
    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok, Self::Error>
    where
        T: ?Sized + serde::Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok, Self::Error> {
        Ok(CtonValue::Null)
    }
    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok, Self::Error> {
        Ok(CtonValue::Null)
    }
    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok, Self::Error> {
        Ok(CtonValue::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Self::Ok, Self::Error>
    where
        T: ?Sized + serde::Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Self::Ok, Self::Error>
    where
        T: ?Sized + serde::Serialize,
    {
        let mut map = CtonMap::new();
        map.insert(variant.to_string(), value.serialize(CtonValueSerializer)?);
        Ok(CtonValue::Object(map))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq, Self::Error> {
        Ok(SerializeVec {
            vec: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple, Self::Error> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct, Self::Error> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleVariant, Self::Error> {
        Ok(SerializeTupleVariant {
            variant,
            vec: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, Self::Error> {
        Ok(SerializeCtonMap {
            map: CtonMap::new(),
            next_key: None,
        })
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, Self::Error> {
        Ok(SerializeCtonMap {
            map: CtonMap::new(),
            next_key: None,
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, Self::Error> {
        Ok(SerializeStructVariant {
            variant,
            map: CtonMap::new(),
        })
    }
}

pub struct SerializeVec {
    vec: Vec<CtonValue>,
}

impl serde::ser::SerializeSeq for SerializeVec {
    type Ok = CtonValue;
    type Error = EncodeError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), Self::Error>
    where
        T: ?Sized + serde::Serialize,
    {
        self.vec.push(value.serialize(CtonValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(CtonValue::Array(self.vec))
    }
}

impl serde::ser::SerializeTuple for SerializeVec {
    type Ok = CtonValue;
    type Error = EncodeError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), Self::Error>
    where
        T: ?Sized + serde::Serialize,
    {
        serde::ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        serde::ser::SerializeSeq::end(self)
    }
}

impl serde::ser::SerializeTupleStruct for SerializeVec {
    type Ok = CtonValue;
    type Error = EncodeError;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), Self::Error>
    where
        T: ?Sized + serde::Serialize,
    {
        serde::ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        serde::ser::SerializeSeq::end(self)
    }
}

pub struct SerializeTupleVariant {
    variant: &'static str,
    vec: Vec<CtonValue>,
}

impl serde::ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = CtonValue;
    type Error = EncodeError;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), Self::Error>
    where
        T: ?Sized + serde::Serialize,
    {
        self.vec.push(value.serialize(CtonValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        let mut map = CtonMap::new();
        map.insert(self.variant.to_string(), CtonValue::Array(self.vec));
        Ok(CtonValue::Object(map))
    }
}

pub struct SerializeCtonMap {
    map: CtonMap,
    next_key: Option<String>,
}

impl serde::ser::SerializeMap for SerializeCtonMap {
    type Ok = CtonValue;
    type Error = EncodeError;

    fn serialize_key<T>(&mut self, key: &T) -> Result<(), Self::Error>
    where
        T: ?Sized + serde::Serialize,
    {
        let key_value = key.serialize(CtonValueSerializer)?;
        self.next_key = Some(cton_value_to_key(&key_value)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<(), Self::Error>
    where
        T: ?Sized + serde::Serialize,
    {
        let key = self
            .next_key
            .take()
            .ok_or_else(|| EncodeError::unsupported("serialize_value called before serialize_key"))?;
        self.map.insert(key, value.serialize(CtonValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(CtonValue::Object(self.map))
    }
}

impl serde::ser::SerializeStruct for SerializeCtonMap {
    type Ok = CtonValue;
    type Error = EncodeError;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), Self::Error>
    where
        T: ?Sized + serde::Serialize,
    {
        self.map
            .insert(key.to_string(), value.serialize(CtonValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(CtonValue::Object(self.map))
    }
}

pub struct SerializeStructVariant {
    variant: &'static str,
    map: CtonMap,
}

impl serde::ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = CtonValue;
    type Error = EncodeError;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), Self::Error>
    where
        T: ?Sized + serde::Serialize,
    {
        self.map
            .insert(key.to_string(), value.serialize(CtonValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        let mut outer = CtonMap::new();
        outer.insert(self.variant.to_string(), CtonValue::Object(self.map));
        Ok(CtonValue::Object(outer))
    }
}

/// Reduces a serialized map key to the `String` a `CtonMap` needs. Only
/// scalar key kinds are supported, matching what every safe CTON key can be.
fn cton_value_to_key(value: &CtonValue) -> Result<String, EncodeError> {
    match value {
        CtonValue::String(s) => Ok(s.clone()),
        CtonValue::Integer(n) => Ok(canonical_integer(n)),
        CtonValue::Bool(b) => Ok(b.to_string()),
        other => Err(EncodeError::unsupported(format!(
            "map keys must be strings, integers, or bools; found {other:?}"
        ))),
    }
}
