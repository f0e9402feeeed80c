//! The CTON decoder (§4.3).
//!
//! [`decode`] turns wire text into a [`CtonValue`] tree in a single
//! left-to-right pass, with no backtracking: every structural decision
//! (object vs. array vs. scalar, table vs. plain list) is made by looking at
//! the very next character. [`validate`] reuses the same grammar but
//! recovers at structural boundaries instead of stopping at the first
//! defect, so a caller can see every problem in one pass. The serde
//! convenience layer ([`crate::from_str`] and friends) is not a second
//! parser: it calls [`decode`] and then walks the resulting tree through
//! [`ValueDeserializer`], mirroring how [`crate::ser::CtonValueSerializer`]
//! is the sole route into text on the encode side.

use crate::error::{ParseError, ValidationError};
use crate::grammar::{is_numeric_like, is_safe_key_char, is_safe_key_start, is_whitespace};
use crate::options::DecoderOptions;
use crate::{CtonMap, CtonValue};
use num_bigint::BigInt;
use serde::de::{self, IntoDeserializer};
use serde::forward_to_deserialize_any;

/// Parses `input` as a full CTON document: a sequence of top-level pairs if
/// the input opens with `KEY (` / `KEY [` / `KEY =`, or a single standalone
/// value otherwise (§4.3's dispatch rule). `options` is accepted for
/// symmetry with [`crate::ser::encode`]; `symbolize_keys` is a documented
/// no-op on the tree itself (see [`DecoderOptions`]).
pub fn decode(input: &str, _options: &DecoderOptions) -> Result<CtonValue, ParseError> {
    let mut parser = Parser::new(input);
    parser.skip_ws();
    if parser.at_end() {
        return Ok(CtonValue::Object(CtonMap::new()));
    }

    let value = if parser.looks_like_pair_start() {
        parser.parse_document()?
    } else {
        // A lone standalone value has no sibling pair to bound against.
        parser.parse_value(false)?
    };

    parser.skip_ws();
    if !parser.at_end() {
        return Err(parser.error("unexpected trailing input after document"));
    }
    Ok(value)
}

/// Structural check over `input`, collecting every defect found instead of
/// stopping at the first one. Recovers at the next structural boundary
/// (`\n`, `,`, `;`, `)`, `]`, or `}`) after an error, per §7, so scanning can
/// resume and find further defects regardless of which of those characters
/// actually separates the surrounding pairs.
#[must_use]
pub fn validate(input: &str) -> Vec<ValidationError> {
    let mut parser = Parser::new(input);
    let mut errors = Vec::new();

    parser.skip_ws();
    if parser.at_end() {
        return errors;
    }

    if parser.looks_like_pair_start() {
        loop {
            parser.skip_ws();
            if parser.at_end() {
                break;
            }
            let before = parser.pos;
            let result: Result<(), ParseError> = (|| {
                let key = parser.parse_key()?;
                parser.parse_pair_value(&key, true)?;
                Ok(())
            })();
            if let Err(e) = result {
                errors.push(ValidationError::from(e));
                if parser.pos == before {
                    parser.bump();
                }
                parser.recover_to_boundary();
            }
        }
    } else if let Err(e) = parser.parse_value(false) {
        errors.push(ValidationError::from(e));
    }

    errors
}

struct Parser<'de> {
    input: &'de str,
    pos: usize,
    line: usize,
    column: usize,
}

#[derive(Clone, Copy)]
struct Mark {
    pos: usize,
    line: usize,
    column: usize,
}

impl<'de> Parser<'de> {
    fn new(input: &'de str) -> Self {
        Parser {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn mark(&self) -> Mark {
        Mark {
            pos: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    fn restore(&mut self, mark: Mark) {
        self.pos = mark.pos;
        self.line = mark.line;
        self.column = mark.column;
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        if self.peek() == Some(expected) {
            self.bump();
            Ok(())
        } else {
            Err(self.error(format!("expected {expected:?}")))
        }
    }

    fn skip_ws(&mut self) {
        loop {
            while matches!(self.peek(), Some(c) if is_whitespace(c)) {
                self.bump();
            }
            if self.peek() == Some('#') {
                while !matches!(self.peek(), None | Some('\n')) {
                    self.bump();
                }
                continue;
            }
            break;
        }
    }

    fn recover_to_boundary(&mut self) {
        while let Some(c) = self.peek() {
            self.bump();
            if matches!(c, '\n' | ',' | ';' | ')' | ']' | '}') {
                break;
            }
        }
    }

    fn excerpt_at(&self, pos: usize) -> String {
        let bytes = self.input.as_bytes();
        let mut start = pos.min(bytes.len());
        while start > 0 && bytes[start - 1] != b'\n' {
            start -= 1;
        }
        let mut end = pos.min(bytes.len());
        while end < bytes.len() && bytes[end] != b'\n' {
            end += 1;
        }
        self.input[start..end].to_string()
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(self.line, self.column, message.into(), self.excerpt_at(self.pos))
    }

    /// A non-empty run of `SAFE_KEY_CHAR` whose first character satisfies
    /// `SAFE_KEY_START` (§4.1/§4.3).
    fn parse_key(&mut self) -> Result<String, ParseError> {
        self.skip_ws();
        let start_mark = self.mark();
        let start = self.pos;
        while matches!(self.peek(), Some(c) if is_safe_key_char(c)) {
            self.bump();
        }
        let key = &self.input[start..self.pos];
        let first = key.chars().next();
        if key.is_empty() || !first.is_some_and(is_safe_key_start) {
            self.restore(start_mark);
            return Err(self.error(format!("invalid key {key:?}")));
        }
        Ok(key.to_string())
    }

    /// Look ahead for `KEY (` / `KEY [` / `KEY =` without consuming input.
    fn looks_like_pair_start(&mut self) -> bool {
        let saved = self.mark();
        let looks_like = self.parse_key().is_ok()
            && matches!(self.peek(), Some('(') | Some('[') | Some('='));
        self.restore(saved);
        looks_like
    }

    fn parse_document(&mut self) -> Result<CtonValue, ParseError> {
        let mut map = CtonMap::new();
        loop {
            self.skip_ws();
            if self.at_end() {
                break;
            }
            let key = self.parse_key()?;
            // Top-level pair values permit the key-boundary heuristic
            // (§4.3's "Document" bullet) — a separator-less stream like
            // `a=1b=2` relies on it to find where `a`'s value ends.
            let value = self.parse_pair_value(&key, true)?;
            map.insert(key, value);
            self.skip_ws();
            if self.at_end() {
                break;
            }
        }
        Ok(CtonValue::Object(map))
    }

    /// The part of a pair grammar after the key: `(` object, `[` array, or
    /// `=` scalar. `boundary_allowed` controls whether a bare scalar may be
    /// truncated by the key-boundary heuristic — enabled for top-level
    /// pairs, disabled for object fields (§4.3: "objects always close with
    /// `)`", no key-boundary permission).
    fn parse_pair_value(&mut self, key: &str, boundary_allowed: bool) -> Result<CtonValue, ParseError> {
        match self.peek() {
            Some('(') => self.parse_object(),
            Some('[') => self.parse_array(),
            Some('=') => {
                self.bump();
                self.parse_scalar(boundary_allowed)
            }
            _ => Err(self.error(format!("expected '(', '[', or '=' after key {key:?}"))),
        }
    }

    /// Any value with no key in front of it: array elements and the
    /// standalone top-level form. `boundary_allowed` is threaded through to
    /// a nested scalar the same way `parse_pair_value` does.
    fn parse_value(&mut self, boundary_allowed: bool) -> Result<CtonValue, ParseError> {
        self.skip_ws();
        match self.peek() {
            Some('(') => self.parse_object(),
            Some('[') => self.parse_array(),
            _ => self.parse_scalar(boundary_allowed),
        }
    }

    fn parse_object(&mut self) -> Result<CtonValue, ParseError> {
        self.expect('(')?;
        let mut map = CtonMap::new();
        self.skip_ws();
        if self.peek() == Some(')') {
            self.bump();
            return Ok(CtonValue::Object(map));
        }
        loop {
            self.skip_ws();
            let key = self.parse_key()?;
            let value = self.parse_pair_value(&key, false)?;
            map.insert(key, value);
            self.skip_ws();
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some(')') => {
                    self.bump();
                    break;
                }
                _ => return Err(self.error("expected ',' or ')' in object")),
            }
        }
        Ok(CtonValue::Object(map))
    }

    fn parse_array(&mut self) -> Result<CtonValue, ParseError> {
        self.expect('[')?;
        self.skip_ws();
        let len_start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.bump();
        }
        let len_str = &self.input[len_start..self.pos];
        if len_str.is_empty() {
            return Err(self.error("expected array length"));
        }
        let count: usize = len_str
            .parse()
            .map_err(|_| self.error(format!("array length {len_str:?} out of range")))?;
        self.skip_ws();
        self.expect(']')?;

        let header = if self.peek() == Some('{') {
            self.bump();
            let mut cols = Vec::new();
            loop {
                self.skip_ws();
                cols.push(self.parse_key()?);
                self.skip_ws();
                match self.peek() {
                    Some(',') => {
                        self.bump();
                    }
                    Some('}') => {
                        self.bump();
                        break;
                    }
                    _ => return Err(self.error("expected ',' or '}' in table header")),
                }
            }
            Some(cols)
        } else {
            None
        };

        self.skip_ws();
        self.expect('=')?;

        if count == 0 {
            return Ok(CtonValue::Array(Vec::new()));
        }

        match header {
            Some(cols) => {
                let mut rows = Vec::with_capacity(count);
                for row_idx in 0..count {
                    if row_idx > 0 {
                        self.skip_ws();
                        self.expect(';')?;
                    }
                    let mut row = CtonMap::new();
                    let last_col = cols.len().saturating_sub(1);
                    for (col_idx, col) in cols.iter().enumerate() {
                        if col_idx > 0 {
                            self.skip_ws();
                            self.expect(',')?;
                        }
                        self.skip_ws();
                        // Only the final scalar of the final row permits
                        // the key-boundary heuristic (§4.3); every other
                        // cell is already bounded by an explicit `,`/`;`.
                        let boundary_allowed = row_idx == count - 1 && col_idx == last_col;
                        let value = self.parse_scalar(boundary_allowed)?;
                        row.insert(col.clone(), value);
                    }
                    rows.push(CtonValue::Object(row));
                }
                Ok(CtonValue::Array(rows))
            }
            None => {
                let mut items = Vec::with_capacity(count);
                for idx in 0..count {
                    if idx > 0 {
                        self.skip_ws();
                        self.expect(',')?;
                    }
                    // Only the final element permits the key-boundary
                    // heuristic; earlier elements are bounded by `,`.
                    items.push(self.parse_value(idx == count - 1)?);
                }
                Ok(CtonValue::Array(items))
            }
        }
    }

    fn parse_scalar(&mut self, boundary_allowed: bool) -> Result<CtonValue, ParseError> {
        self.skip_ws();
        if self.peek() == Some('"') {
            return Ok(CtonValue::String(self.parse_quoted_string()?));
        }
        let token = self.read_bare_token(boundary_allowed);
        if token.is_empty() {
            return Err(self.error("expected a value"));
        }
        Ok(interpret_scalar(&token))
    }

    fn parse_quoted_string(&mut self) -> Result<String, ParseError> {
        self.expect('"')?;
        let mut s = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error("unterminated quoted string")),
                Some('"') => break,
                Some('\\') => match self.bump() {
                    Some('"') => s.push('"'),
                    Some('\\') => s.push('\\'),
                    Some('n') => s.push('\n'),
                    Some('r') => s.push('\r'),
                    Some('t') => s.push('\t'),
                    Some(other) => s.push(other),
                    None => return Err(self.error("unterminated escape sequence")),
                },
                Some(c) => s.push(c),
            }
        }
        Ok(s)
    }

    /// Reads an unquoted scalar token: the maximal run of non-terminator
    /// characters, additionally stopping at the first position `i > start`
    /// where a "new top-level key" begins — a maximal `SAFE_KEY_CHAR+` run
    /// starting at `i` with a `SAFE_KEY_START` first character, immediately
    /// followed by `(`, `[`, or `=` (§4.3's key-boundary heuristic). This
    /// requires scanning past the *entire* candidate key at `i`, not just
    /// checking that `i` itself could start one — `.` and `e`/`E` both
    /// satisfy `SAFE_KEY_START`, so a single-character lookahead would
    /// wrongly truncate every fractional/scientific-notation scalar (e.g.
    /// `0.5`) the moment it reached the `.`.
    ///
    /// Only used when `boundary_allowed` is set; with it unset, this reads
    /// the maximal terminator-bounded prefix, matching object field values
    /// and every non-final array/table element (§4.3: those are already
    /// bounded by an explicit `,`/`;`/`)`).
    fn read_bare_token(&mut self, boundary_allowed: bool) -> String {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if crate::grammar::is_terminator(c) {
                break;
            }
            if boundary_allowed
                && self.pos > start
                && is_safe_key_start(c)
                && self.peeks_like_new_key()
            {
                break;
            }
            self.bump();
        }
        self.input[start..self.pos].to_string()
    }

    /// From the current position (already known to start with a
    /// `SAFE_KEY_START` character), checks whether the maximal
    /// `SAFE_KEY_CHAR+` run here is immediately followed by `(`, `[`, or
    /// `=` — the "new top-level key" test the boundary heuristic truncates
    /// on. Pure lookahead; consumes nothing.
    fn peeks_like_new_key(&self) -> bool {
        let rest = &self.input[self.pos..];
        let mut end = 0;
        for c in rest.chars() {
            if is_safe_key_char(c) {
                end += c.len_utf8();
            } else {
                break;
            }
        }
        matches!(rest[end..].chars().next(), Some('(') | Some('[') | Some('='))
    }
}

/// Classifies an unquoted token per §4.3: `null`/`true`/`false` literals,
/// then numeric-like tokens (with the leading-zero exception below), then
/// everything else as a plain string.
///
/// A numeric-like token whose integer part has a redundant leading zero
/// (`"007"`) is **not** canonical integer form, so it decodes as a string
/// rather than the integer `7` — the encoder would never have produced it,
/// and silently dropping the zeros would lose information a round-trip must
/// preserve.
fn interpret_scalar(token: &str) -> CtonValue {
    match token {
        "null" => return CtonValue::Null,
        "true" => return CtonValue::Bool(true),
        "false" => return CtonValue::Bool(false),
        _ => {}
    }
    if !is_numeric_like(token) {
        return CtonValue::String(token.to_string());
    }

    let unsigned = token.strip_prefix('-').unwrap_or(token);
    let int_part = unsigned
        .split(['.', 'e', 'E'])
        .next()
        .unwrap_or(unsigned);
    if int_part.len() > 1 && int_part.starts_with('0') {
        return CtonValue::String(token.to_string());
    }

    if unsigned.contains('.') || unsigned.contains('e') || unsigned.contains('E') {
        match token.parse::<f64>() {
            Ok(f) => CtonValue::Decimal(f),
            Err(_) => CtonValue::String(token.to_string()),
        }
    } else {
        match BigInt::parse_bytes(token.as_bytes(), 10) {
            Some(n) => CtonValue::Integer(n),
            None => CtonValue::String(token.to_string()),
        }
    }
}

// ---------------------------------------------------------------------
// ValueDeserializer: drives an arbitrary `Deserialize` from an
// already-parsed `CtonValue`, the same way `CtonValueSerializer` drives an
// arbitrary `Serialize` into one.
// ---------------------------------------------------------------------

/// A `serde::Deserializer` over a [`CtonValue`] already produced by
/// [`decode`]. [`crate::from_str`] and friends compose `decode` with this
/// rather than parsing text directly against a `Visitor`.
pub struct ValueDeserializer {
    value: CtonValue,
}

impl ValueDeserializer {
    #[must_use]
    pub fn new(value: CtonValue) -> Self {
        ValueDeserializer { value }
    }
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = crate::Error;

    fn deserialize_any<V>(self, visitor: V) -> crate::Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            CtonValue::Null => visitor.visit_unit(),
            CtonValue::Bool(b) => visitor.visit_bool(b),
            CtonValue::Integer(n) => {
                let s = n.to_string();
                match s.parse::<i64>() {
                    Ok(i) => visitor.visit_i64(i),
                    Err(_) => visitor.visit_string(s),
                }
            }
            CtonValue::Decimal(f) => visitor.visit_f64(f),
            CtonValue::String(s) => visitor.visit_string(s),
            CtonValue::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            CtonValue::Object(obj) => visitor.visit_map(MapDeserializer::new(obj)),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> crate::Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            CtonValue::Null => visitor.visit_none(),
            other => visitor.visit_some(ValueDeserializer::new(other)),
        }
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> crate::Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            CtonValue::String(s) => visitor.visit_enum(s.into_deserializer()),
            CtonValue::Object(obj) if obj.len() == 1 => {
                let (variant, value) = obj.into_iter().next().expect("len checked above");
                visitor.visit_enum(EnumDeserializer::new(variant, value))
            }
            other => Err(crate::Error::custom(format!(
                "expected an enum variant, found {other:?}"
            ))),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct newtype_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<CtonValue>,
}

impl SeqDeserializer {
    fn new(vec: Vec<CtonValue>) -> Self {
        SeqDeserializer { iter: vec.into_iter() }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = crate::Error;

    fn next_element_seed<T>(&mut self, seed: T) -> crate::Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct MapDeserializer {
    iter: indexmap::map::IntoIter<String, CtonValue>,
    value: Option<CtonValue>,
}

impl MapDeserializer {
    fn new(map: CtonMap) -> Self {
        MapDeserializer {
            iter: map.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = crate::Error;

    fn next_key_seed<K>(&mut self, seed: K) -> crate::Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(ValueDeserializer::new(CtonValue::String(key))).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> crate::Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(crate::Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct EnumDeserializer {
    variant: String,
    value: CtonValue,
}

impl EnumDeserializer {
    fn new(variant: String, value: CtonValue) -> Self {
        EnumDeserializer { variant, value }
    }
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = crate::Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> crate::Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(ValueDeserializer::new(CtonValue::String(self.variant)))?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: CtonValue,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = crate::Error;

    fn unit_variant(self) -> crate::Result<()> {
        match self.value {
            CtonValue::Null => Ok(()),
            other => Err(crate::Error::custom(format!("expected a unit variant, found {other:?}"))),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> crate::Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(ValueDeserializer::new(self.value))
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> crate::Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            CtonValue::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            other => Err(crate::Error::custom(format!("expected a tuple variant, found {other:?}"))),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> crate::Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            CtonValue::Object(obj) => visitor.visit_map(MapDeserializer::new(obj)),
            other => Err(crate::Error::custom(format!("expected a struct variant, found {other:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(input: &str) -> CtonValue {
        decode(input, &DecoderOptions::default()).unwrap()
    }

    #[test]
    fn empty_input_is_empty_object() {
        assert_eq!(d(""), CtonValue::Object(CtonMap::new()));
    }

    #[test]
    fn top_level_pairs() {
        let value = d("a=1\nb=2");
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("a").unwrap().as_i64(), Some(1));
        assert_eq!(obj.get("b").unwrap().as_i64(), Some(2));
    }

    #[test]
    fn nested_object() {
        let value = d("user(name=Alice,age=30)");
        let user = value.as_object().unwrap().get("user").unwrap().as_object().unwrap();
        assert_eq!(user.get("name").unwrap().as_str(), Some("Alice"));
        assert_eq!(user.get("age").unwrap().as_i64(), Some(30));
    }

    #[test]
    fn plain_array() {
        let value = d("nums[3]=1,2,3");
        let nums = value.as_object().unwrap().get("nums").unwrap().as_array().unwrap();
        assert_eq!(nums.iter().map(|v| v.as_i64().unwrap()).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn table_array() {
        let value = d("users[2]{id,name}=1,Alice;2,Bob");
        let users = value.as_object().unwrap().get("users").unwrap().as_array().unwrap();
        assert_eq!(users.len(), 2);
        let first = users[0].as_object().unwrap();
        assert_eq!(first.get("id").unwrap().as_i64(), Some(1));
        assert_eq!(first.get("name").unwrap().as_str(), Some("Alice"));
    }

    #[test]
    fn quoted_string_with_escapes() {
        let value = d(r#"note="hi \"there\"""#);
        let note = value.as_object().unwrap().get("note").unwrap();
        assert_eq!(note.as_str(), Some("hi \"there\""));
    }

    #[test]
    fn leading_zero_integer_decodes_as_string() {
        let value = d("code=007");
        assert_eq!(value.as_object().unwrap().get("code").unwrap().as_str(), Some("007"));
    }

    #[test]
    fn standalone_array_document() {
        let value = decode("[3]=1,2,3", &DecoderOptions::default()).unwrap();
        assert!(value.is_array());
        assert_eq!(value.as_array().unwrap().len(), 3);
    }

    #[test]
    fn validate_collects_multiple_errors() {
        let errors = validate("a=1\nb(\nc=3");
        assert!(!errors.is_empty());
    }

    #[test]
    fn boundary_heuristic_splits_adjoining_pairs() {
        let value = d("a=1b=2");
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("a").unwrap().as_i64(), Some(1));
        assert_eq!(obj.get("b").unwrap().as_i64(), Some(2));
    }

    #[test]
    fn boundary_heuristic_does_not_truncate_fractional_or_scientific_scalars() {
        let value = d("fraction=0.5");
        assert_eq!(value.as_object().unwrap().get("fraction").unwrap().as_f64(), Some(0.5));

        let value = d("scientific=1.2e6");
        assert_eq!(
            value.as_object().unwrap().get("scientific").unwrap().as_f64(),
            Some(1.2e6)
        );

        let value = d("a=1b=2\ndistanceKm=7.5");
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("a").unwrap().as_i64(), Some(1));
        assert_eq!(obj.get("b").unwrap().as_i64(), Some(2));
        assert_eq!(obj.get("distanceKm").unwrap().as_f64(), Some(7.5));
    }

    #[test]
    fn table_array_with_decimal_columns_round_trips() {
        let value = d("hikes[1]{id,distanceKm,wasSunny}=1,7.5,true");
        let hikes = value.as_object().unwrap().get("hikes").unwrap().as_array().unwrap();
        let first = hikes[0].as_object().unwrap();
        assert_eq!(first.get("id").unwrap().as_i64(), Some(1));
        assert_eq!(first.get("distanceKm").unwrap().as_f64(), Some(7.5));
        assert_eq!(first.get("wasSunny").unwrap().as_bool(), Some(true));
    }
}
