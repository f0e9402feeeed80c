//! Shared grammar predicates and numeric canonicalization.
//!
//! Both [`crate::ser`] and [`crate::de`] import from this module rather than
//! each defining their own character classes — a grammar rule defined twice
//! is a grammar rule that can drift out of sync between encode and decode.

use crate::options::DecimalMode;
use bigdecimal::{BigDecimal, FromPrimitive};
use num_bigint::BigInt;

/// `SAFE_KEY_CHAR = [0-9A-Za-z_.:-]`.
#[inline]
#[must_use]
pub fn is_safe_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | ':' | '-')
}

/// `SAFE_KEY_START = [A-Za-z_.:]`, i.e. `SAFE_KEY_CHAR` minus digits and `-`.
///
/// The boundary heuristic (§4.3) excludes digit- and `-`-led runs from
/// counting as the start of a new key, so that a numeric scalar's own
/// digits are never mistaken for the next pair.
#[inline]
#[must_use]
pub fn is_safe_key_start(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '_' | '.' | ':')
}

#[inline]
#[must_use]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// `TERMINATOR` = `, ; ) ] }` plus whitespace plus any structural opener.
#[inline]
#[must_use]
pub fn is_terminator(c: char) -> bool {
    matches!(c, ',' | ';' | ')' | ']' | '}' | '(' | '[' | '{') || is_whitespace(c)
}

pub const RESERVED_LITERALS: [&str; 3] = ["true", "false", "null"];

#[inline]
#[must_use]
pub fn is_reserved_literal(s: &str) -> bool {
    RESERVED_LITERALS.contains(&s)
}

/// `-?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?`, matched over the whole string.
#[must_use]
pub fn is_numeric_like(s: &str) -> bool {
    let mut chars = s.chars().peekable();
    if chars.peek() == Some(&'-') {
        chars.next();
    }
    let mut int_digits = 0;
    while matches!(chars.peek(), Some(c) if c.is_ascii_digit()) {
        chars.next();
        int_digits += 1;
    }
    if int_digits == 0 {
        return false;
    }
    if chars.peek() == Some(&'.') {
        chars.next();
        let mut frac_digits = 0;
        while matches!(chars.peek(), Some(c) if c.is_ascii_digit()) {
            chars.next();
            frac_digits += 1;
        }
        if frac_digits == 0 {
            return false;
        }
    }
    if matches!(chars.peek(), Some('e') | Some('E')) {
        chars.next();
        if matches!(chars.peek(), Some('+') | Some('-')) {
            chars.next();
        }
        let mut exp_digits = 0;
        while matches!(chars.peek(), Some(c) if c.is_ascii_digit()) {
            chars.next();
            exp_digits += 1;
        }
        if exp_digits == 0 {
            return false;
        }
    }
    chars.next().is_none()
}

/// Non-empty and every character is a `SAFE_KEY_CHAR`.
#[inline]
#[must_use]
pub fn is_safe_key(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_safe_key_char)
}

/// A "safe token": unquotable as a bare scalar or key.
///
/// Matches `SAFE_KEY_CHAR+`, is not a reserved literal, and is not
/// numeric-like.
#[inline]
#[must_use]
pub fn is_safe_token(s: &str) -> bool {
    is_safe_key(s) && !is_reserved_literal(s) && !is_numeric_like(s)
}

/// Complement of [`is_safe_token`] for non-empty checks, plus the empty case:
/// a string must be quoted iff it is empty, contains a character outside
/// `SAFE_KEY_CHAR`, equals a reserved literal, or is numeric-like.
#[inline]
#[must_use]
pub fn needs_quoting(s: &str) -> bool {
    s.is_empty()
        || !s.chars().all(is_safe_key_char)
        || is_reserved_literal(s)
        || is_numeric_like(s)
}

/// §4.1's four-step canonical decimal formatter.
///
/// Returns `None` for NaN/±Infinity — the caller maps that to the `null`
/// literal, a documented normalization rather than an error.
#[must_use]
pub fn canonical_decimal(r: f64, mode: DecimalMode) -> Option<String> {
    if r.is_nan() || r.is_infinite() {
        return None;
    }
    if r == 0.0 {
        // Collapses both +0.0 and -0.0 (IEEE equality holds for both).
        return Some("0".to_string());
    }

    let mut s = match mode {
        DecimalMode::Fast => {
            let fast = format!("{r}");
            if fast.contains('e') || fast.contains('E') {
                precise_decimal_string(r)
            } else {
                fast
            }
        }
        DecimalMode::Precise => precise_decimal_string(r),
    };

    if let Some(stripped) = s.strip_prefix('+') {
        s = stripped.to_string();
    }
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    Some(s)
}

fn precise_decimal_string(r: f64) -> String {
    let bd = BigDecimal::from_f64(r).expect("finite f64 always has an exact BigDecimal expansion");
    bd.to_plain_string()
}

/// `BigInt`'s `Display` is already canonical (no leading zeros, no leading
/// `+`), but this is exposed as a named function so `ser` never formats a
/// `BigInt` by ad hoc `.to_string()` calls scattered through the encoder.
#[inline]
#[must_use]
pub fn canonical_integer(n: &BigInt) -> String {
    n.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_like_matches_spec_examples() {
        assert!(is_numeric_like("123"));
        assert!(is_numeric_like("-5"));
        assert!(is_numeric_like("1.2e6"));
        assert!(is_numeric_like("1e6"));
        assert!(!is_numeric_like("007abc"));
        assert!(!is_numeric_like(""));
        assert!(!is_numeric_like("-"));
        assert!(!is_numeric_like("1."));
        assert!(is_numeric_like("007"));
    }

    #[test]
    fn safe_token_excludes_reserved_and_numeric() {
        assert!(is_safe_token("Boulder"));
        assert!(is_safe_token("spring_2025"));
        assert!(!is_safe_token("true"));
        assert!(!is_safe_token("007"));
        assert!(!is_safe_token(""));
    }

    #[test]
    fn canonical_decimal_collapses_negative_zero() {
        assert_eq!(canonical_decimal(-0.0, DecimalMode::Fast).as_deref(), Some("0"));
        assert_eq!(canonical_decimal(0.0, DecimalMode::Fast).as_deref(), Some("0"));
    }

    #[test]
    fn canonical_decimal_strips_trailing_fraction_zeros() {
        assert_eq!(canonical_decimal(1.0, DecimalMode::Fast).as_deref(), Some("1"));
        assert_eq!(canonical_decimal(0.5, DecimalMode::Fast).as_deref(), Some("0.5"));
    }

    #[test]
    fn canonical_decimal_non_finite_is_none() {
        assert_eq!(canonical_decimal(f64::NAN, DecimalMode::Fast), None);
        assert_eq!(canonical_decimal(f64::INFINITY, DecimalMode::Fast), None);
        assert_eq!(canonical_decimal(f64::NEG_INFINITY, DecimalMode::Precise), None);
    }

    #[test]
    fn canonical_decimal_scientific_falls_through_to_precise() {
        let out = canonical_decimal(1.2e6, DecimalMode::Fast).unwrap();
        assert!(!out.contains('e') && !out.contains('E'));
        assert_eq!(out, "1200000");
    }
}
