//! Configuration for CTON encoding and decoding.
//!
//! - [`EncoderOptions`]: separator, pretty-printing, decimal formatting mode,
//!   and top-level comments.
//! - [`DecoderOptions`]: the single `symbolize_keys` knob named in §4.3.
//! - [`DecimalMode`]: the two numeric-formatting modes from §4.1.
//!
//! ## Examples
//!
//! ```rust
//! use cton::{EncoderOptions, DecimalMode, to_string_with_options};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let point = Point { x: 1, y: 2 };
//! let options = EncoderOptions::new().with_decimal_mode(DecimalMode::Precise);
//! let cton = to_string_with_options(&point, options).unwrap();
//! ```

use indexmap::IndexMap;

/// Numeric formatting mode for [`crate::grammar::canonical_decimal`].
///
/// Making this a unit enum rather than a string/flag means "unknown
/// decimal_mode" is unrepresentable — the §6 requirement that an unknown
/// configuration value is an error at construction is satisfied by Rust's
/// type system instead of a runtime check.
///
/// # Examples
///
/// ```rust
/// use cton::DecimalMode;
///
/// assert_eq!(DecimalMode::default(), DecimalMode::Fast);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DecimalMode {
    /// Host-native shortest-round-trip formatting, falling back to
    /// [`DecimalMode::Precise`] only if the result contains `e`/`E`.
    #[default]
    Fast,
    /// Arbitrary-precision decimal expansion via `bigdecimal`.
    Precise,
}

/// Configuration for [`crate::ser::Encoder`].
///
/// # Examples
///
/// ```rust
/// use cton::EncoderOptions;
///
/// let options = EncoderOptions::new().pretty().with_separator("; ");
/// assert!(options.pretty);
/// ```
#[derive(Clone, Debug)]
pub struct EncoderOptions {
    /// Byte string inserted between top-level key/value pairs. Default `"\n"`.
    pub separator: String,
    /// Enables indented multi-line emission for nested objects.
    pub pretty: bool,
    /// Indentation width in spaces, used only when `pretty` is set.
    pub indent: usize,
    pub decimal_mode: DecimalMode,
    /// Top-level key → comment text, emitted as `#`-prefixed lines before
    /// the corresponding pair. Purely cosmetic; the decoder discards
    /// comments entirely.
    pub comments: IndexMap<String, String>,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        EncoderOptions {
            separator: "\n".to_string(),
            pretty: false,
            indent: 2,
            decimal_mode: DecimalMode::default(),
            comments: IndexMap::new(),
        }
    }
}

impl EncoderOptions {
    /// Default options: `"\n"` separator, compact, fast decimal mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables pretty-printed (indented, multi-line) output.
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Sets the separator placed between top-level pairs.
    ///
    /// `""` is legal but defers unambiguous reparsing to the decoder's
    /// key-boundary heuristic.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the indentation width used when `pretty` is enabled.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Selects the decimal-formatting mode.
    #[must_use]
    pub fn with_decimal_mode(mut self, mode: DecimalMode) -> Self {
        self.decimal_mode = mode;
        self
    }

    /// Attaches a cosmetic comment to a top-level key.
    #[must_use]
    pub fn with_comment(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.comments.insert(key.into(), text.into());
        self
    }
}

/// Configuration for [`crate::de::Decoder`].
///
/// # Examples
///
/// ```rust
/// use cton::DecoderOptions;
///
/// let options = DecoderOptions::new().with_symbolize_keys(true);
/// assert!(options.symbolize_keys);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DecoderOptions {
    /// If true, object keys are conceptually returned as an
    /// interned/symbolic form. The core codec has no interning layer — all
    /// keys are plain `String`s either way — so this is a documented no-op
    /// on the data itself, threaded through for callers who want to attach
    /// their own symbolization on top.
    pub symbolize_keys: bool,
}

impl DecoderOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_symbolize_keys(mut self, symbolize_keys: bool) -> Self {
        self.symbolize_keys = symbolize_keys;
        self
    }
}
