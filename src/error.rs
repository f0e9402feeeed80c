//! Error types for CTON encoding and decoding.
//!
//! The codec recognizes exactly three error kinds: building a value tree can
//! fail ([`EncodeError`]), reading bytes can fail ([`ParseError`]), and the
//! lighter-weight structural check in [`crate::validate`] collects many of
//! the latter into a list instead of stopping at the first one
//! ([`ValidationError`]). There is no retry or silent substitution anywhere
//! in this crate except the one documented normalization (non-finite floats
//! encode as `null`) — every other failure reaches the caller as one of
//! these three.

use std::fmt;
use thiserror::Error;

/// Failures that can occur while turning a [`crate::CtonValue`] tree into bytes.
///
/// Fatal to the encode call in progress; no partial output is promised.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EncodeError {
    /// A map key did not match `SAFE_KEY_CHAR+` (`[0-9A-Za-z_.:-]+`).
    #[error("invalid key {key:?}: keys must match [0-9A-Za-z_.:-]+")]
    InvalidKey { key: String },

    /// A value variant this encoder cannot represent (reachable from a
    /// custom `Serialize` impl, not from [`crate::CtonValue`] itself).
    #[error("unsupported value: {0}")]
    UnsupportedValue(String),

    /// Writing to the caller-supplied sink failed.
    #[error("io error: {0}")]
    Io(String),
}

impl EncodeError {
    pub fn invalid_key(key: impl Into<String>) -> Self {
        EncodeError::InvalidKey { key: key.into() }
    }

    pub fn unsupported(msg: impl fmt::Display) -> Self {
        EncodeError::UnsupportedValue(msg.to_string())
    }

    pub fn io(msg: impl fmt::Display) -> Self {
        EncodeError::Io(msg.to_string())
    }
}

impl serde::ser::Error for EncodeError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        EncodeError::UnsupportedValue(msg.to_string())
    }
}

/// A grammar violation encountered while parsing a byte stream.
///
/// Carries a 1-indexed line and column plus a short excerpt of the input
/// around the failure point, per the wire format's diagnostic contract.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("parse error at line {line}, column {column}: {message}\n{excerpt}")]
pub struct ParseError {
    pub line: usize,
    pub column: usize,
    pub message: String,
    pub excerpt: String,
}

impl ParseError {
    pub fn new(
        line: usize,
        column: usize,
        message: impl Into<String>,
        excerpt: impl Into<String>,
    ) -> Self {
        ParseError {
            line,
            column,
            message: message.into(),
            excerpt: excerpt.into(),
        }
    }
}

impl serde::de::Error for ParseError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        ParseError::new(0, 0, msg.to_string(), String::new())
    }
}

/// A single structural defect found by [`crate::validate`].
///
/// Same shape as [`ParseError`]; `validate` collects these by recovering at
/// structural boundaries (newline, `,`, `;`, `)`, `]`, `}`) instead of
/// aborting at the first failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub line: usize,
    pub column: usize,
    pub message: String,
    pub excerpt: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "validation error at line {}, column {}: {}\n{}",
            self.line, self.column, self.message, self.excerpt
        )
    }
}

impl From<ParseError> for ValidationError {
    fn from(e: ParseError) -> Self {
        ValidationError {
            line: e.line,
            column: e.column,
            message: e.message,
            excerpt: e.excerpt,
        }
    }
}

/// Top-level error returned by the serde-facing convenience functions
/// (`to_string`, `from_str`, ...), unifying [`EncodeError`] and [`ParseError`]
/// behind one `Result` alias.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("io error: {0}")]
    Io(String),
    #[error("{0}")]
    Custom(String),
}

impl Error {
    pub fn custom(msg: impl fmt::Display) -> Self {
        Error::Custom(msg.to_string())
    }

    pub fn io(msg: impl fmt::Display) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
