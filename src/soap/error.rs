//! Typed value codec errors.

use std::fmt;

use thiserror::Error;

/// Scalar type a typed getter was asked to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Escaped text value.
    String,
    /// `"true"`/`"1"`/`"false"`/`"0"`.
    Boolean,
    /// Base-10 signed 32-bit integer.
    Integer,
    /// Locale-independent floating point number.
    Double,
    /// Standard base64 binary payload.
    Base64Binary,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "a string",
            Self::Boolean => "a boolean",
            Self::Integer => "a number",
            Self::Double => "a float number",
            Self::Base64Binary => "base64 encoded",
        };
        write!(f, "{name}")
    }
}

/// Typed value codec errors.
///
/// The embedded value is a UTF-8-sanitized copy of the offending raw bytes
/// (invalid sequences replaced by U+FFFD) for diagnostics only; it is never
/// the value actually stored in a leaf or returned to a caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Raw value is not valid UTF-8.
    #[error("value '{value}' is not UTF-8")]
    UnknownEncoding {
        /// Sanitized copy of the raw value.
        value: String,
    },

    /// Raw value cannot be interpreted as the requested scalar type.
    #[error("value '{value}' cannot be interpreted as {kind}")]
    InvalidValue {
        /// Scalar type the caller asked for.
        kind: ValueKind,
        /// Sanitized copy of the raw value.
        value: String,
    },
}

/// Result type alias for typed value decoding.
pub type Result<T> = std::result::Result<T, ValueError>;
