//! Typed scalar codec over wire-format values.
//!
//! Leaves store scalars in their wire form: text is escaped key-file style,
//! numbers are locale-independent decimal, binary is standard base64.
//! Every decoder can fail; every encoder produces a syntactically valid
//! wire value.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use super::{Result, ValueError, ValueKind};

/// Lossy UTF-8 copy of raw bytes, for error messages only.
fn sanitized(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn invalid(kind: ValueKind, raw: &[u8]) -> ValueError {
    ValueError::InvalidValue {
        kind,
        value: sanitized(raw),
    }
}

/// Encode text into its wire form.
///
/// The leading run of spaces and tabs is escaped as `\s`/`\t` so it survives
/// whitespace-stripping intermediaries; once any other character has been
/// emitted, spaces and tabs pass through literally. Newlines, carriage
/// returns and backslashes are escaped everywhere.
#[must_use]
pub fn encode_string(text: &str) -> String {
    let mut value = String::with_capacity(text.len());
    let mut leading = true;

    for ch in text.chars() {
        match ch {
            ' ' if leading => value.push_str("\\s"),
            '\t' if leading => value.push_str("\\t"),
            '\n' => value.push_str("\\n"),
            '\r' => value.push_str("\\r"),
            '\\' => {
                value.push_str("\\\\");
                leading = false;
            }
            ch => {
                value.push(ch);
                if ch != ' ' && ch != '\t' {
                    leading = false;
                }
            }
        }
    }

    value
}

/// Undo wire-format escapes.
///
/// Always runs to completion. An unknown escape sequence is preserved
/// literally and recorded as an error; a lone backslash at the end of the
/// value is dropped and recorded. Only the first error encountered is
/// returned alongside the decoded text.
#[must_use]
pub fn unescape(value: &str) -> (String, Option<ValueError>) {
    let mut text = String::with_capacity(value.len());
    let mut error = None;
    let mut chars = value.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            text.push(ch);
            continue;
        }

        match chars.next() {
            Some('s') => text.push(' '),
            Some('n') => text.push('\n'),
            Some('t') => text.push('\t'),
            Some('r') => text.push('\r'),
            Some('\\') => text.push('\\'),
            Some(other) => {
                text.push('\\');
                text.push(other);
                if error.is_none() {
                    error = Some(ValueError::InvalidValue {
                        kind: ValueKind::String,
                        value: format!("\\{other}"),
                    });
                }
            }
            None => {
                if error.is_none() {
                    error = Some(ValueError::InvalidValue {
                        kind: ValueKind::String,
                        value: value.to_string(),
                    });
                }
            }
        }
    }

    (text, error)
}

/// Decode a raw wire value into text.
///
/// The raw bytes must be valid UTF-8 ([`ValueError::UnknownEncoding`]
/// otherwise); the first escape error recorded by [`unescape`], if any,
/// becomes the failure.
pub fn decode_string(raw: &[u8]) -> Result<String> {
    let value = std::str::from_utf8(raw).map_err(|_| ValueError::UnknownEncoding {
        value: sanitized(raw),
    })?;

    let (text, error) = unescape(value);
    match error {
        Some(error) => Err(error),
        None => Ok(text),
    }
}

/// Encode a boolean as `"true"`/`"false"`.
#[must_use]
pub fn encode_boolean(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Decode a boolean: exactly `"true"`/`"1"` or `"false"`/`"0"`.
pub fn decode_boolean(raw: &[u8]) -> Result<bool> {
    match raw {
        b"true" | b"1" => Ok(true),
        b"false" | b"0" => Ok(false),
        _ => Err(invalid(ValueKind::Boolean, raw)),
    }
}

/// Encode a signed 32-bit integer in base 10.
#[must_use]
pub fn encode_integer(value: i32) -> String {
    value.to_string()
}

/// Decode a base-10 signed 32-bit integer with `strtol`-compatible
/// tolerance: leading ASCII whitespace is skipped, and anything after the
/// numeric token is accepted as long as it starts with whitespace.
pub fn decode_integer(raw: &[u8]) -> Result<i32> {
    let mut pos = 0;
    while pos < raw.len() && raw[pos].is_ascii_whitespace() {
        pos += 1;
    }

    let mut cursor = pos;
    let mut negative = false;
    if cursor < raw.len() && (raw[cursor] == b'+' || raw[cursor] == b'-') {
        negative = raw[cursor] == b'-';
        cursor += 1;
    }

    let digits_start = cursor;
    let mut magnitude: i64 = 0;
    while cursor < raw.len() && raw[cursor].is_ascii_digit() {
        magnitude = magnitude
            .saturating_mul(10)
            .saturating_add(i64::from(raw[cursor] - b'0'));
        cursor += 1;
    }

    // strtol reports the scan position at the original start when no digits
    // were consumed.
    let end = if cursor == digits_start { 0 } else { cursor };

    if raw.is_empty() || raw.get(end).is_some_and(|b| !b.is_ascii_whitespace()) {
        return Err(invalid(ValueKind::Integer, raw));
    }

    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).map_err(|_| invalid(ValueKind::Integer, raw))
}

/// Encode a floating point number, locale-independent.
#[must_use]
pub fn encode_double(value: f64) -> String {
    format!("{value}")
}

/// Decode a locale-independent floating point number.
///
/// Stricter than the integer decoder: after optional leading ASCII
/// whitespace the entire remainder must be the numeric token, trailing
/// whitespace included.
pub fn decode_double(raw: &[u8]) -> Result<f64> {
    let text = std::str::from_utf8(raw).map_err(|_| invalid(ValueKind::Double, raw))?;

    let token = text.trim_start_matches(|c: char| c.is_ascii_whitespace());
    if token.is_empty() {
        return Err(invalid(ValueKind::Double, raw));
    }

    token
        .parse::<f64>()
        .map_err(|_| invalid(ValueKind::Double, raw))
}

/// Encode bytes as standard base64.
#[must_use]
pub fn encode_base64(value: &[u8]) -> String {
    BASE64.encode(value)
}

/// Decode a standard base64 payload.
///
/// A payload that decodes to zero bytes reports [`ValueError::InvalidValue`],
/// the same as malformed input; the two cases are not distinguishable.
pub fn decode_base64(raw: &[u8]) -> Result<Vec<u8>> {
    let decoded = BASE64
        .decode(raw)
        .map_err(|_| invalid(ValueKind::Base64Binary, raw))?;

    if decoded.is_empty() {
        return Err(invalid(ValueKind::Base64Binary, raw));
    }

    Ok(decoded)
}

/// Encode a text payload as standard base64 of its UTF-8 bytes.
#[must_use]
pub fn encode_base64_text(text: &str) -> String {
    encode_base64(text.as_bytes())
}

/// Decode a base64 payload that is expected to carry UTF-8 text.
pub fn decode_base64_text(raw: &[u8]) -> Result<String> {
    let decoded = decode_base64(raw)?;
    String::from_utf8(decoded).map_err(|error| ValueError::UnknownEncoding {
        value: sanitized(error.as_bytes()),
    })
}
