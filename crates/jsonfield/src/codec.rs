// Canonical text encoding for stored JSON values

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Write;

use crate::error::{FieldError, Result};

/// Encode a value as compact UTF-8 JSON text.
///
/// This is the canonical physical form: `from_text(to_text(x))` is
/// value-equal to `x` for every JSON-representable `x`.
pub fn to_text<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(FieldError::Serialize)
}

/// Encode a value as compact JSON text with all non-ASCII characters
/// escaped as `\uXXXX` sequences.
///
/// Useful when the stored bytes must survive connections or tooling that
/// mangle non-ASCII text. Decodes identically to the output of [`to_text`].
pub fn to_ascii_text<T: Serialize>(value: &T) -> Result<String> {
    let text = to_text(value)?;
    Ok(escape_non_ascii(&text))
}

/// Decode text previously produced by [`to_text`] or [`to_ascii_text`].
pub fn from_text<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(FieldError::Deserialize)
}

// Non-ASCII characters only occur inside JSON string literals, so escaping
// them after serialization cannot change the document structure. Astral-plane
// characters become UTF-16 surrogate pairs.
fn escape_non_ascii(input: &str) -> String {
    if input.is_ascii() {
        return input.to_owned();
    }

    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                let _ = write!(out, "\\u{:04x}", unit);
            }
        }
    }
    out
}
