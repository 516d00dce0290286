//! URL-safe base64 codec
//!
//! Standard base64 with a fixed one-to-one transliteration of the three
//! characters that are unsafe in URLs: `+` becomes `-`, `/` becomes `_` and
//! the `=` padding becomes `,`. Padding is kept, so the encoded length is
//! always a multiple of four.

use crate::error::JwsResult;
use base64::{engine::general_purpose::STANDARD, Engine as _};

#[inline]
fn to_url_safe(c: char) -> char {
    match c {
        '+' => '-',
        '/' => '_',
        '=' => ',',
        other => other,
    }
}

#[inline]
fn from_url_safe(c: char) -> char {
    match c {
        '-' => '+',
        '_' => '/',
        ',' => '=',
        other => other,
    }
}

/// Encode bytes into the URL-safe alphabet
#[must_use]
pub fn base64_url_encode(input: impl AsRef<[u8]>) -> String {
    STANDARD.encode(input).chars().map(to_url_safe).collect()
}

/// Decode a URL-safe base64 string.
///
/// # Errors
/// Returns [`JwsError::DecodeFailed`](crate::JwsError::DecodeFailed) when the
/// input is not valid base64 once transliterated back, including missing or
/// misplaced padding.
pub fn base64_url_decode(input: &str) -> JwsResult<Vec<u8>> {
    let standard: String = input.chars().map(from_url_safe).collect();
    Ok(STANDARD.decode(standard)?)
}
