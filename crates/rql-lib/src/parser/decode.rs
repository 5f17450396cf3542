//! Percent-decoding of the raw query.
//!
//! Runs once over the whole input before lexing, so `a%3D1` and `a=1` lex identically.
//! Only `%XX` sequences are decoded; `+` is left alone because it is meaningful
//! inside `sort(+prop)`.

use std::borrow::Cow;

use super::errors::LexError;

/// Decodes one level of percent-encoding. Borrows when there is nothing to decode.
pub fn decode(source: &str) -> Result<Cow<'_, str>, LexError> {
    if !source.contains('%') {
        return Ok(Cow::Borrowed(source));
    }

    let bytes = source.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos] != b'%' {
            out.push(bytes[pos]);
            pos += 1;
            continue;
        }

        let high = bytes.get(pos + 1).copied().and_then(hex_value);
        let low = bytes.get(pos + 2).copied().and_then(hex_value);
        let (Some(high), Some(low)) = (high, low) else {
            let end = (pos + 3).min(bytes.len());
            return Err(LexError::MalformedPercentEncoding {
                offset: pos,
                sequence: String::from_utf8_lossy(&bytes[pos..end]).into_owned(),
            });
        };

        out.push((high << 4) | low);
        pos += 3;
    }

    String::from_utf8(out)
        .map(Cow::Owned)
        .map_err(|e| LexError::InvalidUtf8 {
            offset: e.utf8_error().valid_up_to(),
        })
}

fn hex_value(byte: u8) -> Option<u8> {
    char::from(byte).to_digit(16).map(|d| d as u8)
}
