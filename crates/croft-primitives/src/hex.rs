//! `0x`-prefixed hex string conversion
//!
//! All hex produced by this module is lowercase with a `0x` prefix, two
//! characters per byte. Decoding accepts the prefix optionally and treats
//! the input as untrusted: odd digit counts and non-hex characters are
//! rejected rather than skipped.

use thiserror::Error;

/// Hex conversion error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HexError {
    /// Odd number of hex digits
    #[error("odd number of hex digits")]
    OddLength,

    /// Non-hex character in the input
    #[error("invalid hex character {ch:?} at position {index}")]
    InvalidDigit {
        /// The offending character
        ch: char,
        /// Position of the character, counted after any `0x` prefix
        index: usize,
    },

    /// Destination buffer cannot hold the result
    #[error("hex buffer too small: need {needed} bytes, have {capacity}")]
    BufferTooSmall {
        /// Bytes required
        needed: usize,
        /// Bytes available
        capacity: usize,
    },
}

/// Encode bytes as a `0x`-prefixed lowercase hex string.
pub fn encode(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Encode bytes as `0x`-prefixed hex text into a caller-supplied buffer.
///
/// Returns the number of bytes written (`2 * bytes.len() + 2`).
pub fn encode_into(bytes: &[u8], out: &mut [u8]) -> Result<usize, HexError> {
    let needed = 2 * bytes.len() + 2;
    if out.len() < needed {
        return Err(HexError::BufferTooSmall {
            needed,
            capacity: out.len(),
        });
    }
    out[0] = b'0';
    out[1] = b'x';
    hex::encode_to_slice(bytes, &mut out[2..needed]).map_err(|_| HexError::BufferTooSmall {
        needed,
        capacity: out.len(),
    })?;
    Ok(needed)
}

/// Decode a hex string (optional `0x` prefix) into an owned buffer.
///
/// `"0x"` and `""` decode to an empty buffer.
pub fn decode(s: &str) -> Result<Vec<u8>, HexError> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    hex::decode(digits).map_err(digit_error)
}

/// Decode a hex string (optional `0x` prefix) into a caller-supplied buffer.
///
/// Returns the number of bytes written.
pub fn decode_into(s: &str, out: &mut [u8]) -> Result<usize, HexError> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength);
    }
    let needed = digits.len() / 2;
    if out.len() < needed {
        return Err(HexError::BufferTooSmall {
            needed,
            capacity: out.len(),
        });
    }
    hex::decode_to_slice(digits, &mut out[..needed]).map_err(digit_error)?;
    Ok(needed)
}

fn digit_error(err: hex::FromHexError) -> HexError {
    match err {
        hex::FromHexError::InvalidHexCharacter { c, index } => {
            HexError::InvalidDigit { ch: c, index }
        }
        _ => HexError::OddLength,
    }
}
