//! Call-data encoding
//!
//! The parameter section is one 32-byte head word per parameter followed
//! by a tail holding the payloads of dynamic parameters. A static
//! parameter's head word is its value; a dynamic parameter's head word
//! is the byte offset of its tail entry, measured from the start of the
//! parameter section. Each tail entry is a length word, the payload, and
//! zero padding up to the next word boundary.

use crate::error::AbiError;
use crate::selector::{compute_selector, HashOracle, SELECTOR_LEN};
use crate::types::Param;

/// The fixed 32-byte encoding granularity
pub const WORD_LEN: usize = 32;

/// Encode one parameter into its 32-byte head word.
///
/// For every static kind this is the complete encoding. For `String`,
/// and for `Bytes` longer than one word, the word holds only the payload
/// length; the payload itself belongs to the tail and is emitted by
/// [`encode_params`].
pub fn encode_param(param: &Param<'_>) -> Result<[u8; WORD_LEN], AbiError> {
    let mut word = [0u8; WORD_LEN];
    match param {
        Param::Uint { bits, value } | Param::Int { bits, value } => {
            if *bits == 0 || *bits % 8 != 0 {
                return Err(AbiError::InvalidArgument(
                    "integer width must be a non-zero multiple of 8 bits",
                ));
            }
            if value.is_empty() {
                return Err(AbiError::InvalidArgument("integer value is empty"));
            }
            // Widths above 256 bits truncate to one word
            let width = ((*bits as usize) / 8).min(WORD_LEN);
            if value.len() > width {
                return Err(AbiError::InvalidArgument(
                    "integer value is wider than its declared width",
                ));
            }
            word[WORD_LEN - value.len()..].copy_from_slice(value);
        }
        Param::Address(addr) => {
            word[WORD_LEN - croft_primitives::Address::LEN..].copy_from_slice(addr.as_bytes());
        }
        Param::Bool(b) => {
            word[WORD_LEN - 1] = u8::from(*b);
        }
        Param::FixedBytes(bytes) => {
            if bytes.len() > WORD_LEN {
                return Err(AbiError::InvalidArgument(
                    "fixed bytes run longer than 32 bytes",
                ));
            }
            word[..bytes.len()].copy_from_slice(bytes);
        }
        Param::Bytes(bytes) => {
            if bytes.len() <= WORD_LEN {
                word[..bytes.len()].copy_from_slice(bytes);
            } else {
                word = uint_word(bytes.len());
            }
        }
        Param::String(s) => {
            word = uint_word(s.len());
        }
        Param::Array(_) => {
            return Err(AbiError::NotSupported("array parameters"));
        }
    }
    Ok(word)
}

/// Encode a parameter list as head and tail sections into `out`.
///
/// Requires at least one parameter; a zero-parameter call is selector-only
/// and never reaches this function. Returns the total bytes written.
pub fn encode_params(params: &[Param<'_>], out: &mut [u8]) -> Result<usize, AbiError> {
    if params.is_empty() {
        return Err(AbiError::InvalidArgument("parameter list is empty"));
    }

    let head_len = params.len() * WORD_LEN;
    ensure_capacity(out, head_len)?;

    // The tail grows behind the head; each dynamic head word records the
    // cursor position at the time its payload is appended.
    let mut tail_cursor = head_len;

    for (slot, param) in params.iter().enumerate() {
        let head_start = slot * WORD_LEN;
        match param.dynamic_payload() {
            None => {
                let word = encode_param(param)?;
                out[head_start..head_start + WORD_LEN].copy_from_slice(&word);
            }
            Some(payload) => {
                out[head_start..head_start + WORD_LEN].copy_from_slice(&uint_word(tail_cursor));

                let padded_len = payload.len().div_ceil(WORD_LEN) * WORD_LEN;
                let entry_end = tail_cursor + WORD_LEN + padded_len;
                ensure_capacity(out, entry_end)?;

                out[tail_cursor..tail_cursor + WORD_LEN]
                    .copy_from_slice(&uint_word(payload.len()));
                let payload_start = tail_cursor + WORD_LEN;
                out[payload_start..payload_start + payload.len()].copy_from_slice(payload);
                out[payload_start + payload.len()..entry_end].fill(0);

                tail_cursor = entry_end;
            }
        }
    }

    Ok(tail_cursor)
}

/// Encode a complete function call: selector followed by the parameter
/// section. An empty parameter list yields exactly the 4 selector bytes.
pub fn encode_function_call<O: HashOracle + ?Sized>(
    signature: &str,
    params: &[Param<'_>],
    oracle: &O,
    out: &mut [u8],
) -> Result<usize, AbiError> {
    ensure_capacity(out, SELECTOR_LEN)?;

    let selector = compute_selector(signature, oracle)?;
    out[..SELECTOR_LEN].copy_from_slice(&selector);

    if params.is_empty() {
        return Ok(SELECTOR_LEN);
    }

    let section_len = encode_params(params, &mut out[SELECTOR_LEN..])?;
    Ok(SELECTOR_LEN + section_len)
}

/// A 32-byte big-endian word holding a small unsigned value (lengths and
/// tail offsets)
fn uint_word(value: usize) -> [u8; WORD_LEN] {
    let mut word = [0u8; WORD_LEN];
    word[WORD_LEN - 8..].copy_from_slice(&(value as u64).to_be_bytes());
    word
}

fn ensure_capacity(out: &[u8], needed: usize) -> Result<(), AbiError> {
    if out.len() < needed {
        return Err(AbiError::InsufficientBuffer {
            needed,
            capacity: out.len(),
        });
    }
    Ok(())
}
