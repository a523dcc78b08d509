//! Return-data decoding
//!
//! Return data arrives from an untrusted peer, so every pointer and
//! length word is validated against the buffer before it is followed.
//! Declared lengths are additionally capped at [`MAX_DECODED_LEN`] to
//! bound what a hostile response can make the decoder allocate.

use tracing::{debug, warn};

use crate::encode::WORD_LEN;
use crate::error::AbiError;
use crate::types::DecodedValue;

/// Sanity ceiling for a declared payload length (10 KiB)
pub const MAX_DECODED_LEN: usize = 10 * 1024;

/// Result of decoding a sequence of return slots.
///
/// Decoding is best-effort: a slot failure stops the walk but keeps the
/// values already decoded. `complete` distinguishes a full decode from a
/// partial one, so callers must not infer one from the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOutcome {
    /// Values decoded, in slot order
    pub values: Vec<DecodedValue>,
    /// Whether every expected slot decoded successfully
    pub complete: bool,
}

impl DecodeOutcome {
    /// Number of slots that decoded successfully
    pub fn decoded_count(&self) -> usize {
        self.values.len()
    }
}

/// Decode a dynamic string whose pointer word sits at `offset`.
///
/// The word at `offset` is a byte offset relative to the start of
/// `data`; the word it points at is the declared payload length, and the
/// payload follows immediately. A declared length of zero yields an
/// empty string.
pub fn decode_string(data: &[u8], offset: usize) -> Result<String, AbiError> {
    let bytes = decode_dynamic(data, offset)?;
    String::from_utf8(bytes)
        .map_err(|e| AbiError::MalformedInput(format!("string payload is not UTF-8: {e}")))
}

/// Decode a dynamic byte string whose pointer word sits at `offset`.
///
/// Same pointer and bounds discipline as [`decode_string`], without the
/// UTF-8 requirement.
pub fn decode_bytes(data: &[u8], offset: usize) -> Result<Vec<u8>, AbiError> {
    decode_dynamic(data, offset)
}

/// Decode `expected_count` return slots, treating each head word as a
/// string pointer.
///
/// A failure at slot `i` stops the walk; slots `0..i` are still
/// returned and the call as a whole succeeds. Inspect
/// [`DecodeOutcome::complete`] to tell the two apart.
pub fn decode_returns(data: &[u8], expected_count: usize) -> Result<DecodeOutcome, AbiError> {
    if data.len() < WORD_LEN {
        return Err(AbiError::InvalidArgument(
            "return data is shorter than one word",
        ));
    }

    let mut values = Vec::with_capacity(expected_count);
    for slot in 0..expected_count {
        match decode_string(data, slot * WORD_LEN) {
            Ok(s) => values.push(DecodedValue::String(s)),
            Err(err) => {
                debug!(slot, %err, "return decode stopped");
                break;
            }
        }
    }

    let complete = values.len() == expected_count;
    Ok(DecodeOutcome { values, complete })
}

fn decode_dynamic(data: &[u8], offset: usize) -> Result<Vec<u8>, AbiError> {
    let pointer = read_word(data, offset).ok_or_else(|| {
        AbiError::MalformedInput(format!(
            "no pointer word at offset {offset} in {} bytes",
            data.len()
        ))
    })?;
    if pointer >= data.len() {
        debug!(pointer, data_len = data.len(), "pointer out of range");
        return Err(AbiError::MalformedInput(format!(
            "pointer {pointer} past the end of {} bytes",
            data.len()
        )));
    }

    let length = read_word(data, pointer).ok_or_else(|| {
        AbiError::MalformedInput(format!(
            "no length word at pointer {pointer} in {} bytes",
            data.len()
        ))
    })?;
    if length == 0 {
        return Ok(Vec::new());
    }
    if length > MAX_DECODED_LEN {
        warn!(length, "declared length above sanity ceiling");
        return Err(AbiError::MalformedInput(format!(
            "declared length {length} exceeds the {MAX_DECODED_LEN}-byte ceiling"
        )));
    }

    let start = pointer + WORD_LEN;
    // pointer + WORD_LEN cannot overflow: read_word bounded both terms
    let end = start
        .checked_add(length)
        .filter(|&end| end <= data.len())
        .ok_or_else(|| {
            debug!(pointer, length, data_len = data.len(), "payload out of range");
            AbiError::MalformedInput(format!(
                "payload of {length} bytes at {start} overruns {} bytes",
                data.len()
            ))
        })?;

    Ok(data[start..end].to_vec())
}

/// Read the 32-byte big-endian word at `offset` as a usize.
///
/// Returns `None` if the word does not fit in `data` or its value does
/// not fit in 64 bits; such a value could never be a valid offset or
/// length within the buffer.
fn read_word(data: &[u8], offset: usize) -> Option<usize> {
    let end = offset.checked_add(WORD_LEN)?;
    if end > data.len() {
        return None;
    }
    let word = &data[offset..end];
    if word[..WORD_LEN - 8].iter().any(|&b| b != 0) {
        return None;
    }
    let mut low = [0u8; 8];
    low.copy_from_slice(&word[WORD_LEN - 8..]);
    usize::try_from(u64::from_be_bytes(low)).ok()
}
