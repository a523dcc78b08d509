//! Codec error types

use croft_primitives::hex::HexError;
use thiserror::Error;

/// ABI codec error
///
/// Every failure is returned as a value; the codec never panics on
/// untrusted input and never retries on its own.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AbiError {
    /// Required input missing or malformed at the call boundary
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Parameter kind this codec does not encode
    #[error("not supported: {0}")]
    NotSupported(&'static str),

    /// Caller-supplied output buffer cannot hold the encoding
    #[error("insufficient buffer: need {needed} bytes, have {capacity}")]
    InsufficientBuffer {
        /// Bytes required
        needed: usize,
        /// Bytes available
        capacity: usize,
    },

    /// Untrusted input failed validation while decoding
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The injected hash capability failed or returned the wrong size
    #[error("hash oracle failure: {0}")]
    OracleFailure(String),
}

impl From<HexError> for AbiError {
    fn from(e: HexError) -> Self {
        match e {
            HexError::BufferTooSmall { needed, capacity } => {
                AbiError::InsufficientBuffer { needed, capacity }
            }
            other => AbiError::MalformedInput(other.to_string()),
        }
    }
}
