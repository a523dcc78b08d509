//! 256-bit digest type

use std::fmt;

use thiserror::Error;

use crate::hex::{self, HexError};

/// Digest parsing error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HashError {
    /// Invalid hex string
    #[error("invalid hex string: {0}")]
    Hex(#[from] HexError),
    /// Invalid length
    #[error("invalid digest length: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Expected byte count
        expected: usize,
        /// Actual byte count
        got: usize,
    },
}

/// 256-bit digest (32 bytes), the output width of Keccak-256
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hash256([u8; 32]);

impl Hash256 {
    /// Size in bytes
    pub const LEN: usize = 32;

    /// Zero digest
    pub const ZERO: Hash256 = Hash256([0u8; 32]);

    /// Create from bytes
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Hash256(bytes)
    }

    /// Create from a slice, checking the length
    pub fn from_slice(slice: &[u8]) -> Result<Self, HashError> {
        if slice.len() != Self::LEN {
            return Err(HashError::InvalidLength {
                expected: Self::LEN,
                got: slice.len(),
            });
        }
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(slice);
        Ok(Hash256(bytes))
    }

    /// Parse from a hex string (with or without `0x` prefix)
    pub fn from_hex(s: &str) -> Result<Self, HashError> {
        let bytes = hex::decode(s)?;
        Self::from_slice(&bytes)
    }

    /// Get as a byte array
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Convert to a `0x`-prefixed hex string
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", self.to_hex())
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; 32]> for Hash256 {
    fn from(bytes: [u8; 32]) -> Self {
        Hash256(bytes)
    }
}

impl AsRef<[u8]> for Hash256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Parsing ====================

    #[test]
    fn test_from_hex() {
        let digest = Hash256::from_hex(
            "0x0000000000000000000000000000000000000000000000000000000000000001",
        )
        .unwrap();
        assert!(!digest.is_zero());
        assert_eq!(digest.as_bytes()[31], 1);
    }

    #[test]
    fn test_from_hex_without_prefix() {
        let digest = Hash256::from_hex(
            "0000000000000000000000000000000000000000000000000000000000000001",
        )
        .unwrap();
        assert_eq!(digest.as_bytes()[31], 1);
    }

    #[test]
    fn test_from_hex_invalid_chars() {
        let result = Hash256::from_hex(
            "0xgggggggggggggggggggggggggggggggggggggggggggggggggggggggggggggggg",
        );
        assert!(matches!(result, Err(HashError::Hex(_))));
    }

    #[test]
    fn test_from_hex_too_short() {
        let result = Hash256::from_hex("0x0001");
        assert_eq!(
            result,
            Err(HashError::InvalidLength {
                expected: 32,
                got: 2
            })
        );
    }

    #[test]
    fn test_from_slice_wrong_length() {
        let result = Hash256::from_slice(&[0u8; 33]);
        assert_eq!(
            result,
            Err(HashError::InvalidLength {
                expected: 32,
                got: 33
            })
        );
    }

    #[test]
    fn test_from_slice_exact() {
        let bytes = [0xab; 32];
        let digest = Hash256::from_slice(&bytes).unwrap();
        assert_eq!(digest.as_bytes(), &bytes);
    }

    // ==================== Formatting and basics ====================

    #[test]
    fn test_hex_roundtrip() {
        let original = "0xabcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789";
        let digest = Hash256::from_hex(original).unwrap();
        assert_eq!(digest.to_hex(), original);
    }

    #[test]
    fn test_debug() {
        let digest = Hash256::ZERO;
        assert!(format!("{:?}", digest).starts_with("Hash256(0x"));
    }

    #[test]
    fn test_zero() {
        assert!(Hash256::ZERO.is_zero());
        assert_eq!(Hash256::default(), Hash256::ZERO);
    }

    #[test]
    fn test_len_constant() {
        assert_eq!(Hash256::LEN, 32);
    }

    #[test]
    fn test_equality() {
        let a = Hash256::from_bytes([0x01; 32]);
        let b = Hash256::from_bytes([0x01; 32]);
        let c = Hash256::from_bytes([0x02; 32]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
