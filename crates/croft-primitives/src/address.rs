//! Ethereum-compatible address type (20 bytes)

use std::fmt;

use thiserror::Error;

use crate::hex::{self, HexError};

/// Address parsing error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    /// Invalid hex string
    #[error("invalid hex string: {0}")]
    Hex(#[from] HexError),
    /// Invalid length
    #[error("invalid address length: expected 20 bytes, got {0}")]
    InvalidLength(usize),
}

/// Ethereum-compatible 20-byte address
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Address([u8; 20]);

impl Address {
    /// Size of an address in bytes
    pub const LEN: usize = 20;

    /// Zero address (0x0000...0000)
    pub const ZERO: Address = Address([0u8; 20]);

    /// Create an address from bytes
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }

    /// Create an address from a slice, checking the length
    pub fn from_slice(slice: &[u8]) -> Result<Self, AddressError> {
        if slice.len() != Self::LEN {
            return Err(AddressError::InvalidLength(slice.len()));
        }
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(slice);
        Ok(Address(bytes))
    }

    /// Parse an address from a hex string (with or without `0x` prefix)
    pub fn from_hex(s: &str) -> Result<Self, AddressError> {
        let bytes = hex::decode(s)?;
        Self::from_slice(&bytes)
    }

    /// Get as a byte array
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Check whether this is the zero address
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// Convert to a `0x`-prefixed hex string
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Parsing ====================

    #[test]
    fn test_from_hex_with_prefix() {
        let addr = Address::from_hex("0x742d35cc6634c0532925a3b844bc9e7595f0ab3d").unwrap();
        assert_eq!(addr.as_bytes()[0], 0x74);
        assert_eq!(addr.as_bytes()[19], 0x3d);
    }

    #[test]
    fn test_from_hex_without_prefix() {
        let addr = Address::from_hex("742d35cc6634c0532925a3b844bc9e7595f0ab3d").unwrap();
        assert!(!addr.is_zero());
    }

    #[test]
    fn test_from_hex_mixed_case() {
        let lower = Address::from_hex("0x742d35cc6634c0532925a3b844bc9e7595f0ab3d").unwrap();
        let mixed = Address::from_hex("0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d").unwrap();
        assert_eq!(lower, mixed);
    }

    #[test]
    fn test_from_hex_invalid_chars() {
        let result = Address::from_hex("0xzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz");
        assert!(matches!(result, Err(AddressError::Hex(_))));
    }

    #[test]
    fn test_from_hex_wrong_length() {
        let result = Address::from_hex("0x742d35cc");
        assert_eq!(result, Err(AddressError::InvalidLength(4)));
    }

    #[test]
    fn test_from_slice_wrong_length() {
        let result = Address::from_slice(&[0u8; 19]);
        assert_eq!(result, Err(AddressError::InvalidLength(19)));
    }

    #[test]
    fn test_from_slice_exact() {
        let bytes = [0xab; 20];
        let addr = Address::from_slice(&bytes).unwrap();
        assert_eq!(addr.as_bytes(), &bytes);
    }

    // ==================== Formatting ====================

    #[test]
    fn test_hex_roundtrip() {
        let original = "0x742d35cc6634c0532925a3b844bc9e7595f0ab3d";
        let addr = Address::from_hex(original).unwrap();
        assert_eq!(addr.to_hex(), original);
    }

    #[test]
    fn test_display() {
        let addr = Address::from_bytes([0x11; 20]);
        assert_eq!(
            format!("{}", addr),
            "0x1111111111111111111111111111111111111111"
        );
    }

    #[test]
    fn test_debug() {
        let addr = Address::ZERO;
        assert!(format!("{:?}", addr).starts_with("Address(0x"));
    }

    // ==================== Basics ====================

    #[test]
    fn test_zero() {
        assert!(Address::ZERO.is_zero());
        assert_eq!(Address::default(), Address::ZERO);
    }

    #[test]
    fn test_len_constant() {
        assert_eq!(Address::LEN, 20);
    }

    #[test]
    fn test_from_array() {
        let bytes: [u8; 20] = [0x34; 20];
        let addr: Address = bytes.into();
        assert_eq!(addr.as_bytes(), &bytes);
    }

    #[test]
    fn test_equality() {
        let a = Address::from_bytes([0x01; 20]);
        let b = Address::from_bytes([0x01; 20]);
        let c = Address::from_bytes([0x02; 20]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
