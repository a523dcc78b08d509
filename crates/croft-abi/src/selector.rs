//! Function selector derivation
//!
//! A selector is the first 4 bytes of the Keccak-256 hash of the
//! canonical signature `name(type1,type2,...)`, no whitespace. The hash
//! itself is an injected capability so callers can substitute their own
//! provider; [`Keccak256Oracle`] is the local, pure default.

use thiserror::Error;

use crate::error::AbiError;

/// Selector size in bytes
pub const SELECTOR_LEN: usize = 4;

/// Failure reported by a hash provider
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct OracleError(pub String);

/// A capability that computes a 32-byte hash of an arbitrary byte string.
///
/// The trait returns owned bytes rather than a fixed-size array so that
/// a misbehaving provider can be detected instead of assumed away;
/// [`compute_selector`] rejects any result that is not exactly 32 bytes.
pub trait HashOracle {
    /// Compute a 32-byte hash of `data`
    fn hash(&self, data: &[u8]) -> Result<Vec<u8>, OracleError>;
}

/// The local Keccak-256 hash provider
#[derive(Debug, Default, Clone, Copy)]
pub struct Keccak256Oracle;

impl HashOracle for Keccak256Oracle {
    fn hash(&self, data: &[u8]) -> Result<Vec<u8>, OracleError> {
        Ok(croft_crypto::keccak256(data).as_bytes().to_vec())
    }
}

/// Derive the 4-byte selector for a canonical function signature.
pub fn compute_selector<O: HashOracle + ?Sized>(
    signature: &str,
    oracle: &O,
) -> Result<[u8; SELECTOR_LEN], AbiError> {
    if signature.is_empty() {
        return Err(AbiError::InvalidArgument("signature is empty"));
    }

    let digest = oracle
        .hash(signature.as_bytes())
        .map_err(|e| AbiError::OracleFailure(e.to_string()))?;
    if digest.len() != 32 {
        return Err(AbiError::OracleFailure(format!(
            "expected a 32-byte digest, got {} bytes",
            digest.len()
        )));
    }

    let mut selector = [0u8; SELECTOR_LEN];
    selector.copy_from_slice(&digest[..SELECTOR_LEN]);
    Ok(selector)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Oracle that never answers
    struct FailingOracle;

    impl HashOracle for FailingOracle {
        fn hash(&self, _data: &[u8]) -> Result<Vec<u8>, OracleError> {
            Err(OracleError("provider unreachable".to_string()))
        }
    }

    /// Oracle that returns a digest of the wrong size
    struct TruncatingOracle;

    impl HashOracle for TruncatingOracle {
        fn hash(&self, _data: &[u8]) -> Result<Vec<u8>, OracleError> {
            Ok(vec![0xab; 16])
        }
    }

    // ==================== Known selectors ====================

    #[test]
    fn test_transfer_selector() {
        let selector = compute_selector("transfer(address,uint256)", &Keccak256Oracle).unwrap();
        assert_eq!(selector, [0xa9, 0x05, 0x9c, 0xbb]);
    }

    #[test]
    fn test_balanceof_selector() {
        let selector = compute_selector("balanceOf(address)", &Keccak256Oracle).unwrap();
        assert_eq!(selector, [0x70, 0xa0, 0x82, 0x31]);
    }

    #[test]
    fn test_zero_parameter_signature() {
        // decimals() is a well-known no-argument signature
        let selector = compute_selector("decimals()", &Keccak256Oracle).unwrap();
        assert_eq!(selector, [0x31, 0x3c, 0xe5, 0x67]);
    }

    // ==================== Oracle boundary ====================

    #[test]
    fn test_empty_signature_rejected() {
        let result = compute_selector("", &Keccak256Oracle);
        assert!(matches!(result, Err(AbiError::InvalidArgument(_))));
    }

    #[test]
    fn test_failing_oracle() {
        let result = compute_selector("transfer(address,uint256)", &FailingOracle);
        assert_eq!(
            result,
            Err(AbiError::OracleFailure("provider unreachable".to_string()))
        );
    }

    #[test]
    fn test_malformed_oracle_result() {
        let result = compute_selector("transfer(address,uint256)", &TruncatingOracle);
        assert_eq!(
            result,
            Err(AbiError::OracleFailure(
                "expected a 32-byte digest, got 16 bytes".to_string()
            ))
        );
    }

    #[test]
    fn test_trait_object_oracle() {
        // Providers are usable behind a trait object
        let oracle: &dyn HashOracle = &Keccak256Oracle;
        let selector = compute_selector("decimals()", oracle).unwrap();
        assert_eq!(selector, [0x31, 0x3c, 0xe5, 0x67]);
    }
}
