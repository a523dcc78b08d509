//! # croft-crypto
//!
//! Keccak-256 hashing for Croft.
//!
//! Selector derivation needs a 32-byte cryptographic hash. This crate
//! provides it as a local, pure function so the codec never has to reach
//! over the network for a digest.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod hash;

pub use hash::keccak256;
