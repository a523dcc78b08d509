//! # croft-primitives
//!
//! Primitive types for the Croft contract-call codec.
//!
//! This crate provides the fundamental data types shared by the higher
//! layers: the 20-byte [`Address`], the 32-byte [`Hash256`] digest, and
//! `0x`-prefixed [`hex`] string conversion.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod address;
mod hash;
pub mod hex;

pub use address::{Address, AddressError};
pub use hash::{Hash256, HashError};
