//! # croft-abi
//!
//! Contract ABI call-data codec.
//!
//! The encode path turns a function signature plus typed parameters into
//! call-data bytes: a 4-byte selector followed by the parameter section,
//! laid out in fixed 32-byte words with a head/tail split between static
//! and dynamic parameters. The decode path reads dynamic string/bytes
//! values back out of raw return data through pointer/length word pairs,
//! treating every length and offset as attacker-influenced.
//!
//! Encoding writes into caller-supplied buffers and performs no
//! allocation; decoding allocates exactly one owned buffer per value.
//!
//! # Example
//!
//! ```rust
//! use croft_abi::{encode_function_call, Keccak256Oracle, Param};
//! use croft_primitives::Address;
//!
//! let to = Address::ZERO;
//! let amount = 1000u64.to_be_bytes();
//! let params = [
//!     Param::Address(&to),
//!     Param::Uint { bits: 256, value: &amount },
//! ];
//! let mut call_data = [0u8; 68];
//! let written = encode_function_call(
//!     "transfer(address,uint256)",
//!     &params,
//!     &Keccak256Oracle,
//!     &mut call_data,
//! )
//! .unwrap();
//! assert_eq!(written, 68);
//! assert_eq!(&call_data[..4], &[0xa9, 0x05, 0x9c, 0xbb]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod decode;
mod encode;
mod error;
mod selector;
mod types;

pub use decode::{decode_bytes, decode_returns, decode_string, DecodeOutcome, MAX_DECODED_LEN};
pub use encode::{encode_function_call, encode_param, encode_params, WORD_LEN};
pub use error::AbiError;
pub use selector::{compute_selector, HashOracle, Keccak256Oracle, OracleError, SELECTOR_LEN};
pub use types::{DecodedValue, Param};

// Re-export the primitives the API surfaces
pub use croft_primitives::{hex, Address, Hash256};
