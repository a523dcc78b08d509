//! Parameter and decoded-value types

/// A typed call parameter, borrowing its payload from the caller.
///
/// The codec never owns parameter bytes; a `Param` is valid for the
/// duration of a single encode call. Whether a parameter is dynamic
/// follows from its kind: strings always are, byte strings are when
/// longer than one 32-byte word, everything else is static.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param<'a> {
    /// Unsigned integer, 8-256 bits in multiples of 8.
    ///
    /// `value` holds the big-endian bytes of the number, at most
    /// `bits / 8` of them; shorter runs stand for the same number with
    /// leading zeros.
    Uint {
        /// Declared bit width (8, 16, ..., 256)
        bits: u16,
        /// Big-endian source bytes
        value: &'a [u8],
    },
    /// Signed integer, 8-256 bits in multiples of 8.
    ///
    /// `value` holds the big-endian two's-complement bytes.
    Int {
        /// Declared bit width (8, 16, ..., 256)
        bits: u16,
        /// Big-endian source bytes
        value: &'a [u8],
    },
    /// 20-byte address, right-aligned in its word
    Address(&'a croft_primitives::Address),
    /// Boolean, encoded as 0 or 1 in the low byte
    Bool(bool),
    /// Fixed-size byte run of at most 32 bytes, left-aligned in its word
    FixedBytes(&'a [u8]),
    /// Byte string; dynamic when longer than 32 bytes, otherwise laid
    /// out like `FixedBytes`
    Bytes(&'a [u8]),
    /// UTF-8 string, always dynamic
    String(&'a str),
    /// Array parameter; present in the type system but not encoded by
    /// this codec
    Array(&'a [Param<'a>]),
}

impl<'a> Param<'a> {
    /// Whether this parameter goes through the tail section
    pub fn is_dynamic(&self) -> bool {
        self.dynamic_payload().is_some()
    }

    /// The tail payload for a dynamic parameter, `None` for static ones
    pub(crate) fn dynamic_payload(&self) -> Option<&'a [u8]> {
        match *self {
            Param::String(s) => Some(s.as_bytes()),
            Param::Bytes(b) if b.len() > 32 => Some(b),
            _ => None,
        }
    }
}

/// A value decoded from return data.
///
/// Decoding allocates the backing buffer and hands ownership to the
/// caller; dropping the value releases it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedValue {
    /// UTF-8 string
    String(String),
    /// Raw byte string
    Bytes(Vec<u8>),
}

impl DecodedValue {
    /// The string content, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DecodedValue::String(s) => Some(s),
            DecodedValue::Bytes(_) => None,
        }
    }

    /// The raw bytes of the value
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            DecodedValue::String(s) => s.as_bytes(),
            DecodedValue::Bytes(b) => b,
        }
    }

    /// Payload length in bytes
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether the payload is empty
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}
