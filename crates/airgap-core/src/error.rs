//! Errors raised by the derivation pipeline and its decode paths.
//!
//! Every failure here is a deterministic validation error: the same input
//! always reproduces it, so none of them are worth retrying.

use thiserror::Error;

use crate::network::Network;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AirgapError>;

/// Errors produced while deriving, encoding or decoding keys and addresses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AirgapError {
    /// The seed word list was empty or contained a malformed word.
    #[error("invalid seed: {0}")]
    InvalidSeed(&'static str),

    /// The account index was negative.
    #[error("invalid account index: {0}")]
    InvalidIndex(i64),

    /// A scalar needed more than 32 bytes.
    #[error("key out of range: {len} significant bytes, at most 32 allowed")]
    KeyRange { len: usize },

    /// The scalar is zero or not below the secp256k1 group order.
    #[error("scalar is zero or not below the curve order")]
    InvalidScalar,

    /// The trailing 4-byte checksum did not match the payload.
    #[error("checksum mismatch")]
    ChecksumMismatch,

    /// Data handed to the checksum codec was shorter than the checksum itself.
    #[error("payload too short: need at least {min} bytes, got {got}")]
    PayloadTooShort { min: usize, got: usize },

    /// A character outside the Base58 alphabet.
    #[error("invalid base58 character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// A decoded payload had the wrong size.
    #[error("invalid length: expected {expected} bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },

    /// A version byte that no supported network uses.
    #[error("unknown version byte 0x{0:02x}")]
    UnknownVersion(u8),

    /// The decoded value belongs to a different network than requested.
    #[error("network mismatch: expected {expected}, got {got}")]
    NetworkMismatch { expected: Network, got: Network },

    /// Bytes that are not an uncompressed secp256k1 point.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("unknown network: {0}")]
    UnknownNetwork(String),
}

impl From<hex::FromHexError> for AirgapError {
    fn from(e: hex::FromHexError) -> Self {
        AirgapError::InvalidHex(e.to_string())
    }
}
