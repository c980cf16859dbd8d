//! Deterministic, offline Bitcoin key derivation from seed words.
//!
//! This crate provides pure Rust implementations of:
//! - Seed phrase normalization
//! - Private key derivation: SHA256 over the seed words and an account index
//! - Wallet Import Format encoding and decoding (uncompressed keys)
//! - Uncompressed SEC1 public key derivation on secp256k1
//! - Legacy P2PKH address encoding and decoding
//! - Base58 and Base58Check checksums
//!
//! Every stage is a pure function, so derivation for disjoint indices can run
//! concurrently without locking.

pub mod address;
pub mod base58;
pub mod checksum;
pub mod deriver;
pub mod error;
pub mod hash;
pub mod key;
pub mod network;
pub mod pubkey;
pub mod seed;
pub mod wif;

pub use address::Address;
pub use deriver::{DerivedAccount, Deriver};
pub use error::{AirgapError, Result};
pub use key::{AccountIndex, PrivateKeyScalar};
pub use network::Network;
pub use pubkey::PublicKeyPoint;
pub use seed::SeedPhrase;
pub use wif::Wif;

use tracing::trace;

/// Derive the private key for `index` from raw seed words.
///
/// Fails with [`AirgapError::InvalidSeed`] for an empty or malformed word list
/// and [`AirgapError::InvalidIndex`] for a negative index.
pub fn derive_key<I, S>(seed_words: I, index: i64) -> Result<PrivateKeyScalar>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let index = AccountIndex::try_from(index)?;
    let seed = SeedPhrase::normalize(seed_words)?;
    trace!(index = index.get(), words = seed.len(), "deriving private key");
    Ok(key::derive(&seed, index))
}

/// Encode a private key as a mainnet uncompressed WIF.
pub fn to_wif(sk: &PrivateKeyScalar) -> Result<Wif> {
    Wif::encode(sk)
}

/// Derive the uncompressed public key of `sk`.
pub fn to_public_key(sk: &PrivateKeyScalar) -> Result<PublicKeyPoint> {
    PublicKeyPoint::derive(sk)
}

/// Encode the mainnet address of an uncompressed public key.
///
/// The bytes are validated as an on-curve `0x04 || X || Y` point first.
pub fn to_address(pk_bytes: &[u8]) -> Result<Address> {
    let pk = PublicKeyPoint::from_sec1_bytes(pk_bytes)?;
    Ok(Address::encode(&pk))
}
