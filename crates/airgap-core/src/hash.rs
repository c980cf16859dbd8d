//! SHA256 and RIPEMD160 hashing helpers.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Single SHA256 hash.
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Bitcoin's double SHA256: SHA256(SHA256(data)).
///
/// The first four bytes of this digest form the Base58Check checksum.
#[inline]
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// RIPEMD160(SHA256(data)), the 20-byte public key hash used in addresses.
#[inline]
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let first = Sha256::digest(data);
    Ripemd160::digest(first).into()
}
