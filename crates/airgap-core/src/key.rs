//! Private key derivation from a seed phrase and an account index.
//!
//! The derivation input is the seed words joined by single spaces, a space,
//! the decimal account index and a trailing newline. Its SHA256 digest, read as
//! a big-endian integer, is the private key. There is no key stretching.

use core::fmt;

use k256::{FieldBytes, SecretKey};
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{AirgapError, Result};
use crate::seed::SeedPhrase;

/// Length of a serialized private key scalar.
pub const SCALAR_LEN: usize = 32;

/// Index distinguishing independently derived keys from the same seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountIndex(u64);

impl AccountIndex {
    pub const fn new(index: u64) -> Self {
        AccountIndex(index)
    }

    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl From<u32> for AccountIndex {
    fn from(index: u32) -> Self {
        AccountIndex(index as u64)
    }
}

impl From<u64> for AccountIndex {
    fn from(index: u64) -> Self {
        AccountIndex(index)
    }
}

impl TryFrom<i64> for AccountIndex {
    type Error = AirgapError;

    fn try_from(index: i64) -> Result<Self> {
        u64::try_from(index)
            .map(AccountIndex)
            .map_err(|_| AirgapError::InvalidIndex(index))
    }
}

impl fmt::Display for AccountIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A 256-bit private key, stored big-endian.
///
/// The value is not guaranteed to be a usable secp256k1 key; see
/// [`PrivateKeyScalar::to_secret_key`].
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKeyScalar([u8; SCALAR_LEN]);

impl PrivateKeyScalar {
    pub fn from_be_bytes(bytes: [u8; SCALAR_LEN]) -> Self {
        PrivateKeyScalar(bytes)
    }

    /// Build a scalar from a big-endian integer of any width.
    ///
    /// Shorter inputs are left-padded with zeros. Fails with
    /// [`AirgapError::KeyRange`] when more than 32 significant bytes remain
    /// after stripping leading zeros.
    pub fn from_be_slice(bytes: &[u8]) -> Result<Self> {
        let significant = &bytes[bytes.iter().take_while(|&&b| b == 0).count()..];
        if significant.len() > SCALAR_LEN {
            return Err(AirgapError::KeyRange { len: significant.len() });
        }

        let mut out = [0u8; SCALAR_LEN];
        out[SCALAR_LEN - significant.len()..].copy_from_slice(significant);
        Ok(PrivateKeyScalar(out))
    }

    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = Zeroizing::new(hex::decode(hex_str)?);
        Self::from_be_slice(&bytes)
    }

    pub fn to_be_bytes(&self) -> [u8; SCALAR_LEN] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; SCALAR_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Check the scalar against the secp256k1 group order.
    ///
    /// Fails with [`AirgapError::InvalidScalar`] if the scalar is zero or not
    /// below the order.
    pub fn to_secret_key(&self) -> Result<SecretKey> {
        SecretKey::from_bytes(FieldBytes::from_slice(&self.0))
            .map_err(|_| AirgapError::InvalidScalar)
    }
}

impl fmt::Debug for PrivateKeyScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKeyScalar(..)")
    }
}

/// Derive the private key for `index` from `seed`.
pub fn derive(seed: &SeedPhrase, index: AccountIndex) -> PrivateKeyScalar {
    let input = derivation_input(seed, index);
    let digest: [u8; SCALAR_LEN] = Sha256::digest(input.as_bytes()).into();
    PrivateKeyScalar(digest)
}

/// `"<word> <word> ... <index>\n"`, the exact bytes hashed by [`derive`].
fn derivation_input(seed: &SeedPhrase, index: AccountIndex) -> Zeroizing<String> {
    let mut input = Zeroizing::new(seed.joined());
    input.push(' ');
    input.push_str(&index.to_string());
    input.push('\n');
    input
}
