//! Uncompressed secp256k1 public keys.
//!
//! Scalar multiplication is delegated to `k256`; this module only fixes the
//! SEC1 uncompressed layout `0x04 || X (32 bytes) || Y (32 bytes)`.

use core::fmt;

use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::PublicKey;
use serde::{Serialize, Serializer};

use crate::error::{AirgapError, Result};
use crate::key::PrivateKeyScalar;

/// Length of an uncompressed SEC1 public key.
pub const PUBLIC_KEY_LEN: usize = 65;

/// SEC1 tag byte for an uncompressed point.
pub const UNCOMPRESSED_TAG: u8 = 0x04;

/// An uncompressed public key point, serialized.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKeyPoint([u8; PUBLIC_KEY_LEN]);

impl PublicKeyPoint {
    /// Compute `sk * G`.
    ///
    /// Fails with [`AirgapError::InvalidScalar`] if `sk` is zero or not below
    /// the curve order.
    pub fn derive(sk: &PrivateKeyScalar) -> Result<Self> {
        let secret = sk.to_secret_key()?;
        Ok(Self::from_point(&secret.public_key()))
    }

    fn from_point(point: &PublicKey) -> Self {
        let encoded = point.to_encoded_point(false);
        let mut bytes = [0u8; PUBLIC_KEY_LEN];
        bytes.copy_from_slice(encoded.as_bytes());
        PublicKeyPoint(bytes)
    }

    /// Parse and validate an uncompressed SEC1 public key.
    ///
    /// The bytes must be 65 long, start with `0x04` and describe a point on
    /// the curve.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PUBLIC_KEY_LEN {
            return Err(AirgapError::InvalidLength {
                expected: PUBLIC_KEY_LEN,
                got: bytes.len(),
            });
        }
        if bytes[0] != UNCOMPRESSED_TAG {
            return Err(AirgapError::InvalidPublicKey(format!(
                "expected uncompressed tag 0x04, got 0x{:02x}",
                bytes[0]
            )));
        }

        let point = PublicKey::from_sec1_bytes(bytes)
            .map_err(|_| AirgapError::InvalidPublicKey("point is not on the curve".into()))?;
        Ok(Self::from_point(&point))
    }

    pub fn from_hex(hex_str: &str) -> Result<Self> {
        Self::from_sec1_bytes(&hex::decode(hex_str.trim())?)
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.0
    }

    pub fn x(&self) -> &[u8] {
        &self.0[1..33]
    }

    pub fn y(&self) -> &[u8] {
        &self.0[33..]
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for PublicKeyPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKeyPoint({})", self.to_hex())
    }
}

impl fmt::Display for PublicKeyPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for PublicKeyPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}
