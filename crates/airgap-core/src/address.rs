//! Legacy P2PKH addresses for uncompressed public keys.
//!
//! Layout before Base58: `version (0x00 on mainnet) || RIPEMD160(SHA256(pubkey)) || 4-byte checksum`.

use core::fmt;

use serde::Serialize;

use crate::base58;
use crate::checksum;
use crate::error::{AirgapError, Result};
use crate::hash::hash160;
use crate::network::Network;
use crate::pubkey::PublicKeyPoint;

/// Length of a public key hash.
pub const PUBKEY_HASH_LEN: usize = 20;

/// Length of the address payload (version byte + hash), without checksum.
pub const ADDRESS_PAYLOAD_LEN: usize = 1 + PUBKEY_HASH_LEN;

/// A Base58Check encoded P2PKH address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Encode the mainnet address of `pk`.
    pub fn encode(pk: &PublicKeyPoint) -> Self {
        Self::encode_for_network(pk, Network::Mainnet)
    }

    pub fn encode_for_network(pk: &PublicKeyPoint, network: Network) -> Self {
        let mut payload = [0u8; ADDRESS_PAYLOAD_LEN];
        payload[0] = network.p2pkh_version();
        payload[1..].copy_from_slice(&hash160(pk.as_bytes()));

        Address(base58::encode(&checksum::wrap(&payload)))
    }

    /// Decode an address and return its public key hash.
    ///
    /// The checksum is verified first; the version byte must then be the
    /// P2PKH version of `expected_network`.
    pub fn decode(address: &str, expected_network: Network) -> Result<[u8; PUBKEY_HASH_LEN]> {
        let decoded = base58::decode(address.trim())?;
        let payload = checksum::unwrap(&decoded)?;

        if payload.len() != ADDRESS_PAYLOAD_LEN {
            return Err(AirgapError::InvalidLength {
                expected: ADDRESS_PAYLOAD_LEN,
                got: payload.len(),
            });
        }

        let version = payload[0];
        let network = Network::from_p2pkh_version(version)
            .ok_or(AirgapError::UnknownVersion(version))?;

        if network != expected_network {
            return Err(AirgapError::NetworkMismatch {
                expected: expected_network,
                got: network,
            });
        }

        let mut hash = [0u8; PUBKEY_HASH_LEN];
        hash.copy_from_slice(&payload[1..]);
        Ok(hash)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
