//! Wallet Import Format for uncompressed private keys.
//!
//! Layout before Base58: `version (0x80 on mainnet) || 32-byte key || 4-byte checksum`.
//! Only the uncompressed variant is produced; there is no trailing `0x01`
//! compression flag.

use core::fmt;

use serde::Serialize;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::base58;
use crate::checksum;
use crate::error::{AirgapError, Result};
use crate::key::{PrivateKeyScalar, SCALAR_LEN};
use crate::network::Network;

/// Length of the WIF payload (version byte + key), without checksum.
pub const WIF_PAYLOAD_LEN: usize = 1 + SCALAR_LEN;

/// A private key in Wallet Import Format.
#[derive(Clone, PartialEq, Eq, Serialize, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub struct Wif(String);

impl Wif {
    /// Encode `sk` for mainnet.
    pub fn encode(sk: &PrivateKeyScalar) -> Result<Self> {
        Self::encode_for_network(sk, Network::Mainnet)
    }

    /// Encode `sk` with the version byte of `network`.
    ///
    /// Fails with [`AirgapError::InvalidScalar`] for a zero or out-of-range
    /// scalar, which no wallet could import.
    pub fn encode_for_network(sk: &PrivateKeyScalar, network: Network) -> Result<Self> {
        sk.to_secret_key()?;

        let mut payload = Zeroizing::new([0u8; WIF_PAYLOAD_LEN]);
        payload[0] = network.wif_version();
        payload[1..].copy_from_slice(sk.as_bytes());

        let data = Zeroizing::new(checksum::wrap(payload.as_slice()));
        Ok(Wif(base58::encode(&data)))
    }

    /// Decode a WIF string into its network and private key.
    pub fn decode(wif: &str) -> Result<(Network, PrivateKeyScalar)> {
        let data = Zeroizing::new(base58::decode(wif.trim())?);
        let payload = checksum::unwrap(&data)?;

        if payload.len() != WIF_PAYLOAD_LEN {
            return Err(AirgapError::InvalidLength {
                expected: WIF_PAYLOAD_LEN,
                got: payload.len(),
            });
        }

        let network = Network::from_wif_version(payload[0])
            .ok_or(AirgapError::UnknownVersion(payload[0]))?;

        let sk = PrivateKeyScalar::from_be_slice(&payload[1..])?;
        sk.to_secret_key()?;
        Ok((network, sk))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Wif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Wif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Wif(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(hex_str: &str) -> PrivateKeyScalar {
        PrivateKeyScalar::from_hex(hex_str).unwrap()
    }

    #[test]
    fn test_secret_exponent_one() {
        let wif = Wif::encode(&scalar("01")).unwrap();
        assert_eq!(wif.as_str(), "5HpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kEsreAnchuDf");
    }

    #[test]
    fn test_derived_key() {
        let sk = scalar("fa12fee470b43df6c3693a6cba5dbf0bc8f1e13381be4f16750fd083a920c913");
        let wif = Wif::encode(&sk).unwrap();
        assert_eq!(wif.to_string(), "5KiRPenmJXSEZTWNsQbTYb3jaadqh8QHFEPjSYPe8M8HRrxjxfS");
    }

    #[test]
    fn test_leading_zero_bytes_in_key() {
        let sk = scalar("00000000fffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140");
        let wif = Wif::encode(&sk).unwrap();
        assert_eq!(wif.as_str(), "5HpHagTPJmwV3kz55wDUAqAGrumCtv8Ykk8YBPRubYA8Kdti6fe");
    }

    #[test]
    fn test_zero_scalar_rejected() {
        let sk = PrivateKeyScalar::from_be_bytes([0u8; 32]);
        assert_eq!(Wif::encode(&sk), Err(AirgapError::InvalidScalar));
    }

    #[test]
    fn test_curve_order_rejected() {
        let sk = scalar("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");
        assert_eq!(Wif::encode(&sk), Err(AirgapError::InvalidScalar));
    }

    #[test]
    fn test_decode_roundtrip() {
        let sk = scalar("b48c45a991b5b2f2d966be208b8ed2788df09e3fd3b1963e982aa5038f177906");
        for network in [Network::Mainnet, Network::Testnet] {
            let wif = Wif::encode_for_network(&sk, network).unwrap();
            let (decoded_network, decoded) = Wif::decode(wif.as_str()).unwrap();
            assert_eq!(decoded_network, network);
            assert_eq!(decoded, sk);
        }
    }

    #[test]
    fn test_decode_mistyped_character() {
        // Last character changed from 'f' to 'g'.
        let result = Wif::decode("5HpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kEsreAnchuDg");
        assert_eq!(result, Err(AirgapError::ChecksumMismatch));
    }

    #[test]
    fn test_decode_rejects_address() {
        let result = Wif::decode("1EHNa6Q4Jz2uvNExL497mE43ikXhwF6kZm");
        assert_eq!(result, Err(AirgapError::InvalidLength { expected: 33, got: 21 }));
    }

    #[test]
    fn test_debug_is_redacted() {
        let wif = Wif::encode(&scalar("01")).unwrap();
        assert_eq!(format!("{:?}", wif), "Wif(..)");
    }
}
