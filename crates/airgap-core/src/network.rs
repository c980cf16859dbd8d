//! Bitcoin network definitions and version bytes.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AirgapError;

/// Bitcoin network type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Bitcoin mainnet
    #[default]
    Mainnet,
    /// Bitcoin testnet
    Testnet,
}

impl Network {
    /// Version byte prepended to a private key in Wallet Import Format.
    pub fn wif_version(&self) -> u8 {
        match self {
            Network::Mainnet => 0x80,
            Network::Testnet => 0xef,
        }
    }

    /// Get the version byte for P2PKH addresses.
    pub fn p2pkh_version(&self) -> u8 {
        match self {
            Network::Mainnet => 0x00,
            Network::Testnet => 0x6f,
        }
    }

    /// Look up the network whose WIF version byte is `version`.
    pub fn from_wif_version(version: u8) -> Option<Self> {
        match version {
            0x80 => Some(Network::Mainnet),
            0xef => Some(Network::Testnet),
            _ => None,
        }
    }

    /// Look up the network whose P2PKH version byte is `version`.
    pub fn from_p2pkh_version(version: u8) -> Option<Self> {
        match version {
            0x00 => Some(Network::Mainnet),
            0x6f => Some(Network::Testnet),
            _ => None,
        }
    }

    /// Get network name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }
}

impl FromStr for Network {
    type Err = AirgapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" | "bitcoin" => Ok(Network::Mainnet),
            "testnet" | "test" => Ok(Network::Testnet),
            _ => Err(AirgapError::UnknownNetwork(s.to_string())),
        }
    }
}

impl core::fmt::Display for Network {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_bytes() {
        assert_eq!(Network::Mainnet.wif_version(), 0x80);
        assert_eq!(Network::Mainnet.p2pkh_version(), 0x00);
        assert_eq!(Network::Testnet.wif_version(), 0xef);
        assert_eq!(Network::Testnet.p2pkh_version(), 0x6f);
    }

    #[test]
    fn test_version_lookup_roundtrip() {
        for network in [Network::Mainnet, Network::Testnet] {
            assert_eq!(Network::from_wif_version(network.wif_version()), Some(network));
            assert_eq!(Network::from_p2pkh_version(network.p2pkh_version()), Some(network));
        }
        assert_eq!(Network::from_wif_version(0x00), None);
        assert_eq!(Network::from_p2pkh_version(0x05), None);
    }

    #[test]
    fn test_network_from_str() {
        assert_eq!("mainnet".parse::<Network>(), Ok(Network::Mainnet));
        assert_eq!("MAINNET".parse::<Network>(), Ok(Network::Mainnet));
        assert_eq!("testnet".parse::<Network>(), Ok(Network::Testnet));
        assert!(matches!(
            "invalid".parse::<Network>(),
            Err(AirgapError::UnknownNetwork(_))
        ));
    }

    #[test]
    fn test_default_is_mainnet() {
        assert_eq!(Network::default(), Network::Mainnet);
    }
}
