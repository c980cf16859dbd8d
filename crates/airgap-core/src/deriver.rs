//! Per-seed derivation of keys, WIFs and addresses over ranges of indices.

use serde::Serialize;
use tracing::{debug, warn};

use crate::address::Address;
use crate::error::Result;
use crate::key::{self, AccountIndex, PrivateKeyScalar};
use crate::network::Network;
use crate::pubkey::PublicKeyPoint;
use crate::seed::SeedPhrase;
use crate::wif::Wif;

/// Everything derived for one account index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedAccount {
    pub index: u64,
    pub wif: Wif,
    pub public_key: PublicKeyPoint,
    pub address: Address,
}

/// Derives accounts from one normalized seed phrase.
///
/// Holds no state besides the seed and network, so a shared `&Deriver` can be
/// used from any number of threads.
#[derive(Debug, Clone)]
pub struct Deriver {
    seed: SeedPhrase,
    network: Network,
}

impl Deriver {
    /// Normalize `words` and derive mainnet keys from them.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::from_seed(SeedPhrase::normalize(words)?))
    }

    pub fn from_seed(seed: SeedPhrase) -> Self {
        Deriver {
            seed,
            network: Network::Mainnet,
        }
    }

    pub fn with_network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    pub fn seed(&self) -> &SeedPhrase {
        &self.seed
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn private_key(&self, index: AccountIndex) -> PrivateKeyScalar {
        key::derive(&self.seed, index)
    }

    pub fn wif(&self, index: AccountIndex) -> Result<Wif> {
        Wif::encode_for_network(&self.private_key(index), self.network)
    }

    pub fn public_key(&self, index: AccountIndex) -> Result<PublicKeyPoint> {
        PublicKeyPoint::derive(&self.private_key(index))
    }

    pub fn address(&self, index: AccountIndex) -> Result<Address> {
        let pk = self.public_key(index)?;
        Ok(Address::encode_for_network(&pk, self.network))
    }

    /// Run the whole pipeline for one index.
    pub fn account(&self, index: AccountIndex) -> Result<DerivedAccount> {
        let sk = self.private_key(index);
        let wif = Wif::encode_for_network(&sk, self.network)?;
        let public_key = PublicKeyPoint::derive(&sk)?;
        let address = Address::encode_for_network(&public_key, self.network);

        debug!(index = index.get(), network = %self.network, "derived account");
        Ok(DerivedAccount {
            index: index.get(),
            wif,
            public_key,
            address,
        })
    }

    /// Derive `count` consecutive accounts starting at `start`.
    ///
    /// Each index gets its own result, in order; a failed index is reported
    /// and the rest of the batch carries on. The range stops short of
    /// `u64::MAX`.
    pub fn accounts(&self, start: AccountIndex, count: u64) -> Vec<(AccountIndex, Result<DerivedAccount>)> {
        self.map_range(start, count, |index| self.account(index))
    }

    /// Like [`Deriver::accounts`], but runs `f` for each index in the range.
    pub fn map_range<T, F>(&self, start: AccountIndex, count: u64, f: F) -> Vec<(AccountIndex, Result<T>)>
    where
        T: Send,
        F: Fn(AccountIndex) -> Result<T> + Sync,
    {
        let end = start.get().saturating_add(count);
        debug!(start = start.get(), end, network = %self.network, "deriving range");

        let run = |i: u64| {
            let index = AccountIndex::new(i);
            let outcome = f(index);
            if let Err(e) = &outcome {
                warn!(index = i, error = %e, "skipping account");
            }
            (index, outcome)
        };

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            (start.get()..end).into_par_iter().map(run).collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            (start.get()..end).map(run).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AirgapError;

    fn chbs() -> Deriver {
        Deriver::new(["correct", "horse", "battery", "staple"]).unwrap()
    }

    #[test]
    fn test_account_matches_single_steps() {
        let deriver = chbs();
        let index = AccountIndex::new(1);
        let account = deriver.account(index).unwrap();

        assert_eq!(account.index, 1);
        assert_eq!(account.wif, deriver.wif(index).unwrap());
        assert_eq!(account.public_key, deriver.public_key(index).unwrap());
        assert_eq!(account.address, deriver.address(index).unwrap());
        assert_eq!(account.wif.as_str(), "5KBoSFqutffDEVdtSYfJVPSbxYCDkhfUQyLqPEx42jeBRTeZteh");
        assert_eq!(account.address.as_str(), "1v2LGc55gnRYyhQ8xqoDvyzHqVBwG9nH8");
    }

    #[test]
    fn test_accounts_in_order() {
        let accounts = chbs().accounts(AccountIndex::new(5), 4);
        let indices: Vec<u64> = accounts.iter().map(|(i, _)| i.get()).collect();
        assert_eq!(indices, vec![5, 6, 7, 8]);

        let (_, seventh) = &accounts[2];
        assert_eq!(
            seventh.as_ref().unwrap().address.as_str(),
            "1BrivCGY5fCT7qrSHawn4qWY1D7e2Ranyd"
        );
    }

    #[test]
    fn test_range_saturates_at_max_index() {
        let accounts = chbs().accounts(AccountIndex::new(u64::MAX - 1), 10);
        assert_eq!(accounts.len(), 1);
    }

    #[test]
    fn test_failed_index_does_not_abort_batch() {
        let deriver = chbs();
        let results = deriver.map_range(AccountIndex::new(0), 3, |index| {
            if index.get() == 1 {
                Err(AirgapError::InvalidScalar)
            } else {
                deriver.address(index)
            }
        });

        assert_eq!(results.len(), 3);
        assert!(results[0].1.is_ok());
        assert_eq!(results[1].1, Err(AirgapError::InvalidScalar));
        assert!(results[2].1.is_ok());
    }

    #[test]
    fn test_testnet_prefixes() {
        let deriver = chbs().with_network(Network::Testnet);
        let account = deriver.account(AccountIndex::new(0)).unwrap();

        assert!(account.wif.as_str().starts_with('9'));
        let first = account.address.as_str().chars().next().unwrap();
        assert!(first == 'm' || first == 'n');
    }

    #[test]
    fn test_serialize_account() {
        let account = chbs().account(AccountIndex::new(0)).unwrap();
        let json = serde_json::to_value(&account).unwrap();

        assert_eq!(json["index"], 0);
        assert_eq!(json["wif"], "5KiRPenmJXSEZTWNsQbTYb3jaadqh8QHFEPjSYPe8M8HRrxjxfS");
        assert_eq!(json["address"], "1C4pQf465WoT5xMEJSJ5HdceCuAAQeZ6rv");
        assert!(json["public_key"].as_str().unwrap().starts_with("04fd3f19"));
    }
}
