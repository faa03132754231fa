//! Account Store
//!
//! Key-value store of borsh-encoded records addressed by `Pubkey`. This is
//! the program's view of the ledger's versioned state: pool records, fee
//! tracking entries and the token registry all live here.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::pubkey::Pubkey;
use std::collections::BTreeMap;

use crate::{
    error::PoolError,
    utils::serialization::{deserialize_account, serialize_to_account},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountStore {
    accounts: BTreeMap<Pubkey, Vec<u8>>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if an account holds data at `key`.
    pub fn contains(&self, key: &Pubkey) -> bool {
        self.accounts.contains_key(key)
    }

    /// Loads and decodes the record at `key`, if any.
    pub fn load<T: BorshDeserialize>(&self, key: &Pubkey) -> Result<Option<T>, PoolError> {
        self.accounts
            .get(key)
            .map(|data| deserialize_account(data))
            .transpose()
    }

    /// Writes `data` at `key`, replacing any previous record.
    pub fn store<T: BorshSerialize>(&mut self, key: &Pubkey, data: &T) -> Result<(), PoolError> {
        let account_data = self.accounts.entry(*key).or_default();
        serialize_to_account(data, account_data)
    }

    /// Deletes the account at `key`, returning whether it existed.
    pub fn remove(&mut self, key: &Pubkey) -> bool {
        self.accounts.remove(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
