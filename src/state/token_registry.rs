//! Token Registry
//!
//! Global record of every liquidity token minted by either pool type. The
//! counter account holds the next free index; each registration writes an
//! index → token entry and its inverse token → index entry. Pool creation
//! consults the inverse entry to refuse a token id that already exists.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{msg, pubkey::Pubkey};

use super::store::AccountStore;
use crate::{
    error::PoolError,
    types::TokenId,
    utils::derivation::{derive_registry_id_key, derive_registry_index_key, derive_token_registry_key},
};

/// Registry counter; starts at zero.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenRegistryState {
    pub next_index: u64,
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryIndexEntry {
    pub token_id: TokenId,
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryIdEntry {
    pub index: u64,
}

/// Handle over the registry accounts of one program.
pub struct TokenRegistry<'a> {
    program_id: &'a Pubkey,
    store: &'a mut AccountStore,
}

impl<'a> TokenRegistry<'a> {
    pub fn new(program_id: &'a Pubkey, store: &'a mut AccountStore) -> Self {
        Self { program_id, store }
    }

    /// Appends `token_id` at the next index and returns that index.
    ///
    /// # Errors
    /// * `LiquidityTokenAlreadyRegistered` - if the id is already present
    pub fn register(&mut self, token_id: TokenId) -> Result<u64, PoolError> {
        if token_exists(self.program_id, self.store, token_id)? {
            msg!("❌ Liquidity token {} is already registered", token_id);
            return Err(PoolError::LiquidityTokenAlreadyRegistered);
        }

        let counter_key = derive_token_registry_key(self.program_id);
        let mut counter: TokenRegistryState = self.store.load(&counter_key)?.unwrap_or_default();
        let index = counter.next_index;

        self.store.store(
            &derive_registry_index_key(self.program_id, index),
            &RegistryIndexEntry { token_id },
        )?;
        self.store.store(
            &derive_registry_id_key(self.program_id, token_id),
            &RegistryIdEntry { index },
        )?;

        counter.next_index = index.checked_add(1).ok_or(PoolError::ArithmeticOverflow)?;
        self.store.store(&counter_key, &counter)?;

        msg!("📋 Registered liquidity token {} at index {}", token_id, index);
        Ok(index)
    }
}

/// True if `token_id` has been registered by any pool type.
pub fn token_exists(
    program_id: &Pubkey,
    store: &AccountStore,
    token_id: TokenId,
) -> Result<bool, PoolError> {
    Ok(registry_index_of(program_id, store, token_id)?.is_some())
}

/// Index at which `token_id` was registered.
pub fn registry_index_of(
    program_id: &Pubkey,
    store: &AccountStore,
    token_id: TokenId,
) -> Result<Option<u64>, PoolError> {
    let entry: Option<RegistryIdEntry> = store.load(&derive_registry_id_key(program_id, token_id))?;
    Ok(entry.map(|e| e.index))
}

/// Token registered at `index`.
pub fn registry_token_at(
    program_id: &Pubkey,
    store: &AccountStore,
    index: u64,
) -> Result<Option<TokenId>, PoolError> {
    let entry: Option<RegistryIndexEntry> =
        store.load(&derive_registry_index_key(program_id, index))?;
    Ok(entry.map(|e| e.token_id))
}

/// Number of tokens registered so far.
pub fn registry_len(program_id: &Pubkey, store: &AccountStore) -> Result<u64, PoolError> {
    let counter: Option<TokenRegistryState> = store.load(&derive_token_registry_key(program_id))?;
    Ok(counter.unwrap_or_default().next_index)
}
