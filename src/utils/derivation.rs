//! Address and Identifier Derivation
//!
//! Pure functions turning token pairs into pool addresses and liquidity
//! token ids. Every derivation is seeded with a domain prefix, so an LBP
//! pool and an XYK pool for the same pair never share an address or a
//! liquidity token id.

use solana_program::{hash::hashv, pubkey::Pubkey};

use crate::{
    constants::*,
    error::PoolError,
    types::{CanonicalTokenPair, TokenId},
};

/// The AMM family a derivation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolDomain {
    Lbp,
    Xyk,
}

impl PoolDomain {
    pub fn pool_seed(&self) -> &'static [u8] {
        match self {
            PoolDomain::Lbp => LBP_POOL_SEED_PREFIX,
            PoolDomain::Xyk => XYK_POOL_SEED_PREFIX,
        }
    }

    pub fn share_token_seed(&self) -> &'static [u8] {
        match self {
            PoolDomain::Lbp => LBP_SHARE_TOKEN_SEED_PREFIX,
            PoolDomain::Xyk => XYK_SHARE_TOKEN_SEED_PREFIX,
        }
    }
}

/// Builds the order-independent pair for `(a, b)`.
///
/// # Errors
/// * `TokensNotDistinct` - if `a == b`
pub fn canonicalize(a: TokenId, b: TokenId) -> Result<CanonicalTokenPair, PoolError> {
    CanonicalTokenPair::new(a, b)
}

/// Derives the pool address (PDA) for a pair.
///
/// The address is both the key of the pool record and the ledger account
/// that custodies the pool's reserves.
pub fn derive_pool_key(
    program_id: &Pubkey,
    pair: &CanonicalTokenPair,
    domain: PoolDomain,
) -> Pubkey {
    let (pool_key, _bump) = find_pool_key_with_bump(program_id, pair, domain);
    pool_key
}

/// Derives the pool address together with its canonical bump seed.
pub fn find_pool_key_with_bump(
    program_id: &Pubkey,
    pair: &CanonicalTokenPair,
    domain: PoolDomain,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            domain.pool_seed(),
            &pair.first().to_le_bytes(),
            &pair.second().to_le_bytes(),
        ],
        program_id,
    )
}

/// Derives the liquidity token id for a pair.
///
/// SHA-256 over (domain seed, first, second), truncated to the first 16
/// bytes read little-endian.
pub fn derive_liquidity_token_id(pair: &CanonicalTokenPair, domain: PoolDomain) -> TokenId {
    let hash = hashv(&[
        domain.share_token_seed(),
        &pair.first().to_le_bytes(),
        &pair.second().to_le_bytes(),
    ]);

    let mut id_bytes = [0u8; 16];
    id_bytes.copy_from_slice(&hash.to_bytes()[..16]);
    TokenId::new(u128::from_le_bytes(id_bytes))
}

/// Derives the fee tracking address for a (fee collector, asset) pair.
pub fn derive_fee_collector_asset_key(
    program_id: &Pubkey,
    fee_collector: &Pubkey,
    asset: TokenId,
) -> Pubkey {
    let (key, _bump) = Pubkey::find_program_address(
        &[
            FEE_COLLECTOR_ASSET_SEED_PREFIX,
            fee_collector.as_ref(),
            &asset.to_le_bytes(),
        ],
        program_id,
    );
    key
}

/// Address of the token registry counter.
pub fn derive_token_registry_key(program_id: &Pubkey) -> Pubkey {
    let (key, _bump) = Pubkey::find_program_address(&[TOKEN_REGISTRY_SEED_PREFIX], program_id);
    key
}

/// Address of the registry entry at `index`.
pub fn derive_registry_index_key(program_id: &Pubkey, index: u64) -> Pubkey {
    let (key, _bump) = Pubkey::find_program_address(
        &[TOKEN_REGISTRY_INDEX_SEED_PREFIX, &index.to_le_bytes()],
        program_id,
    );
    key
}

/// Address of the inverse registry entry for `token_id`.
pub fn derive_registry_id_key(program_id: &Pubkey, token_id: TokenId) -> Pubkey {
    let (key, _bump) = Pubkey::find_program_address(
        &[TOKEN_REGISTRY_ID_SEED_PREFIX, &token_id.to_le_bytes()],
        program_id,
    );
    key
}
