//! Token Identity Types
//!
//! Token ids, the canonical (order-independent) token pair, the ordered
//! accumulating/sold asset pair and the fee schedule ratio.

use borsh::{BorshDeserialize, BorshSerialize};
use std::fmt;

use crate::error::PoolError;

/// Opaque identifier of a fungible asset on the ledger.
#[derive(
    BorshSerialize, BorshDeserialize, Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct TokenId(pub u128);

impl TokenId {
    pub const fn new(id: u128) -> Self {
        Self(id)
    }

    pub const fn get(&self) -> u128 {
        self.0
    }

    pub fn to_le_bytes(&self) -> [u8; 16] {
        self.0.to_le_bytes()
    }
}

impl From<u128> for TokenId {
    fn from(id: u128) -> Self {
        Self(id)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An unordered pair of distinct tokens, stored with the smaller id first.
///
/// Building the pair from `(x, y)` or `(y, x)` yields the same value, so
/// anything derived from it (pool addresses, liquidity token ids) does not
/// depend on argument order.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanonicalTokenPair {
    token_a: TokenId,
    token_b: TokenId,
}

impl CanonicalTokenPair {
    /// # Errors
    /// * `TokensNotDistinct` - if both tokens are the same
    pub fn new(token1: TokenId, token2: TokenId) -> Result<Self, PoolError> {
        if token1 == token2 {
            return Err(PoolError::TokensNotDistinct);
        }

        let (token_a, token_b) = if token1 < token2 {
            (token1, token2)
        } else {
            (token2, token1)
        };

        Ok(Self { token_a, token_b })
    }

    /// Lower token id.
    pub const fn first(&self) -> TokenId {
        self.token_a
    }

    /// Higher token id.
    pub const fn second(&self) -> TokenId {
        self.token_b
    }
}

/// Which pool asset is accumulated and which is being sold.
///
/// Unlike [`CanonicalTokenPair`] this is NOT symmetrized: the order is the
/// one supplied by the pool creator and is fixed for the pool's lifetime.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetPair {
    /// Asset received from buyers; fees are always charged in this asset
    pub accumulating: TokenId,
    /// Asset distributed by the sale
    pub sold: TokenId,
}

impl AssetPair {
    pub const fn new(accumulating: TokenId, sold: TokenId) -> Self {
        Self { accumulating, sold }
    }

    pub fn contains(&self, token: TokenId) -> bool {
        self.accumulating == token || self.sold == token
    }

    pub fn is_accumulating(&self, token: TokenId) -> bool {
        self.accumulating == token
    }
}

/// Trading fee expressed as `numerator / denominator`.
///
/// A zero numerator or a zero denominator means no fee is charged.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeeSchedule {
    pub numerator: u32,
    pub denominator: u32,
}

impl FeeSchedule {
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

impl fmt::Display for FeeSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
