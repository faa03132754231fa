//! Pool State Types and Structures
//!
//! Records stored in the account store for both pool types. An LBP record is
//! keyed by its LBP pool address and never changes through trading; an XYK
//! record is keyed by its XYK pool address and only its share supply moves.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::pubkey::Pubkey;

use crate::{
    constants::MAX_WEIGHT,
    error::PoolError,
    types::{AssetPair, CanonicalTokenPair, FeeSchedule, TokenId},
    utils::math::linear_weight,
};

/// Liquidity bootstrapping pool configuration.
///
/// The pool's reserves are not stored here: they are the ledger balances of
/// the pool address itself.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct LbpPoolState {
    pub owner: Pubkey,
    /// First block of the sale (inclusive)
    pub start: u64,
    /// Last block of the sale (inclusive)
    pub end: u64,
    pub assets: AssetPair,
    /// Accumulating asset weight at `start`, out of `MAX_WEIGHT`
    pub initial_weight: u32,
    /// Accumulating asset weight at `end`, out of `MAX_WEIGHT`
    pub final_weight: u32,
    pub fee: FeeSchedule,
    pub fee_collector: Pubkey,
    pub repay_target: u64,
    pub liquidity_token: TokenId,
}

impl LbpPoolState {
    /// True iff `start <= height <= end`.
    pub fn is_running(&self, height: u64) -> bool {
        self.start <= height && height <= self.end
    }

    pub fn has_started(&self, height: u64) -> bool {
        self.start <= height
    }

    pub fn has_ended(&self, height: u64) -> bool {
        height > self.end
    }

    /// Weights of `(token_in, token_out)` at `height`.
    ///
    /// The accumulating side interpolates from `initial_weight` to
    /// `final_weight`; the sold side interpolates the complements. The two
    /// returned weights always add up to `MAX_WEIGHT`.
    pub fn sorted_weights(&self, token_in: TokenId, height: u64) -> Result<(u32, u32), PoolError> {
        let (start_weight, end_weight) = if self.assets.is_accumulating(token_in) {
            (self.initial_weight, self.final_weight)
        } else if self.assets.sold == token_in {
            (
                MAX_WEIGHT - self.initial_weight,
                MAX_WEIGHT - self.final_weight,
            )
        } else {
            return Err(PoolError::TokenNotInPool);
        };

        let weight_in = linear_weight(self.start, self.end, start_weight, end_weight, height)?;
        Ok((weight_in, MAX_WEIGHT - weight_in))
    }
}

/// Constant-product pool record, the migration target of an ended LBP.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct XykPoolState {
    pub assets: CanonicalTokenPair,
    pub liquidity_token: TokenId,
    pub total_shares: u64,
}

/// Cumulative fees a collector has received in one asset.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct FeeCollectedState {
    pub fee_collector: Pubkey,
    pub asset: TokenId,
    /// Never decreases
    pub total_collected: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> LbpPoolState {
        LbpPoolState {
            owner: Pubkey::new_unique(),
            start: 100,
            end: 200,
            assets: AssetPair::new(TokenId::new(0), TokenId::new(1)),
            initial_weight: 80_000_000,
            final_weight: 20_000_000,
            fee: FeeSchedule::new(1, 100),
            fee_collector: Pubkey::new_unique(),
            repay_target: 0,
            liquidity_token: TokenId::new(99),
        }
    }

    #[test]
    fn running_window_is_inclusive() {
        let pool = pool();
        assert!(!pool.is_running(99));
        assert!(pool.is_running(100));
        assert!(pool.is_running(200));
        assert!(!pool.is_running(201));
        assert!(pool.has_ended(201));
        assert!(!pool.has_ended(200));
    }

    #[test]
    fn sorted_weights_swap_for_sold_side() {
        let pool = pool();

        assert_eq!(
            pool.sorted_weights(TokenId::new(0), 100).unwrap(),
            (80_000_000, 20_000_000)
        );
        assert_eq!(
            pool.sorted_weights(TokenId::new(1), 100).unwrap(),
            (20_000_000, 80_000_000)
        );
        assert_eq!(
            pool.sorted_weights(TokenId::new(1), 150).unwrap(),
            (50_000_000, 50_000_000)
        );
        assert_eq!(
            pool.sorted_weights(TokenId::new(7), 150),
            Err(PoolError::TokenNotInPool)
        );
    }
}
