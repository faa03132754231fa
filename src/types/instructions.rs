//! Pool Instructions
//!
//! This module contains the instruction definitions for the Liquidity
//! Bootstrapping Pool Program. Each instruction is one signed transaction.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::pubkey::Pubkey;

use super::token::{FeeSchedule, TokenId};

/// Parameters for creating a new LBP pool.
///
/// `token_a` becomes the accumulating asset and `token_b` the sold asset.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct CreatePoolParams {
    pub token_a: TokenId,
    pub token_b: TokenId,
    pub amount_a: u64,
    pub amount_b: u64,
    /// First block of the sale window (inclusive)
    pub start: u64,
    /// Last block of the sale window (inclusive)
    pub end: u64,
    /// Weight of the accumulating asset at `start`
    pub initial_weight: u32,
    /// Weight of the accumulating asset at `end`
    pub final_weight: u32,
    pub fee: FeeSchedule,
    pub fee_collector: Pubkey,
    /// Cumulative fee amount after which the boosted repay fee stops applying
    pub repay_target: u64,
}

/// Optional changes to an LBP pool that has not started yet.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdatePoolParams {
    pub token_a: TokenId,
    pub token_b: TokenId,
    pub owner: Option<Pubkey>,
    pub start: Option<u64>,
    pub end: Option<u64>,
    pub initial_weight: Option<u32>,
    pub final_weight: Option<u32>,
    pub fee: Option<FeeSchedule>,
    pub fee_collector: Option<Pubkey>,
    pub repay_target: Option<u64>,
}

impl UpdatePoolParams {
    /// Returns true when at least one field would change.
    pub fn has_changes(&self) -> bool {
        self.owner.is_some()
            || self.start.is_some()
            || self.end.is_some()
            || self.initial_weight.is_some()
            || self.final_weight.is_some()
            || self.fee.is_some()
            || self.fee_collector.is_some()
            || self.repay_target.is_some()
    }
}

/// All supported instructions for the LBP program.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub enum LbpInstruction {
    /// Creates an LBP pool, funds it from the signer and mints the
    /// initial liquidity tokens to the signer.
    CreatePool(CreatePoolParams),

    /// Sells an exact `amount_in` of `token_in` for `token_out`.
    Sell {
        token_in: TokenId,
        token_out: TokenId,
        amount_in: u64,
        min_amount_out: u64,
    },

    /// Moves the remaining liquidity of an ended pool into the XYK pool
    /// for the same pair. Any signer may call this.
    MigratePool { token_a: TokenId, token_b: TokenId },

    /// Owner-only update of a pool before its sale starts.
    UpdatePoolData(UpdatePoolParams),

    /// Owner-only top-up of pool reserves.
    AddLiquidity {
        token_a: TokenId,
        amount_a: u64,
        token_b: TokenId,
        amount_b: u64,
    },
}
