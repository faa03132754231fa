//! Input Validation Utilities
//!
//! This module contains the checks applied to pool configuration on creation
//! and on every update, plus small helpers for signer and amount checks used
//! throughout the processors.

use solana_program::{msg, pubkey::Pubkey};

use crate::{
    constants::*,
    error::PoolError,
    state::LbpPoolState,
    types::FeeSchedule,
};

/// Validates the sale window, weights and fee of a pool record.
///
/// # Arguments
/// * `pool` - The record as it would be stored
/// * `block_height` - Current block height; the sale must start after it
///
/// # Errors
/// * `InvalidBlockRange` - if `block_height >= start` or `start >= end`
/// * `MaxSaleDurationExceeded` - if `end - start > MAX_SALE_DURATION`
/// * `InvalidWeight` - if a weight is outside `[MIN_WEIGHT, MAX_WEIGHT)`
/// * `InvalidFee` - if the fee numerator is zero or exceeds the denominator
pub fn validate_pool_data(pool: &LbpPoolState, block_height: u64) -> Result<(), PoolError> {
    validate_sale_window(pool.start, pool.end, block_height)?;
    validate_weight(pool.initial_weight, "Initial")?;
    validate_weight(pool.final_weight, "Final")?;
    validate_fee(&pool.fee)?;
    Ok(())
}

pub fn validate_sale_window(start: u64, end: u64, block_height: u64) -> Result<(), PoolError> {
    if block_height >= start {
        msg!(
            "❌ Sale must start in the future: start {} at height {}",
            start,
            block_height
        );
        return Err(PoolError::InvalidBlockRange);
    }
    if start >= end {
        msg!("❌ Sale start {} must precede end {}", start, end);
        return Err(PoolError::InvalidBlockRange);
    }
    if end - start > MAX_SALE_DURATION {
        msg!(
            "❌ Sale duration {} exceeds maximum {}",
            end - start,
            MAX_SALE_DURATION
        );
        return Err(PoolError::MaxSaleDurationExceeded);
    }
    Ok(())
}

pub fn validate_weight(weight: u32, context: &str) -> Result<(), PoolError> {
    if !(MIN_WEIGHT..MAX_WEIGHT).contains(&weight) {
        msg!(
            "❌ {} weight {} outside [{}, {})",
            context,
            weight,
            MIN_WEIGHT,
            MAX_WEIGHT
        );
        return Err(PoolError::InvalidWeight);
    }
    Ok(())
}

pub fn validate_fee(fee: &FeeSchedule) -> Result<(), PoolError> {
    if fee.numerator == 0 {
        msg!("❌ Fee numerator must be greater than zero");
        return Err(PoolError::InvalidFee);
    }
    if fee.denominator != 0 && fee.numerator > fee.denominator {
        msg!("❌ Fee {} exceeds 100%", fee);
        return Err(PoolError::InvalidFee);
    }
    Ok(())
}

/// Validates that `signer` is the pool owner.
pub fn validate_owner(pool: &LbpPoolState, signer: &Pubkey) -> Result<(), PoolError> {
    if pool.owner != *signer {
        msg!("❌ Signer {} is not the pool owner {}", signer, pool.owner);
        return Err(PoolError::NotOwner);
    }
    Ok(())
}

/// Validates that a token amount is non-zero.
pub fn validate_non_zero_amount(amount: u64, context: &str) -> Result<(), PoolError> {
    if amount == 0 {
        msg!("❌ {} amount cannot be zero", context);
        return Err(PoolError::ZeroAmount);
    }
    Ok(())
}
