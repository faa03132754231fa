//! Fee Schedule Processors
//!
//! Selection between the boosted repay fee and the pool's configured fee, and
//! bookkeeping of the cumulative fees each collector has received per asset.
//!
//! The switch is one-way: once a collector's cumulative fees in the
//! accumulating asset reach the pool's repay target, the configured fee
//! applies from then on, because the cumulative amount never decreases.

use solana_program::{msg, pubkey::Pubkey};

use crate::{
    constants::REPAY_FEE,
    error::PoolError,
    state::{AccountStore, FeeCollectedState, LbpPoolState},
    types::{FeeSchedule, TokenId},
    utils::{derivation::derive_fee_collector_asset_key, math::calculate_pool_trade_fee},
};

/// Cumulative fees `fee_collector` has received in `asset`; zero if untracked.
pub fn collected_fees(
    program_id: &Pubkey,
    accounts: &AccountStore,
    fee_collector: &Pubkey,
    asset: TokenId,
) -> Result<u64, PoolError> {
    let key = derive_fee_collector_asset_key(program_id, fee_collector, asset);
    let entry: Option<FeeCollectedState> = accounts.load(&key)?;
    Ok(entry.map(|e| e.total_collected).unwrap_or(0))
}

/// True while the pool's collector has collected less than its repay target.
pub fn is_repay_fee_applied(
    program_id: &Pubkey,
    accounts: &AccountStore,
    pool: &LbpPoolState,
) -> Result<bool, PoolError> {
    let collected = collected_fees(
        program_id,
        accounts,
        &pool.fee_collector,
        pool.assets.accumulating,
    )?;
    Ok(collected < pool.repay_target)
}

/// The schedule that applies to the next trade on `pool`.
pub fn current_fee_schedule(
    program_id: &Pubkey,
    accounts: &AccountStore,
    pool: &LbpPoolState,
) -> Result<FeeSchedule, PoolError> {
    if is_repay_fee_applied(program_id, accounts, pool)? {
        Ok(REPAY_FEE)
    } else {
        Ok(pool.fee)
    }
}

/// Fee owed on `amount` under the schedule currently in force.
pub fn calculate_fees(
    program_id: &Pubkey,
    accounts: &AccountStore,
    pool: &LbpPoolState,
    amount: u64,
) -> Result<u64, PoolError> {
    let schedule = current_fee_schedule(program_id, accounts, pool)?;
    let fee = calculate_pool_trade_fee(amount, schedule.numerator, schedule.denominator)?;

    #[cfg(feature = "debug-logs")]
    msg!("DEBUG: calculate_fees: amount {} schedule {} fee {}", amount, schedule, fee);

    Ok(fee)
}

/// Adds `amount` to the cumulative total of `(fee_collector, asset)`,
/// creating the entry if it does not exist yet.
pub fn record_collected_fee(
    program_id: &Pubkey,
    accounts: &mut AccountStore,
    fee_collector: &Pubkey,
    asset: TokenId,
    amount: u64,
) -> Result<u64, PoolError> {
    let key = derive_fee_collector_asset_key(program_id, fee_collector, asset);
    let mut entry: FeeCollectedState = accounts.load(&key)?.unwrap_or(FeeCollectedState {
        fee_collector: *fee_collector,
        asset,
        total_collected: 0,
    });

    entry.total_collected = entry
        .total_collected
        .checked_add(amount)
        .ok_or(PoolError::ArithmeticOverflow)?;
    accounts.store(&key, &entry)?;

    msg!(
        "💰 Fee collector {} total in token {}: {}",
        fee_collector,
        asset,
        entry.total_collected
    );
    Ok(entry.total_collected)
}
