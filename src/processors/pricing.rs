//! Time-Weighted Pricing
//!
//! Reads the pool's reserves from the ledger at the pool address and prices
//! trades with the weights in force at a given block height.

use solana_program::{msg, pubkey::Pubkey};

use crate::{
    error::PoolError,
    ledger::BalanceLedger,
    state::LbpPoolState,
    types::TokenId,
    utils::math::{calculate_in_given_out, calculate_out_given_in},
};

/// True iff `start <= height <= end`.
pub fn is_pool_running(pool: &LbpPoolState, height: u64) -> bool {
    pool.is_running(height)
}

/// Current ledger reserves of `(token_in, token_out)` held by `pool_key`.
pub fn get_reserves<L: BalanceLedger>(
    ledger: &L,
    pool_key: &Pubkey,
    token_in: TokenId,
    token_out: TokenId,
) -> (u64, u64) {
    (
        ledger.balance_of(token_in, pool_key),
        ledger.balance_of(token_out, pool_key),
    )
}

fn ensure_pool_pair(pool: &LbpPoolState, token_in: TokenId, token_out: TokenId) -> Result<(), PoolError> {
    if token_in == token_out || !pool.assets.contains(token_in) || !pool.assets.contains(token_out) {
        msg!("❌ Tokens {} / {} do not match the pool assets", token_in, token_out);
        return Err(PoolError::TokenNotInPool);
    }
    Ok(())
}

/// Gross amount of `token_out` for selling `amount_in` of `token_in`, before
/// fees.
///
/// # Errors
/// * `TokenNotInPool` - if the tokens are not this pool's two assets
/// * `SaleIsNotRunning` - if the pool window is empty
/// * `DivisionByZero` - if both the input reserve and `amount_in` are zero
pub fn calculate_token_out_amount<L: BalanceLedger>(
    ledger: &L,
    pool_key: &Pubkey,
    pool: &LbpPoolState,
    token_in: TokenId,
    token_out: TokenId,
    amount_in: u64,
    height: u64,
) -> Result<u64, PoolError> {
    ensure_pool_pair(pool, token_in, token_out)?;

    let (reserve_in, reserve_out) = get_reserves(ledger, pool_key, token_in, token_out);
    let (weight_in, weight_out) = pool.sorted_weights(token_in, height)?;

    msg!(
        "📊 Pricing at height {}: reserves {} / {}, weights {} / {}",
        height,
        reserve_in,
        reserve_out,
        weight_in,
        weight_out
    );

    calculate_out_given_in(reserve_in, reserve_out, weight_in, amount_in)
}

/// Unweighted constant-product input needed for `amount_out`, using the
/// reserves at `pool_key`.
pub fn calculate_amount_in<L: BalanceLedger>(
    ledger: &L,
    pool_key: &Pubkey,
    pool: &LbpPoolState,
    token_in: TokenId,
    token_out: TokenId,
    amount_out: u64,
) -> Result<u64, PoolError> {
    ensure_pool_pair(pool, token_in, token_out)?;

    let (reserve_in, reserve_out) = get_reserves(ledger, pool_key, token_in, token_out);
    calculate_amount_in_from_reserves(reserve_in, reserve_out, amount_out)
}

pub fn calculate_amount_in_from_reserves(
    reserve_in: u64,
    reserve_out: u64,
    amount_out: u64,
) -> Result<u64, PoolError> {
    calculate_in_given_out(reserve_in, reserve_out, amount_out)
}
