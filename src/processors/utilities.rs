//! Utility Processors
//!
//! Read-only views over program state: pool lookups by token pair, fee
//! tracking, registry lookups and trade quotes. None of these write state.

use solana_program::pubkey::Pubkey;

use crate::{
    error::PoolError,
    ledger::BalanceLedger,
    processors::{
        fees::collected_fees,
        pricing::{calculate_amount_in, is_pool_running},
        swap::compute_sell_settlement,
    },
    runtime::ProgramState,
    state::{
        registry_len, registry_token_at, token_exists, FeeCollectedState, LbpPoolState,
        XykPoolState,
    },
    types::TokenId,
    utils::derivation::{canonicalize, derive_fee_collector_asset_key, derive_pool_key, PoolDomain},
};

// ================================================================================================
// POOL LOOKUPS
// ================================================================================================

/// LBP pool address for a pair, in either order.
pub fn get_pool_key(program_id: &Pubkey, token_a: TokenId, token_b: TokenId) -> Result<Pubkey, PoolError> {
    let pair = canonicalize(token_a, token_b)?;
    Ok(derive_pool_key(program_id, &pair, PoolDomain::Lbp))
}

pub fn get_pool<L>(
    program_id: &Pubkey,
    state: &ProgramState<L>,
    token_a: TokenId,
    token_b: TokenId,
) -> Result<Option<LbpPoolState>, PoolError> {
    state.accounts.load(&get_pool_key(program_id, token_a, token_b)?)
}

/// Ledger balances of `(token_a, token_b)` held by the LBP pool address.
pub fn get_pool_reserves<L: BalanceLedger>(
    program_id: &Pubkey,
    state: &ProgramState<L>,
    token_a: TokenId,
    token_b: TokenId,
) -> Result<(u64, u64), PoolError> {
    let pool_key = get_pool_key(program_id, token_a, token_b)?;
    Ok((
        state.ledger.balance_of(token_a, &pool_key),
        state.ledger.balance_of(token_b, &pool_key),
    ))
}

pub fn get_xyk_pool<L>(
    program_id: &Pubkey,
    state: &ProgramState<L>,
    token_a: TokenId,
    token_b: TokenId,
) -> Result<Option<XykPoolState>, PoolError> {
    let pair = canonicalize(token_a, token_b)?;
    state
        .accounts
        .load(&derive_pool_key(program_id, &pair, PoolDomain::Xyk))
}

// ================================================================================================
// FEES AND REGISTRY
// ================================================================================================

pub fn get_collected_fees<L>(
    program_id: &Pubkey,
    state: &ProgramState<L>,
    fee_collector: &Pubkey,
    asset: TokenId,
) -> Result<u64, PoolError> {
    collected_fees(program_id, &state.accounts, fee_collector, asset)
}

pub fn get_fee_collected_entry<L>(
    program_id: &Pubkey,
    state: &ProgramState<L>,
    fee_collector: &Pubkey,
    asset: TokenId,
) -> Result<Option<FeeCollectedState>, PoolError> {
    state
        .accounts
        .load(&derive_fee_collector_asset_key(program_id, fee_collector, asset))
}

pub fn is_token_registered<L>(
    program_id: &Pubkey,
    state: &ProgramState<L>,
    token_id: TokenId,
) -> Result<bool, PoolError> {
    token_exists(program_id, &state.accounts, token_id)
}

pub fn get_registry_len<L>(program_id: &Pubkey, state: &ProgramState<L>) -> Result<u64, PoolError> {
    registry_len(program_id, &state.accounts)
}

pub fn get_registry_token_at<L>(
    program_id: &Pubkey,
    state: &ProgramState<L>,
    index: u64,
) -> Result<Option<TokenId>, PoolError> {
    registry_token_at(program_id, &state.accounts, index)
}

// ================================================================================================
// QUOTES
// ================================================================================================

/// Net amount of `token_out` a sell would pay at `height`, with the fee
/// schedule currently in force.
///
/// # Errors
/// * `PoolDoesNotExist` - if no LBP pool exists for the pair
/// * `SaleIsNotRunning` - if the sale is not open at `height`
pub fn quote_sell<L: BalanceLedger>(
    program_id: &Pubkey,
    state: &ProgramState<L>,
    height: u64,
    token_in: TokenId,
    token_out: TokenId,
    amount_in: u64,
) -> Result<u64, PoolError> {
    let pool_key = get_pool_key(program_id, token_in, token_out)?;
    let pool: LbpPoolState = state
        .accounts
        .load(&pool_key)?
        .ok_or(PoolError::PoolDoesNotExist)?;

    if !is_pool_running(&pool, height) {
        return Err(PoolError::SaleIsNotRunning);
    }

    let settlement = compute_sell_settlement(
        program_id, state, &pool_key, &pool, token_in, token_out, amount_in, height,
    )?;
    Ok(settlement.amount_out)
}

/// Unweighted constant-product input for `amount_out`, from current reserves.
pub fn quote_amount_in<L: BalanceLedger>(
    program_id: &Pubkey,
    state: &ProgramState<L>,
    token_in: TokenId,
    token_out: TokenId,
    amount_out: u64,
) -> Result<u64, PoolError> {
    let pool_key = get_pool_key(program_id, token_in, token_out)?;
    let pool: LbpPoolState = state
        .accounts
        .load(&pool_key)?
        .ok_or(PoolError::PoolDoesNotExist)?;

    calculate_amount_in(&state.ledger, &pool_key, &pool, token_in, token_out, amount_out)
}
