//! Pool Creation Processors
//!
//! This module contains the processor that creates and funds a liquidity
//! bootstrapping pool.

use solana_program::msg;

use crate::{
    error::PoolError,
    ledger::BalanceLedger,
    runtime::InstructionContext,
    state::{FeeCollectedState, LbpPoolState, TokenRegistry},
    types::{AssetPair, CreatePoolParams},
    utils::{
        derivation::{
            canonicalize, derive_fee_collector_asset_key, derive_liquidity_token_id,
            derive_pool_key, PoolDomain,
        },
        validation::validate_pool_data,
    },
};

/// Creates an LBP pool for `(token_a, token_b)` owned by the signer.
///
/// `token_a` becomes the accumulating asset (the asset fees are charged in)
/// and `token_b` the sold asset.
///
/// # How It Works
/// 1. **Canonicalize** the pair; identical tokens are rejected
/// 2. **Pool Key**: derive the LBP pool address; it must be unused
/// 3. **Fee Tracking Key**: derive the (fee collector, token_a) address; it must be unused
/// 4. **Validate** the sale window, weights and fee against the current height
/// 5. **Fund** the pool address with both amounts from the signer
/// 6. **Register** the LBP liquidity token and mint `max(amount_a, amount_b)` to the signer
/// 7. **Store** the pool record and a zeroed fee tracking entry
///
/// The whole sequence runs against the transaction's staged state, so any
/// failure discards every step before it.
///
/// # Errors
/// * `TokensNotDistinct`, `PoolAlreadyExists`, `FeeCollectorAssetInUse`
/// * `InvalidBlockRange`, `MaxSaleDurationExceeded`, `InvalidWeight`, `InvalidFee`
/// * `InsufficientBalance` - if the signer cannot fund the pool
/// * `LiquidityTokenAlreadyRegistered` - if the LBP token id is already known
pub fn process_create_pool<L: BalanceLedger>(
    ctx: &mut InstructionContext<L>,
    params: &CreatePoolParams,
) -> Result<(), PoolError> {
    msg!("🏗️ Processing CreatePool: {} / {}", params.token_a, params.token_b);

    let pair = canonicalize(params.token_a, params.token_b)?;
    let pool_key = derive_pool_key(ctx.program_id, &pair, PoolDomain::Lbp);

    if ctx.state.accounts.contains(&pool_key) {
        msg!("❌ Pool {} already exists", pool_key);
        return Err(PoolError::PoolAlreadyExists);
    }

    let fee_collector_key =
        derive_fee_collector_asset_key(ctx.program_id, &params.fee_collector, params.token_a);
    if ctx.state.accounts.contains(&fee_collector_key) {
        msg!(
            "❌ Fee collector {} already collects token {}",
            params.fee_collector,
            params.token_a
        );
        return Err(PoolError::FeeCollectorAssetInUse);
    }

    let liquidity_token = derive_liquidity_token_id(&pair, PoolDomain::Lbp);
    let pool = LbpPoolState {
        owner: ctx.signer,
        start: params.start,
        end: params.end,
        assets: AssetPair::new(params.token_a, params.token_b),
        initial_weight: params.initial_weight,
        final_weight: params.final_weight,
        fee: params.fee,
        fee_collector: params.fee_collector,
        repay_target: params.repay_target,
        liquidity_token,
    };
    validate_pool_data(&pool, ctx.block_height)?;
    msg!("✅ Pool parameters validated");

    ctx.state
        .ledger
        .transfer(params.token_a, &ctx.signer, &pool_key, params.amount_a)?;
    ctx.state
        .ledger
        .transfer(params.token_b, &ctx.signer, &pool_key, params.amount_b)?;

    let initial_supply = params.amount_a.max(params.amount_b);
    TokenRegistry::new(ctx.program_id, &mut ctx.state.accounts).register(liquidity_token)?;
    ctx.state
        .ledger
        .mint_and_increment_supply(liquidity_token, &ctx.signer, initial_supply)?;

    ctx.state.accounts.store(&pool_key, &pool)?;
    ctx.state.accounts.store(
        &fee_collector_key,
        &FeeCollectedState {
            fee_collector: params.fee_collector,
            asset: params.token_a,
            total_collected: 0,
        },
    )?;

    msg!("🎯 POOL_ID: {}", pool_key);
    msg!("✅ Pool created successfully");
    msg!("Pool Details:");
    msg!("  Accumulating: {} ({})", params.token_a, params.amount_a);
    msg!("  Sold: {} ({})", params.token_b, params.amount_b);
    msg!("  Window: {} → {}", params.start, params.end);
    msg!("  Weights: {} → {}", params.initial_weight, params.final_weight);
    msg!("  Liquidity Token: {} (supply {})", liquidity_token, initial_supply);

    Ok(())
}
