//! Swap Processors
//!
//! Exact-input sells against a running LBP pool.

use solana_program::{msg, pubkey::Pubkey};

use crate::{
    error::PoolError,
    ledger::BalanceLedger,
    processors::{
        fees::{calculate_fees, record_collected_fee},
        pricing::{calculate_token_out_amount, is_pool_running},
    },
    runtime::{InstructionContext, ProgramState},
    state::LbpPoolState,
    types::TokenId,
    utils::{
        derivation::{canonicalize, derive_pool_key, PoolDomain},
        validation::validate_non_zero_amount,
    },
};

/// Amounts settled by one sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SellSettlement {
    /// Output before fees
    pub calculated_out: u64,
    /// Amount of `token_out` paid to the seller, `calculated_out - fee`
    pub amount_out: u64,
    /// Fee in the accumulating asset
    pub fee: u64,
    /// True when the seller pays the fee on top of `amount_in`, false when
    /// the pool pays it
    pub fee_paid_by_seller: bool,
}

/// Works out the settlement of a sell without touching any state.
///
/// The fee is charged on `amount_in` when `token_in` is the accumulating
/// asset and on the calculated output otherwise. Either way the seller
/// receives the calculated output less the fee. The pool always receives the
/// full `amount_in`.
///
/// # Errors
/// * `InsufficientOutputForFee` - if the fee exceeds the calculated output
#[allow(clippy::too_many_arguments)]
pub fn compute_sell_settlement<L: BalanceLedger>(
    program_id: &Pubkey,
    state: &ProgramState<L>,
    pool_key: &Pubkey,
    pool: &LbpPoolState,
    token_in: TokenId,
    token_out: TokenId,
    amount_in: u64,
    height: u64,
) -> Result<SellSettlement, PoolError> {
    let calculated_out = calculate_token_out_amount(
        &state.ledger,
        pool_key,
        pool,
        token_in,
        token_out,
        amount_in,
        height,
    )?;

    let fee_paid_by_seller = pool.assets.is_accumulating(token_in);
    let fee_base = if fee_paid_by_seller {
        amount_in
    } else {
        calculated_out
    };
    let fee = calculate_fees(program_id, &state.accounts, pool, fee_base)?;
    let amount_out = calculated_out.checked_sub(fee).ok_or_else(|| {
        msg!("❌ Fee {} exceeds calculated output {}", fee, calculated_out);
        PoolError::InsufficientOutputForFee
    })?;

    Ok(SellSettlement {
        calculated_out,
        amount_out,
        fee,
        fee_paid_by_seller,
    })
}

/// Sells an exact `amount_in` of `token_in` to the pool for `token_out`.
///
/// # How It Works
/// 1. **Pool Lookup**: the pool address is derived from the pair in either order
/// 2. **Window Check**: the sale must be running at the current height
/// 3. **Pricing**: gross output from the time-weighted formula
/// 4. **Fees**: charged in the accumulating asset under the schedule in force
/// 5. **Limit Check**: net output must reach `min_amount_out`
/// 6. **Settlement**: fee to the collector, input to the pool, output to the seller
///
/// # Errors
/// * `ZeroAmount` - if `amount_in` is zero
/// * `PoolDoesNotExist` - if no LBP pool exists for the pair
/// * `SaleIsNotRunning` - if the height is outside `[start, end]`
/// * `AmountOutInsufficient` - if the net output is below `min_amount_out`
/// * `InsufficientOutputForFee` - if the fee exceeds the calculated output
/// * `InsufficientBalance` - if the seller cannot pay `amount_in` plus any fee
pub fn process_sell<L: BalanceLedger>(
    ctx: &mut InstructionContext<L>,
    token_in: TokenId,
    token_out: TokenId,
    amount_in: u64,
    min_amount_out: u64,
) -> Result<(), PoolError> {
    msg!(
        "🔄 Processing Sell: {} of token {} for token {}",
        amount_in,
        token_in,
        token_out
    );

    validate_non_zero_amount(amount_in, "Sell")?;

    let pair = canonicalize(token_in, token_out)?;
    let pool_key = derive_pool_key(ctx.program_id, &pair, PoolDomain::Lbp);
    let pool: LbpPoolState = ctx
        .state
        .accounts
        .load(&pool_key)?
        .ok_or_else(|| {
            msg!("❌ No pool for {} / {}", token_in, token_out);
            PoolError::PoolDoesNotExist
        })?;

    if !is_pool_running(&pool, ctx.block_height) {
        msg!(
            "❌ Sale window [{}, {}] is not open at height {}",
            pool.start,
            pool.end,
            ctx.block_height
        );
        return Err(PoolError::SaleIsNotRunning);
    }

    let settlement = compute_sell_settlement(
        ctx.program_id,
        &*ctx.state,
        &pool_key,
        &pool,
        token_in,
        token_out,
        amount_in,
        ctx.block_height,
    )?;

    msg!(
        "📊 Calculated out {}, net {} (fee {} in token {})",
        settlement.calculated_out,
        settlement.amount_out,
        settlement.fee,
        pool.assets.accumulating
    );

    if settlement.amount_out < min_amount_out {
        msg!(
            "❌ Amount out {} below limit {}",
            settlement.amount_out,
            min_amount_out
        );
        return Err(PoolError::AmountOutInsufficient);
    }

    let fee_asset = pool.assets.accumulating;
    let fee_payer = if settlement.fee_paid_by_seller {
        ctx.signer
    } else {
        pool_key
    };

    record_collected_fee(
        ctx.program_id,
        &mut ctx.state.accounts,
        &pool.fee_collector,
        fee_asset,
        settlement.fee,
    )?;

    let ledger = &mut ctx.state.ledger;
    ledger.transfer(token_in, &ctx.signer, &pool_key, amount_in)?;
    ledger.transfer(fee_asset, &fee_payer, &pool.fee_collector, settlement.fee)?;
    ledger.transfer(token_out, &pool_key, &ctx.signer, settlement.amount_out)?;

    msg!("✅ Sell completed: {} → {}", amount_in, settlement.amount_out);
    Ok(())
}
