//! Migration Processors
//!
//! Moves the remaining reserves of an ended LBP pool into the permanent XYK
//! pool for the same pair. The LBP record stays in the store afterwards; with
//! both reserves at zero it is inert.

use solana_program::msg;

use crate::{
    error::PoolError,
    ledger::BalanceLedger,
    processors::xyk::{create_xyk_pool, deposit_xyk_liquidity, XykLiquidity},
    runtime::InstructionContext,
    state::LbpPoolState,
    types::TokenId,
    utils::derivation::{canonicalize, derive_pool_key, PoolDomain},
};

/// Migrates an ended LBP pool into its XYK pool. Any signer may call this;
/// the XYK shares go to the LBP pool owner.
///
/// # Errors
/// * `PoolDoesNotExist` - if no LBP pool exists for the pair
/// * `PoolNotEnded` - unless the current height is past `end`
/// * `PoolEmpty` - if either reserve is zero, which includes a second migration
pub fn process_migrate_pool<L: BalanceLedger>(
    ctx: &mut InstructionContext<L>,
    token_a: TokenId,
    token_b: TokenId,
) -> Result<(), PoolError> {
    msg!("🚚 Processing MigratePool: {} / {}", token_a, token_b);

    let pair = canonicalize(token_a, token_b)?;
    let pool_key = derive_pool_key(ctx.program_id, &pair, PoolDomain::Lbp);
    let pool: LbpPoolState = ctx
        .state
        .accounts
        .load(&pool_key)?
        .ok_or(PoolError::PoolDoesNotExist)?;

    if !pool.has_ended(ctx.block_height) {
        msg!(
            "❌ Pool ends at {}, current height {}",
            pool.end,
            ctx.block_height
        );
        return Err(PoolError::PoolNotEnded);
    }

    let accumulating = pool.assets.accumulating;
    let sold = pool.assets.sold;
    let reserve_accumulating = ctx.state.ledger.balance_of(accumulating, &pool_key);
    let reserve_sold = ctx.state.ledger.balance_of(sold, &pool_key);

    if reserve_accumulating == 0 || reserve_sold == 0 {
        msg!(
            "❌ Pool {} is empty: {} / {}",
            pool_key,
            reserve_accumulating,
            reserve_sold
        );
        return Err(PoolError::PoolEmpty);
    }

    let liquidity = XykLiquidity {
        token_a: accumulating,
        amount_a: reserve_accumulating,
        token_b: sold,
        amount_b: reserve_sold,
    };
    let xyk_key = derive_pool_key(ctx.program_id, &pair, PoolDomain::Xyk);

    let shares = if ctx.state.accounts.contains(&xyk_key) {
        msg!("🔁 Depositing into existing XYK pool {}", xyk_key);
        deposit_xyk_liquidity(ctx.program_id, &mut *ctx.state, &pool_key, &pool.owner, liquidity)?
    } else {
        create_xyk_pool(ctx.program_id, &mut *ctx.state, &pool_key, &pool.owner, liquidity)?
    };

    msg!(
        "✅ Migrated {} / {} from {} to {}; {} shares to {}",
        reserve_accumulating,
        reserve_sold,
        pool_key,
        xyk_key,
        shares,
        pool.owner
    );
    Ok(())
}
