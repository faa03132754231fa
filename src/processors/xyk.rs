//! XYK Peer Pool
//!
//! Minimal constant-product pool used as the migration target of an ended
//! LBP pool: records keyed by the XYK pool address, with create and deposit.
//! The XYK pool's swap math is not part of this program.

use solana_program::{msg, pubkey::Pubkey};

use crate::{
    error::PoolError,
    ledger::BalanceLedger,
    runtime::ProgramState,
    state::{TokenRegistry, XykPoolState},
    types::TokenId,
    utils::derivation::{canonicalize, derive_liquidity_token_id, derive_pool_key, PoolDomain},
};

/// Token pair and amounts supplied to an XYK pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XykLiquidity {
    pub token_a: TokenId,
    pub amount_a: u64,
    pub token_b: TokenId,
    pub amount_b: u64,
}

/// Creates the XYK pool for the pair, funding it from `provider` and minting
/// `max(amount_a, amount_b)` shares to `share_recipient`.
///
/// # Errors
/// * `PoolAlreadyExists` - if an XYK pool exists for the pair
/// * `ZeroAmount` - if either amount is zero
/// * `LiquidityTokenAlreadyRegistered` - if the XYK share token id is taken
pub fn create_xyk_pool<L: BalanceLedger>(
    program_id: &Pubkey,
    state: &mut ProgramState<L>,
    provider: &Pubkey,
    share_recipient: &Pubkey,
    liquidity: XykLiquidity,
) -> Result<u64, PoolError> {
    let pair = canonicalize(liquidity.token_a, liquidity.token_b)?;
    let pool_key = derive_pool_key(program_id, &pair, PoolDomain::Xyk);

    msg!("🏗️ Creating XYK pool {} for {} / {}", pool_key, pair.first(), pair.second());

    if state.accounts.contains(&pool_key) {
        msg!("❌ XYK pool {} already exists", pool_key);
        return Err(PoolError::PoolAlreadyExists);
    }
    if liquidity.amount_a == 0 || liquidity.amount_b == 0 {
        msg!("❌ XYK pool needs both assets to be funded");
        return Err(PoolError::ZeroAmount);
    }

    state
        .ledger
        .transfer(liquidity.token_a, provider, &pool_key, liquidity.amount_a)?;
    state
        .ledger
        .transfer(liquidity.token_b, provider, &pool_key, liquidity.amount_b)?;

    let liquidity_token = derive_liquidity_token_id(&pair, PoolDomain::Xyk);
    TokenRegistry::new(program_id, &mut state.accounts).register(liquidity_token)?;

    let shares = liquidity.amount_a.max(liquidity.amount_b);
    state
        .ledger
        .mint_and_increment_supply(liquidity_token, share_recipient, shares)?;

    state.accounts.store(
        &pool_key,
        &XykPoolState {
            assets: pair,
            liquidity_token,
            total_shares: shares,
        },
    )?;

    msg!("✅ XYK pool created: {} shares of {} to {}", shares, liquidity_token, share_recipient);
    Ok(shares)
}

/// Adds liquidity to an existing XYK pool.
///
/// Shares minted are `min(amount_a * S / reserve_a, amount_b * S / reserve_b)`
/// where `S` is the current share supply; both amounts are transferred in
/// full and any excess over the pool ratio stays in the pool.
///
/// # Errors
/// * `PoolDoesNotExist` - if there is no XYK pool for the pair
/// * `PoolEmpty` - if a reserve is zero
pub fn deposit_xyk_liquidity<L: BalanceLedger>(
    program_id: &Pubkey,
    state: &mut ProgramState<L>,
    provider: &Pubkey,
    share_recipient: &Pubkey,
    liquidity: XykLiquidity,
) -> Result<u64, PoolError> {
    let pair = canonicalize(liquidity.token_a, liquidity.token_b)?;
    let pool_key = derive_pool_key(program_id, &pair, PoolDomain::Xyk);

    let mut pool: XykPoolState = state
        .accounts
        .load(&pool_key)?
        .ok_or(PoolError::PoolDoesNotExist)?;

    let reserve_a = state.ledger.balance_of(liquidity.token_a, &pool_key);
    let reserve_b = state.ledger.balance_of(liquidity.token_b, &pool_key);
    if reserve_a == 0 || reserve_b == 0 {
        msg!("❌ XYK pool {} has an empty reserve", pool_key);
        return Err(PoolError::PoolEmpty);
    }

    let supply = u128::from(pool.total_shares);
    let shares_a = u128::from(liquidity.amount_a) * supply / u128::from(reserve_a);
    let shares_b = u128::from(liquidity.amount_b) * supply / u128::from(reserve_b);
    let shares = u64::try_from(shares_a.min(shares_b)).map_err(|_| PoolError::ArithmeticOverflow)?;

    state
        .ledger
        .transfer(liquidity.token_a, provider, &pool_key, liquidity.amount_a)?;
    state
        .ledger
        .transfer(liquidity.token_b, provider, &pool_key, liquidity.amount_b)?;
    state
        .ledger
        .mint_and_increment_supply(pool.liquidity_token, share_recipient, shares)?;

    pool.total_shares = pool
        .total_shares
        .checked_add(shares)
        .ok_or(PoolError::ArithmeticOverflow)?;
    state.accounts.store(&pool_key, &pool)?;

    msg!(
        "✅ Deposited {} / {} into XYK pool {}: {} shares",
        liquidity.amount_a,
        liquidity.amount_b,
        pool_key,
        shares
    );
    Ok(shares)
}
