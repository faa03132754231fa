//! Pool Management Processors
//!
//! Owner-only operations on an existing LBP pool: reconfiguring it before the
//! sale starts and topping up its reserves.

use solana_program::{msg, pubkey::Pubkey};

use crate::{
    error::PoolError,
    ledger::BalanceLedger,
    runtime::InstructionContext,
    state::{FeeCollectedState, LbpPoolState},
    types::{TokenId, UpdatePoolParams},
    utils::{
        derivation::{canonicalize, derive_fee_collector_asset_key, derive_pool_key, PoolDomain},
        validation::{validate_owner, validate_pool_data},
    },
};

fn load_pool<L>(
    ctx: &InstructionContext<L>,
    token_a: TokenId,
    token_b: TokenId,
) -> Result<(Pubkey, LbpPoolState), PoolError> {
    let pair = canonicalize(token_a, token_b)?;
    let pool_key = derive_pool_key(ctx.program_id, &pair, PoolDomain::Lbp);
    let pool = ctx
        .state
        .accounts
        .load(&pool_key)?
        .ok_or(PoolError::PoolDoesNotExist)?;
    Ok((pool_key, pool))
}

/// Applies the provided changes to a pool whose sale has not started.
///
/// The updated record is validated with the same rules as creation. A new
/// fee collector takes over the (collector, accumulating asset) tracking
/// entry, including its cumulative total.
///
/// # Errors
/// * `NotOwner` - if the signer does not own the pool
/// * `SaleStarted` - if the current height has reached `start`
/// * `NothingToUpdate` - if no field is set
/// * `FeeCollectorAssetInUse` - if the new collector already tracks the asset
pub fn process_update_pool_data<L: BalanceLedger>(
    ctx: &mut InstructionContext<L>,
    params: &UpdatePoolParams,
) -> Result<(), PoolError> {
    msg!(
        "🛠️ Processing UpdatePoolData: {} / {}",
        params.token_a,
        params.token_b
    );

    let (pool_key, mut pool) = load_pool(ctx, params.token_a, params.token_b)?;
    validate_owner(&pool, &ctx.signer)?;

    if pool.has_started(ctx.block_height) {
        msg!("❌ Sale started at {}; pool can no longer be updated", pool.start);
        return Err(PoolError::SaleStarted);
    }
    if !params.has_changes() {
        return Err(PoolError::NothingToUpdate);
    }

    let previous_collector = pool.fee_collector;

    pool.owner = params.owner.unwrap_or(pool.owner);
    pool.start = params.start.unwrap_or(pool.start);
    pool.end = params.end.unwrap_or(pool.end);
    pool.initial_weight = params.initial_weight.unwrap_or(pool.initial_weight);
    pool.final_weight = params.final_weight.unwrap_or(pool.final_weight);
    pool.fee = params.fee.unwrap_or(pool.fee);
    pool.fee_collector = params.fee_collector.unwrap_or(pool.fee_collector);
    pool.repay_target = params.repay_target.unwrap_or(pool.repay_target);

    validate_pool_data(&pool, ctx.block_height)?;

    if pool.fee_collector != previous_collector {
        let asset = pool.assets.accumulating;
        let old_key = derive_fee_collector_asset_key(ctx.program_id, &previous_collector, asset);
        let new_key = derive_fee_collector_asset_key(ctx.program_id, &pool.fee_collector, asset);

        if ctx.state.accounts.contains(&new_key) {
            msg!(
                "❌ Fee collector {} already collects token {}",
                pool.fee_collector,
                asset
            );
            return Err(PoolError::FeeCollectorAssetInUse);
        }

        let collected = ctx
            .state
            .accounts
            .load::<FeeCollectedState>(&old_key)?
            .map(|entry| entry.total_collected)
            .unwrap_or(0);
        ctx.state.accounts.remove(&old_key);
        ctx.state.accounts.store(
            &new_key,
            &FeeCollectedState {
                fee_collector: pool.fee_collector,
                asset,
                total_collected: collected,
            },
        )?;
        msg!(
            "🔀 Fee collector moved from {} to {}",
            previous_collector,
            pool.fee_collector
        );
    }

    ctx.state.accounts.store(&pool_key, &pool)?;
    msg!("✅ Pool {} updated", pool_key);
    Ok(())
}

/// Transfers additional reserves from the owner into the pool.
///
/// # Errors
/// * `NotOwner` - if the signer does not own the pool
/// * `CannotAddZeroLiquidity` - if both amounts are zero
/// * `PoolEnded` - if the sale window has closed
pub fn process_add_liquidity<L: BalanceLedger>(
    ctx: &mut InstructionContext<L>,
    token_a: TokenId,
    amount_a: u64,
    token_b: TokenId,
    amount_b: u64,
) -> Result<(), PoolError> {
    msg!(
        "💧 Processing AddLiquidity: {} of {}, {} of {}",
        amount_a,
        token_a,
        amount_b,
        token_b
    );

    let (pool_key, pool) = load_pool(ctx, token_a, token_b)?;
    validate_owner(&pool, &ctx.signer)?;

    if amount_a == 0 && amount_b == 0 {
        return Err(PoolError::CannotAddZeroLiquidity);
    }
    if pool.has_ended(ctx.block_height) {
        msg!("❌ Pool ended at {}", pool.end);
        return Err(PoolError::PoolEnded);
    }

    let ledger = &mut ctx.state.ledger;
    ledger.transfer(token_a, &ctx.signer, &pool_key, amount_a)?;
    ledger.transfer(token_b, &ctx.signer, &pool_key, amount_b)?;

    msg!(
        "✅ Pool {} reserves now {} / {}",
        pool_key,
        ledger.balance_of(token_a, &pool_key),
        ledger.balance_of(token_b, &pool_key)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ledger::InMemoryLedger,
        processors::pool_creation::process_create_pool,
        runtime::ProgramState,
        types::{CreatePoolParams, FeeSchedule},
    };

    struct Fixture {
        program_id: Pubkey,
        owner: Pubkey,
        collector: Pubkey,
        state: ProgramState<InMemoryLedger>,
    }

    impl Fixture {
        fn new() -> Self {
            let program_id = crate::id();
            let owner = Pubkey::new_unique();
            let collector = Pubkey::new_unique();
            let mut state = ProgramState::<InMemoryLedger>::default();
            for token in [TokenId::new(0), TokenId::new(1)] {
                state
                    .ledger
                    .mint_and_increment_supply(token, &owner, 10_000)
                    .unwrap();
            }

            let mut fixture = Self {
                program_id,
                owner,
                collector,
                state,
            };
            let params = CreatePoolParams {
                token_a: TokenId::new(0),
                token_b: TokenId::new(1),
                amount_a: 1_000,
                amount_b: 1_000,
                start: 10,
                end: 20,
                initial_weight: 50_000_000,
                final_weight: 50_000_000,
                fee: FeeSchedule::new(1, 100),
                fee_collector: collector,
                repay_target: 0,
            };
            process_create_pool(&mut fixture.ctx(owner, 0), &params).unwrap();
            fixture
        }

        fn ctx(&mut self, signer: Pubkey, block_height: u64) -> InstructionContext<'_, InMemoryLedger> {
            InstructionContext {
                program_id: &self.program_id,
                signer,
                block_height,
                state: &mut self.state,
            }
        }

        fn pool(&self) -> LbpPoolState {
            let pair = canonicalize(TokenId::new(0), TokenId::new(1)).unwrap();
            let key = derive_pool_key(&self.program_id, &pair, PoolDomain::Lbp);
            self.state.accounts.load(&key).unwrap().unwrap()
        }
    }

    fn update(changes: UpdatePoolParams) -> UpdatePoolParams {
        UpdatePoolParams {
            token_a: TokenId::new(1),
            token_b: TokenId::new(0),
            ..changes
        }
    }

    #[test]
    fn owner_updates_before_start() {
        let mut fixture = Fixture::new();
        let owner = fixture.owner;
        let params = update(UpdatePoolParams {
            end: Some(30),
            repay_target: Some(500),
            ..Default::default()
        });

        process_update_pool_data(&mut fixture.ctx(owner, 5), &params).unwrap();

        let pool = fixture.pool();
        assert_eq!(pool.end, 30);
        assert_eq!(pool.repay_target, 500);
        assert_eq!(pool.start, 10);
    }

    #[test]
    fn update_rules() {
        let mut fixture = Fixture::new();
        let owner = fixture.owner;
        let stranger = Pubkey::new_unique();
        let change = update(UpdatePoolParams {
            end: Some(30),
            ..Default::default()
        });

        assert_eq!(
            process_update_pool_data(&mut fixture.ctx(stranger, 5), &change),
            Err(PoolError::NotOwner)
        );
        assert_eq!(
            process_update_pool_data(&mut fixture.ctx(owner, 10), &change),
            Err(PoolError::SaleStarted)
        );
        assert_eq!(
            process_update_pool_data(&mut fixture.ctx(owner, 5), &update(UpdatePoolParams::default())),
            Err(PoolError::NothingToUpdate)
        );
        assert_eq!(
            process_update_pool_data(
                &mut fixture.ctx(owner, 5),
                &update(UpdatePoolParams {
                    final_weight: Some(1),
                    ..Default::default()
                })
            ),
            Err(PoolError::InvalidWeight)
        );
    }

    #[test]
    fn fee_collector_change_moves_tracking_entry() {
        let mut fixture = Fixture::new();
        let owner = fixture.owner;
        let old_collector = fixture.collector;
        let new_collector = Pubkey::new_unique();

        let params = update(UpdatePoolParams {
            fee_collector: Some(new_collector),
            ..Default::default()
        });
        process_update_pool_data(&mut fixture.ctx(owner, 5), &params).unwrap();

        let program_id = fixture.program_id;
        let old_key = derive_fee_collector_asset_key(&program_id, &old_collector, TokenId::new(0));
        let new_key = derive_fee_collector_asset_key(&program_id, &new_collector, TokenId::new(0));
        assert!(!fixture.state.accounts.contains(&old_key));
        assert!(fixture.state.accounts.contains(&new_key));
        assert_eq!(fixture.pool().fee_collector, new_collector);
    }

    #[test]
    fn add_liquidity_rules() {
        let mut fixture = Fixture::new();
        let owner = fixture.owner;

        assert_eq!(
            process_add_liquidity(&mut fixture.ctx(owner, 5), TokenId::new(0), 0, TokenId::new(1), 0),
            Err(PoolError::CannotAddZeroLiquidity)
        );
        assert_eq!(
            process_add_liquidity(
                &mut fixture.ctx(Pubkey::new_unique(), 5),
                TokenId::new(0),
                1,
                TokenId::new(1),
                1
            ),
            Err(PoolError::NotOwner)
        );
        assert_eq!(
            process_add_liquidity(&mut fixture.ctx(owner, 21), TokenId::new(0), 1, TokenId::new(1), 1),
            Err(PoolError::PoolEnded)
        );

        process_add_liquidity(&mut fixture.ctx(owner, 15), TokenId::new(1), 250, TokenId::new(0), 0)
            .unwrap();
        let pair = canonicalize(TokenId::new(0), TokenId::new(1)).unwrap();
        let key = derive_pool_key(&fixture.program_id, &pair, PoolDomain::Lbp);
        assert_eq!(fixture.state.ledger.balance_of(TokenId::new(1), &key), 1_250);
        assert_eq!(fixture.state.ledger.balance_of(TokenId::new(0), &key), 1_000);
    }
}
