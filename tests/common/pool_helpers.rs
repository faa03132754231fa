/*
MIT License

Copyright (c) 2024 Davinci

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! # Pool Helpers
//!
//! Pool parameters and instruction shortcuts used across test modules.

use lbp_amm::{CreatePoolParams, FeeSchedule, LbpInstruction, PoolError, TokenId};
use solana_program::pubkey::Pubkey;

use super::setup::{TestEnvironment, TOKEN_A, TOKEN_B};

/// Sale window of the default pool
pub const POOL_START: u64 = 10;
pub const POOL_END: u64 = 110;
pub const POOL_LIQUIDITY: u64 = 1_000_000;

/// Parameters of the reference scenario: 1_000_000 of each token, weights
/// 80% → 20%, fee 2/10, repay target 1000.
pub fn default_pool_params(fee_collector: Pubkey) -> CreatePoolParams {
    CreatePoolParams {
        token_a: TOKEN_A,
        token_b: TOKEN_B,
        amount_a: POOL_LIQUIDITY,
        amount_b: POOL_LIQUIDITY,
        start: POOL_START,
        end: POOL_END,
        initial_weight: 80_000_000,
        final_weight: 20_000_000,
        fee: FeeSchedule::new(2, 10),
        fee_collector,
        repay_target: 1_000,
    }
}

pub fn create_pool(env: &mut TestEnvironment, params: CreatePoolParams) -> Result<(), PoolError> {
    let owner = env.owner;
    env.runtime
        .execute(&owner, &LbpInstruction::CreatePool(params))
}

/// Creates the reference pool owned by `env.owner`.
pub fn create_default_pool(env: &mut TestEnvironment) -> Result<(), PoolError> {
    let params = default_pool_params(env.fee_collector);
    create_pool(env, params)
}

pub fn sell(
    env: &mut TestEnvironment,
    signer: Pubkey,
    token_in: TokenId,
    token_out: TokenId,
    amount_in: u64,
    min_amount_out: u64,
) -> Result<(), PoolError> {
    env.runtime.execute(
        &signer,
        &LbpInstruction::Sell {
            token_in,
            token_out,
            amount_in,
            min_amount_out,
        },
    )
}

pub fn migrate(env: &mut TestEnvironment, signer: Pubkey) -> Result<(), PoolError> {
    env.runtime.execute(
        &signer,
        &LbpInstruction::MigratePool {
            token_a: TOKEN_A,
            token_b: TOKEN_B,
        },
    )
}

/// Ledger reserves of the default pool as (accumulating, sold).
pub fn pool_reserves(env: &TestEnvironment) -> (u64, u64) {
    env.runtime
        .pool_reserves(TOKEN_A, TOKEN_B)
        .expect("distinct tokens")
}
