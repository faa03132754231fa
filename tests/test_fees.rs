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

//! # Fee Tests
//!
//! The boosted repay fee applies until the collector's cumulative fees in
//! the accumulating asset reach the pool's repay target; the configured fee
//! applies from then on.

mod common;

use common::*;

fn pool_with_fee(repay_target: u64) -> Result<TestEnvironment, PoolError> {
    let mut env = start_test_environment();
    let params = CreatePoolParams {
        fee: FeeSchedule::new(1, 100),
        repay_target,
        ..default_pool_params(env.fee_collector)
    };
    create_pool(&mut env, params)?;
    env.warp_to(20);
    Ok(env)
}

/// Two swaps straddle the threshold: the one that starts below the target
/// still pays the repay fee, the next one pays the configured fee.
#[test]
fn test_repay_fee_switches_off_at_target() -> TestResult {
    let mut env = pool_with_fee(1_000)?;
    let trader = env.trader;
    let collector = env.fee_collector;

    // 4000 / 10 * 2 = 800 under the repay fee
    sell(&mut env, trader, TOKEN_A, TOKEN_B, 4_000, 0)?;
    assert_eq!(env.runtime.collected_fees(&collector, TOKEN_A)?, 800);

    // 800 < 1000 before this swap, so the repay fee still applies
    sell(&mut env, trader, TOKEN_A, TOKEN_B, 4_000, 0)?;
    assert_eq!(env.runtime.collected_fees(&collector, TOKEN_A)?, 1_600);

    // 4000 / 100 * 1 = 40 under the configured fee
    sell(&mut env, trader, TOKEN_A, TOKEN_B, 4_000, 0)?;
    assert_eq!(env.runtime.collected_fees(&collector, TOKEN_A)?, 1_640);

    assert_eq!(env.balance(TOKEN_A, &collector), 1_640);
    assert_eq!(env.balance(TOKEN_A, &trader), INITIAL_BALANCE - 12_000 - 1_640);
    Ok(())
}

#[test]
fn test_zero_repay_target_uses_configured_fee() -> TestResult {
    let mut env = pool_with_fee(0)?;
    let trader = env.trader;

    sell(&mut env, trader, TOKEN_A, TOKEN_B, 4_000, 0)?;
    assert_eq!(env.runtime.collected_fees(&env.fee_collector, TOKEN_A)?, 40);
    Ok(())
}

/// Fees taken from the pool on sells of the sold asset count toward the
/// same target.
#[test]
fn test_pool_paid_fees_count_toward_target() -> TestResult {
    let mut env = pool_with_fee(50)?;
    let trader = env.trader;
    let collector = env.fee_collector;
    let (reserve_a, _) = pool_reserves(&env);

    // raw 999, gross 999 * 26 / 74 = 351, repay fee 351 / 10 * 2 = 70
    sell(&mut env, trader, TOKEN_B, TOKEN_A, 1_000, 0)?;
    assert_eq!(env.balance(TOKEN_A, &trader), INITIAL_BALANCE + 281);
    assert_eq!(env.balance(TOKEN_A, &collector), 70);
    assert_eq!(pool_reserves(&env).0, reserve_a - 351);

    // target reached: 4000 / 100 = 40
    sell(&mut env, trader, TOKEN_A, TOKEN_B, 4_000, 0)?;
    assert_eq!(env.runtime.collected_fees(&collector, TOKEN_A)?, 110);
    Ok(())
}

/// Fees below one denominator unit round down to nothing.
#[test]
fn test_small_trade_pays_no_fee() -> TestResult {
    let mut env = pool_with_fee(0)?;
    let trader = env.trader;

    sell(&mut env, trader, TOKEN_A, TOKEN_B, 99, 0)?;
    assert_eq!(env.runtime.collected_fees(&env.fee_collector, TOKEN_A)?, 0);
    assert_eq!(env.balance(TOKEN_A, &env.fee_collector), 0);
    Ok(())
}
