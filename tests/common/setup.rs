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

//! # Test Environment Setup Utilities
//!
//! Builds a runtime with genesis balances for the pool owner and a trader.

use lbp_amm::{BalanceLedger, Runtime, RuntimeConfig, TokenId};
use solana_program::pubkey::Pubkey;

/// Accumulating asset of the default pool
pub const TOKEN_A: TokenId = TokenId::new(0);
/// Sold asset of the default pool
pub const TOKEN_B: TokenId = TokenId::new(1);
/// Third asset for multi-pool tests
pub const TOKEN_C: TokenId = TokenId::new(2);

/// Genesis balance of every funded account in every test token
pub const INITIAL_BALANCE: u64 = 100_000_000;

/// Complete test context
pub struct TestEnvironment {
    pub runtime: Runtime,
    /// Creates pools
    pub owner: Pubkey,
    /// Trades against pools
    pub trader: Pubkey,
    pub fee_collector: Pubkey,
}

impl TestEnvironment {
    pub fn balance(&self, token: TokenId, account: &Pubkey) -> u64 {
        self.runtime.balance_of(token, account)
    }

    /// Moves the runtime to `height`.
    pub fn warp_to(&mut self, height: u64) {
        self.runtime
            .set_block_height(height)
            .expect("test heights only move forward");
    }
}

/// Start a test environment at height 0 with funded owner and trader.
pub fn start_test_environment() -> TestEnvironment {
    start_test_environment_at(0)
}

pub fn start_test_environment_at(genesis_height: u64) -> TestEnvironment {
    let mut runtime: Runtime = Runtime::new(RuntimeConfig {
        genesis_height,
        ..Default::default()
    });

    let owner = Pubkey::new_unique();
    let trader = Pubkey::new_unique();
    for account in [&owner, &trader] {
        for token in [TOKEN_A, TOKEN_B, TOKEN_C] {
            runtime
                .ledger_mut()
                .mint_and_increment_supply(token, account, INITIAL_BALANCE)
                .expect("genesis mint");
        }
    }

    TestEnvironment {
        runtime,
        owner,
        trader,
        fee_collector: Pubkey::new_unique(),
    }
}
