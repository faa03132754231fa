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

//! # Common Test Utilities
//!
//! This module provides shared utilities and helpers for integration tests
//! across all test modules. It includes:
//!
//! - Runtime setup with funded accounts
//! - Pool creation and trading helpers
//! - Balance and receipt inspection helpers

pub mod pool_helpers;
pub mod setup;

// Re-export commonly used types and functions
#[allow(unused_imports)]
pub use pool_helpers::*;
#[allow(unused_imports)]
pub use setup::*;

#[allow(unused_imports)]
pub use borsh::{BorshDeserialize, BorshSerialize};
#[allow(unused_imports)]
pub use lbp_amm::{
    BalanceLedger, CreatePoolParams, FeeSchedule, InMemoryLedger, LbpInstruction, PoolError,
    Runtime, RuntimeConfig, TokenId, UpdatePoolParams, MAX_SALE_DURATION, MAX_WEIGHT,
};
#[allow(unused_imports)]
pub use solana_program::pubkey::Pubkey;

/// Result type shared by integration tests
pub type TestResult = Result<(), PoolError>;
