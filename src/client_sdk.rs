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

//! # Liquidity Bootstrapping Pool - Client SDK
//!
//! This module provides a high-level client SDK for interacting with the LBP program.
//! It builds borsh instruction data and derives pool addresses and liquidity
//! token ids off-line, without touching program state.
//!
//! ## Features
//! - Address derivation for LBP and XYK pools (order-independent)
//! - Liquidity token id derivation for both pool types
//! - Instruction building for every LBP instruction
//! - Client-side validation of pool configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lbp_amm::client_sdk::LbpClient;
//! use lbp_amm::{CreatePoolParams, FeeSchedule, TokenId};
//! use solana_program::pubkey::Pubkey;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = LbpClient::new(lbp_amm::id());
//!
//! let addresses = client.derive_pool_addresses(TokenId::new(0), TokenId::new(1))?;
//!
//! let data = client.create_pool_instruction(&CreatePoolParams {
//!     token_a: TokenId::new(0),
//!     token_b: TokenId::new(1),
//!     amount_a: 1_000_000,
//!     amount_b: 1_000_000,
//!     start: 10,
//!     end: 110,
//!     initial_weight: 80_000_000,
//!     final_weight: 20_000_000,
//!     fee: FeeSchedule::new(2, 1_000),
//!     fee_collector: Pubkey::new_unique(),
//!     repay_target: 1_000,
//! })?;
//! # let _ = (addresses, data);
//! # Ok(())
//! # }
//! ```

use borsh::BorshSerialize;
use solana_program::pubkey::Pubkey;

use crate::{
    error::PoolError,
    types::{CreatePoolParams, LbpInstruction, TokenId, UpdatePoolParams},
    utils::{
        derivation::{
            canonicalize, derive_fee_collector_asset_key, derive_liquidity_token_id,
            derive_pool_key, find_pool_key_with_bump, PoolDomain,
        },
        validation::{validate_fee, validate_weight},
    },
};

/// Errors that can occur when using the LBP client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LbpClientError {
    /// Configuration rejected before reaching the program
    InvalidConfig(PoolError),
    /// Error during instruction serialization
    SerializationError,
}

impl From<std::io::Error> for LbpClientError {
    fn from(_error: std::io::Error) -> Self {
        Self::SerializationError
    }
}

impl From<PoolError> for LbpClientError {
    fn from(error: PoolError) -> Self {
        Self::InvalidConfig(error)
    }
}

impl std::fmt::Display for LbpClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LbpClientError::InvalidConfig(e) => write!(f, "Invalid pool configuration: {}", e),
            LbpClientError::SerializationError => write!(f, "Failed to serialize instruction data"),
        }
    }
}

impl std::error::Error for LbpClientError {}

/// Derived addresses for a token pair
///
/// The same value is returned whichever order the tokens are given in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolAddresses {
    /// Lower token id of the pair
    pub token_a: TokenId,
    /// Higher token id of the pair
    pub token_b: TokenId,
    /// LBP pool record and reserve account
    pub lbp_pool: Pubkey,
    /// LBP pool bump seed
    pub lbp_pool_bump: u8,
    /// XYK pool the LBP migrates into
    pub xyk_pool: Pubkey,
    pub lbp_liquidity_token: TokenId,
    pub xyk_liquidity_token: TokenId,
}

/// High-level client for the LBP program
pub struct LbpClient {
    /// The program ID of the deployed LBP program
    program_id: Pubkey,
}

impl LbpClient {
    pub fn new(program_id: Pubkey) -> Self {
        Self { program_id }
    }

    pub fn program_id(&self) -> Pubkey {
        self.program_id
    }

    /// Derives the pool addresses and liquidity token ids of a pair.
    ///
    /// # Errors
    /// * `InvalidConfig(TokensNotDistinct)` - if both tokens are the same
    pub fn derive_pool_addresses(
        &self,
        token_a: TokenId,
        token_b: TokenId,
    ) -> Result<PoolAddresses, LbpClientError> {
        let pair = canonicalize(token_a, token_b)?;
        let (lbp_pool, lbp_pool_bump) =
            find_pool_key_with_bump(&self.program_id, &pair, PoolDomain::Lbp);

        Ok(PoolAddresses {
            token_a: pair.first(),
            token_b: pair.second(),
            lbp_pool,
            lbp_pool_bump,
            xyk_pool: derive_pool_key(&self.program_id, &pair, PoolDomain::Xyk),
            lbp_liquidity_token: derive_liquidity_token_id(&pair, PoolDomain::Lbp),
            xyk_liquidity_token: derive_liquidity_token_id(&pair, PoolDomain::Xyk),
        })
    }

    /// Address tracking the fees `fee_collector` has collected in `asset`.
    pub fn derive_fee_collector_address(&self, fee_collector: &Pubkey, asset: TokenId) -> Pubkey {
        derive_fee_collector_asset_key(&self.program_id, fee_collector, asset)
    }

    /// Builds `CreatePool` instruction data.
    ///
    /// Checks everything that does not depend on chain state: distinct
    /// tokens, ordered window, weights and fee. The block-height and
    /// uniqueness checks happen in the program.
    pub fn create_pool_instruction(&self, params: &CreatePoolParams) -> Result<Vec<u8>, LbpClientError> {
        canonicalize(params.token_a, params.token_b)?;
        if params.start >= params.end {
            return Err(PoolError::InvalidBlockRange.into());
        }
        validate_weight(params.initial_weight, "Initial")?;
        validate_weight(params.final_weight, "Final")?;
        validate_fee(&params.fee)?;

        Ok(LbpInstruction::CreatePool(params.clone()).try_to_vec()?)
    }

    /// Builds `Sell` instruction data.
    pub fn sell_instruction(
        &self,
        token_in: TokenId,
        token_out: TokenId,
        amount_in: u64,
        min_amount_out: u64,
    ) -> Result<Vec<u8>, LbpClientError> {
        if amount_in == 0 {
            return Err(PoolError::ZeroAmount.into());
        }
        Ok(LbpInstruction::Sell {
            token_in,
            token_out,
            amount_in,
            min_amount_out,
        }
        .try_to_vec()?)
    }

    pub fn migrate_pool_instruction(
        &self,
        token_a: TokenId,
        token_b: TokenId,
    ) -> Result<Vec<u8>, LbpClientError> {
        Ok(LbpInstruction::MigratePool { token_a, token_b }.try_to_vec()?)
    }

    pub fn update_pool_instruction(&self, params: &UpdatePoolParams) -> Result<Vec<u8>, LbpClientError> {
        if !params.has_changes() {
            return Err(PoolError::NothingToUpdate.into());
        }
        Ok(LbpInstruction::UpdatePoolData(params.clone()).try_to_vec()?)
    }

    pub fn add_liquidity_instruction(
        &self,
        token_a: TokenId,
        amount_a: u64,
        token_b: TokenId,
        amount_b: u64,
    ) -> Result<Vec<u8>, LbpClientError> {
        if amount_a == 0 && amount_b == 0 {
            return Err(PoolError::CannotAddZeroLiquidity.into());
        }
        Ok(LbpInstruction::AddLiquidity {
            token_a,
            amount_a,
            token_b,
            amount_b,
        }
        .try_to_vec()?)
    }
}
