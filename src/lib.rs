//! # Liquidity Bootstrapping Pool Program
//!
//! State-transition logic of a liquidity bootstrapping pool (LBP) AMM. A pool
//! creator sells an asset against an accumulating asset over a fixed window
//! of block heights while the weights of the two assets move linearly, so the
//! price decays predictably over the sale.
//!
//! ## Modules
//! - [`utils::derivation`] - canonical pairs, pool addresses and liquidity token ids
//! - [`state`] - pool records, fee tracking and the shared token registry
//! - [`processors`] - pool creation, pricing, sells, fees, migration and the XYK peer
//! - [`ledger`] - balance ledger trait and its in-memory implementation
//! - [`runtime`] - atomic transaction execution with receipts
//! - [`client_sdk`] - off-line instruction building and address derivation
//!
//! Every instruction arrives as borsh-encoded [`LbpInstruction`] data and is
//! dispatched by [`process_instruction`].

use borsh::BorshDeserialize;
use solana_program::msg;

pub mod client_sdk;
pub mod constants;
pub mod error;
pub mod ledger;
pub mod processors;
pub mod runtime;
pub mod state;
pub mod types;
pub mod utils;

pub use constants::*;
pub use error::PoolError;
pub use ledger::{BalanceLedger, InMemoryLedger};
pub use runtime::{
    InstructionContext, ProgramState, Runtime, RuntimeConfig, TransactionReceipt,
    TransactionStatus,
};
pub use types::*;

solana_program::declare_id!("FmJGQQ8unZLFuEQ2qGtU8KEFdJEzwF2RvCjM2VXAXhFr");

/// Decodes `instruction_data` and dispatches it to its processor.
///
/// # Errors
/// * `InvalidInstruction` - if the data is not a valid `LbpInstruction`
/// * any error of the dispatched processor
pub fn process_instruction<L: BalanceLedger>(
    ctx: &mut InstructionContext<L>,
    instruction_data: &[u8],
) -> Result<(), PoolError> {
    let instruction = LbpInstruction::try_from_slice(instruction_data).map_err(|e| {
        msg!("❌ Failed to decode instruction: {:?}", e);
        PoolError::InvalidInstruction
    })?;

    msg!(
        "📥 Instruction from {} at height {}",
        ctx.signer,
        ctx.block_height
    );

    match instruction {
        LbpInstruction::CreatePool(params) => processors::process_create_pool(ctx, &params),
        LbpInstruction::Sell {
            token_in,
            token_out,
            amount_in,
            min_amount_out,
        } => processors::process_sell(ctx, token_in, token_out, amount_in, min_amount_out),
        LbpInstruction::MigratePool { token_a, token_b } => {
            processors::process_migrate_pool(ctx, token_a, token_b)
        }
        LbpInstruction::UpdatePoolData(params) => processors::process_update_pool_data(ctx, &params),
        LbpInstruction::AddLiquidity {
            token_a,
            amount_a,
            token_b,
            amount_b,
        } => processors::process_add_liquidity(ctx, token_a, amount_a, token_b, amount_b),
    }
}
