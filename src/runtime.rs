//! Execution Runtime
//!
//! Deterministic stand-in for the replicated ledger runtime. It owns the
//! committed program state and the current block height, and applies signed
//! transactions one at a time. Each transaction runs against a staged clone
//! of the state; the clone replaces the committed state only when the
//! instruction succeeds, so a failed transaction leaves nothing behind but a
//! failed receipt.

use borsh::BorshSerialize;
use solana_program::{msg, program_error::PrintProgramError, pubkey::Pubkey};

use crate::{
    error::PoolError,
    ledger::{BalanceLedger, InMemoryLedger},
    processors::utilities,
    state::{AccountStore, FeeCollectedState, LbpPoolState, XykPoolState},
    types::{LbpInstruction, TokenId},
};

/// Everything a transaction may read or write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramState<L> {
    pub accounts: AccountStore,
    pub ledger: L,
}

/// Per-transaction view handed to the processors.
pub struct InstructionContext<'a, L> {
    pub program_id: &'a Pubkey,
    /// Verified transaction signer
    pub signer: Pubkey,
    pub block_height: u64,
    pub state: &'a mut ProgramState<L>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Success,
    Failed(PoolError),
}

/// Outcome of one processed transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionReceipt {
    pub index: u64,
    pub signer: Pubkey,
    pub block_height: u64,
    pub status: TransactionStatus,
}

impl TransactionReceipt {
    pub fn is_success(&self) -> bool {
        self.status == TransactionStatus::Success
    }

    /// Stable error code of a failed transaction.
    pub fn error_code(&self) -> Option<u32> {
        match self.status {
            TransactionStatus::Success => None,
            TransactionStatus::Failed(error) => Some(error.error_code()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub program_id: Pubkey,
    /// Block height the runtime starts at
    pub genesis_height: u64,
    /// Log every receipt as it is recorded
    pub log_receipts: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            program_id: crate::id(),
            genesis_height: 0,
            log_receipts: false,
        }
    }
}

pub struct Runtime<L = InMemoryLedger> {
    config: RuntimeConfig,
    block_height: u64,
    state: ProgramState<L>,
    receipts: Vec<TransactionReceipt>,
}

impl<L: BalanceLedger + Clone + Default> Runtime<L> {
    pub fn new(config: RuntimeConfig) -> Self {
        Self::with_ledger(config, L::default())
    }
}

impl<L: BalanceLedger + Clone> Runtime<L> {
    pub fn with_ledger(config: RuntimeConfig, ledger: L) -> Self {
        msg!(
            "🚀 Runtime starting at height {} for program {}",
            config.genesis_height,
            config.program_id
        );
        Self {
            block_height: config.genesis_height,
            config,
            state: ProgramState {
                accounts: AccountStore::new(),
                ledger,
            },
            receipts: Vec::new(),
        }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.config.program_id
    }

    pub fn block_height(&self) -> u64 {
        self.block_height
    }

    pub fn advance_blocks(&mut self, blocks: u64) -> Result<u64, PoolError> {
        let height = self
            .block_height
            .checked_add(blocks)
            .ok_or(PoolError::ArithmeticOverflow)?;
        self.set_block_height(height)?;
        Ok(height)
    }

    /// # Errors
    /// * `BlockHeightRegression` - if `height` is below the current height
    pub fn set_block_height(&mut self, height: u64) -> Result<(), PoolError> {
        if height < self.block_height {
            msg!(
                "❌ Block height cannot move from {} back to {}",
                self.block_height,
                height
            );
            return Err(PoolError::BlockHeightRegression);
        }
        self.block_height = height;
        Ok(())
    }

    /// Decodes and applies one signed transaction atomically.
    ///
    /// A receipt is recorded whatever the outcome; the returned error is the
    /// one carried by the failed receipt.
    pub fn process_transaction(&mut self, signer: &Pubkey, data: &[u8]) -> Result<(), PoolError> {
        let mut staged = self.state.clone();

        let result = {
            let mut ctx = InstructionContext {
                program_id: &self.config.program_id,
                signer: *signer,
                block_height: self.block_height,
                state: &mut staged,
            };
            crate::process_instruction(&mut ctx, data)
        };

        let status = match result {
            Ok(()) => {
                self.state = staged;
                TransactionStatus::Success
            }
            Err(error) => {
                error.print::<PoolError>();
                TransactionStatus::Failed(error)
            }
        };

        let receipt = TransactionReceipt {
            index: self.receipts.len() as u64,
            signer: *signer,
            block_height: self.block_height,
            status,
        };
        if self.config.log_receipts {
            msg!("🧾 Receipt: {:?}", receipt);
        }
        self.receipts.push(receipt);

        result
    }

    /// Encodes `instruction` and processes it as a transaction from `signer`.
    pub fn execute(&mut self, signer: &Pubkey, instruction: &LbpInstruction) -> Result<(), PoolError> {
        let data = instruction
            .try_to_vec()
            .map_err(|_| PoolError::InvalidInstruction)?;
        self.process_transaction(signer, &data)
    }

    pub fn receipts(&self) -> &[TransactionReceipt] {
        &self.receipts
    }

    pub fn last_receipt(&self) -> Option<&TransactionReceipt> {
        self.receipts.last()
    }

    pub fn state(&self) -> &ProgramState<L> {
        &self.state
    }

    pub fn ledger(&self) -> &L {
        &self.state.ledger
    }

    /// Direct ledger access for genesis funding; bypasses receipts.
    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.state.ledger
    }

    pub fn balance_of(&self, token: TokenId, account: &Pubkey) -> u64 {
        self.state.ledger.balance_of(token, account)
    }

    // Read-only queries against the committed state

    pub fn pool(&self, token_a: TokenId, token_b: TokenId) -> Result<Option<LbpPoolState>, PoolError> {
        utilities::get_pool(&self.config.program_id, &self.state, token_a, token_b)
    }

    pub fn pool_key(&self, token_a: TokenId, token_b: TokenId) -> Result<Pubkey, PoolError> {
        utilities::get_pool_key(&self.config.program_id, token_a, token_b)
    }

    pub fn pool_reserves(&self, token_a: TokenId, token_b: TokenId) -> Result<(u64, u64), PoolError> {
        utilities::get_pool_reserves(&self.config.program_id, &self.state, token_a, token_b)
    }

    pub fn collected_fees(&self, fee_collector: &Pubkey, asset: TokenId) -> Result<u64, PoolError> {
        utilities::get_collected_fees(&self.config.program_id, &self.state, fee_collector, asset)
    }

    pub fn fee_collected_entry(
        &self,
        fee_collector: &Pubkey,
        asset: TokenId,
    ) -> Result<Option<FeeCollectedState>, PoolError> {
        utilities::get_fee_collected_entry(&self.config.program_id, &self.state, fee_collector, asset)
    }

    pub fn xyk_pool(&self, token_a: TokenId, token_b: TokenId) -> Result<Option<XykPoolState>, PoolError> {
        utilities::get_xyk_pool(&self.config.program_id, &self.state, token_a, token_b)
    }

    pub fn token_registered(&self, token_id: TokenId) -> Result<bool, PoolError> {
        utilities::is_token_registered(&self.config.program_id, &self.state, token_id)
    }

    pub fn registry_len(&self) -> Result<u64, PoolError> {
        utilities::get_registry_len(&self.config.program_id, &self.state)
    }

    pub fn registry_token_at(&self, index: u64) -> Result<Option<TokenId>, PoolError> {
        utilities::get_registry_token_at(&self.config.program_id, &self.state, index)
    }

    /// Amount of `token_out` a sell of `amount_in` would pay out now, after fees.
    pub fn quote_sell(
        &self,
        token_in: TokenId,
        token_out: TokenId,
        amount_in: u64,
    ) -> Result<u64, PoolError> {
        utilities::quote_sell(
            &self.config.program_id,
            &self.state,
            self.block_height,
            token_in,
            token_out,
            amount_in,
        )
    }

    /// Unweighted input of `token_in` needed to take `amount_out` of `token_out`.
    pub fn quote_amount_in(
        &self,
        token_in: TokenId,
        token_out: TokenId,
        amount_out: u64,
    ) -> Result<u64, PoolError> {
        utilities::quote_amount_in(
            &self.config.program_id,
            &self.state,
            token_in,
            token_out,
            amount_out,
        )
    }
}
