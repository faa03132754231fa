//! Balance Ledger
//!
//! The ledger that holds per-(token, account) balances. The pool engine only
//! ever moves value through this trait; [`InMemoryLedger`] is the
//! deterministic implementation used by the runtime.

use solana_program::{msg, pubkey::Pubkey};
use std::collections::BTreeMap;

use crate::{error::PoolError, types::TokenId};

/// Balance primitives consumed by the pool engine.
///
/// Implementations must never allow a negative balance and must conserve
/// supply on transfer.
pub trait BalanceLedger {
    /// Moves `amount` of `token` from `from` to `to`.
    ///
    /// # Errors
    /// * `InsufficientBalance` - if `from` holds less than `amount`
    fn transfer(
        &mut self,
        token: TokenId,
        from: &Pubkey,
        to: &Pubkey,
        amount: u64,
    ) -> Result<(), PoolError>;

    /// Creates `amount` new units of `token` in `to`.
    fn mint_and_increment_supply(
        &mut self,
        token: TokenId,
        to: &Pubkey,
        amount: u64,
    ) -> Result<(), PoolError>;

    /// Balance of `account`; zero when the account has never held `token`.
    fn balance_of(&self, token: TokenId, account: &Pubkey) -> u64;

    fn total_supply(&self, token: TokenId) -> u64;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryLedger {
    balances: BTreeMap<(TokenId, Pubkey), u64>,
    supply: BTreeMap<TokenId, u64>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BalanceLedger for InMemoryLedger {
    fn transfer(
        &mut self,
        token: TokenId,
        from: &Pubkey,
        to: &Pubkey,
        amount: u64,
    ) -> Result<(), PoolError> {
        let available = self.balance_of(token, from);
        if available < amount {
            msg!(
                "❌ Insufficient balance: token {} account {} has {}, needs {}",
                token,
                from,
                available,
                amount
            );
            return Err(PoolError::InsufficientBalance);
        }
        if amount == 0 || from == to {
            return Ok(());
        }

        let to_balance = self
            .balance_of(token, to)
            .checked_add(amount)
            .ok_or(PoolError::ArithmeticOverflow)?;

        self.balances.insert((token, *from), available - amount);
        self.balances.insert((token, *to), to_balance);

        #[cfg(feature = "debug-logs")]
        msg!("DEBUG: transfer {} of token {}: {} → {}", amount, token, from, to);

        Ok(())
    }

    fn mint_and_increment_supply(
        &mut self,
        token: TokenId,
        to: &Pubkey,
        amount: u64,
    ) -> Result<(), PoolError> {
        let supply = self
            .total_supply(token)
            .checked_add(amount)
            .ok_or(PoolError::ArithmeticOverflow)?;
        let to_balance = self
            .balance_of(token, to)
            .checked_add(amount)
            .ok_or(PoolError::ArithmeticOverflow)?;

        self.supply.insert(token, supply);
        self.balances.insert((token, *to), to_balance);
        Ok(())
    }

    fn balance_of(&self, token: TokenId, account: &Pubkey) -> u64 {
        self.balances.get(&(token, *account)).copied().unwrap_or(0)
    }

    fn total_supply(&self, token: TokenId) -> u64 {
        self.supply.get(&token).copied().unwrap_or(0)
    }
}
