use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use solana_program::{
    decode_error::DecodeError,
    msg,
    program_error::{PrintProgramError, ProgramError},
};
use thiserror::Error;

/// Error types for the Liquidity Bootstrapping Pool Program.
///
/// Every variant carries a stable numeric code (its discriminant). Codes are
/// grouped by family: 10xx creation validation, 11xx trading, 12xx migration,
/// 13xx pool management, 14xx ledger and runtime.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum PoolError {
    /// Both sides of the pair are the same token
    #[error("Token pair requires two distinct tokens")]
    TokensNotDistinct = 1001,

    /// A pool already exists for this token pair
    #[error("Pool already exists for this token pair")]
    PoolAlreadyExists = 1002,

    /// Fee collector is already collecting fees in this asset
    #[error("Fee collector is already in use for this asset")]
    FeeCollectorAssetInUse = 1003,

    /// Start/end blocks are not in the future or not ordered
    #[error("Invalid block range")]
    InvalidBlockRange = 1004,

    #[error("Sale duration exceeds the maximum allowed")]
    MaxSaleDurationExceeded = 1005,

    /// Initial or final weight outside [MIN_WEIGHT, MAX_WEIGHT)
    #[error("Invalid weight")]
    InvalidWeight = 1006,

    #[error("Invalid fee")]
    InvalidFee = 1007,

    /// The derived liquidity token id is already present in the registry
    #[error("Liquidity token already registered")]
    LiquidityTokenAlreadyRegistered = 1008,

    #[error("Pool does not exist")]
    PoolDoesNotExist = 1101,

    /// Current block height is outside the pool's sale window
    #[error("Sale is not running")]
    SaleIsNotRunning = 1102,

    /// Output after fees is below the caller's minimum
    #[error("Amount out is below the minimum limit")]
    AmountOutInsufficient = 1103,

    /// A denominator was zero; upstream validation should make this unreachable
    #[error("Division by zero")]
    DivisionByZero = 1104,

    #[error("Token is not part of this pool")]
    TokenNotInPool = 1105,

    #[error("Amount must be greater than zero")]
    ZeroAmount = 1106,

    /// The fee in the accumulating asset exceeds the calculated output
    #[error("Calculated output does not cover the fee")]
    InsufficientOutputForFee = 1107,

    #[error("Requested output exceeds the pool reserve")]
    InsufficientReserve = 1108,

    /// Migration attempted while the sale window is still open
    #[error("Pool has not ended")]
    PoolNotEnded = 1201,

    /// One of the pool reserves is zero (never funded or already migrated)
    #[error("Pool is empty")]
    PoolEmpty = 1202,

    #[error("Signer is not the pool owner")]
    NotOwner = 1301,

    #[error("Sale has already started")]
    SaleStarted = 1302,

    #[error("Nothing to update")]
    NothingToUpdate = 1303,

    #[error("Cannot add zero liquidity")]
    CannotAddZeroLiquidity = 1304,

    #[error("Pool has ended")]
    PoolEnded = 1305,

    #[error("Insufficient balance")]
    InsufficientBalance = 1401,

    #[error("Arithmetic overflow")]
    ArithmeticOverflow = 1402,

    #[error("Invalid instruction data")]
    InvalidInstruction = 1403,

    /// Block height may only move forward
    #[error("Block height cannot decrease")]
    BlockHeightRegression = 1404,

    #[error("Account data could not be decoded")]
    AccountDataCorrupted = 1405,
}

impl PoolError {
    /// Returns the stable error code for this variant.
    pub fn error_code(&self) -> u32 {
        *self as u32
    }

    /// Maps an error code back to its variant.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::from_u32(code)
    }
}

impl From<PoolError> for ProgramError {
    fn from(e: PoolError) -> Self {
        ProgramError::Custom(e.error_code())
    }
}

impl<T> DecodeError<T> for PoolError {
    fn type_of() -> &'static str {
        "PoolError"
    }
}

impl PrintProgramError for PoolError {
    fn print<E>(&self)
    where
        E: 'static + std::error::Error + DecodeError<E> + PrintProgramError + FromPrimitive,
    {
        msg!("❌ PoolError {}: {}", self.error_code(), self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_program_error() {
        let err: ProgramError = PoolError::SaleIsNotRunning.into();
        assert_eq!(err, ProgramError::Custom(1102));

        let ProgramError::Custom(code) = err else {
            panic!("expected custom error");
        };
        assert_eq!(PoolError::from_code(code), Some(PoolError::SaleIsNotRunning));
    }

    #[test]
    fn unknown_code_decodes_to_none() {
        assert_eq!(PoolError::from_code(42), None);
        assert_eq!(
            <PoolError as DecodeError<PoolError>>::decode_custom_error_to_enum(1202),
            Some(PoolError::PoolEmpty)
        );
    }
}
