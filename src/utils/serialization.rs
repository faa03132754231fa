//! Serialization Utilities
//!
//! Safe borsh serialization of records into account data.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::msg;

use crate::error::PoolError;

/// Serializes `data` into `account_data`.
///
/// The record is first serialized into a temporary buffer; the account data
/// is only replaced once serialization has succeeded, so a failed write never
/// leaves a partially overwritten record behind.
pub fn serialize_to_account<T: BorshSerialize>(
    data: &T,
    account_data: &mut Vec<u8>,
) -> Result<(), PoolError> {
    let mut serialized_data = Vec::new();
    if let Err(e) = data.serialize(&mut serialized_data) {
        msg!("serialize_to_account: serialization to buffer failed: {:?}", e);
        return Err(PoolError::AccountDataCorrupted);
    }

    #[cfg(feature = "debug-logs")]
    msg!(
        "DEBUG: serialize_to_account: buffer len {} (previous {})",
        serialized_data.len(),
        account_data.len()
    );

    *account_data = serialized_data;
    Ok(())
}

/// Decodes a record from account data, rejecting trailing bytes.
pub fn deserialize_account<T: BorshDeserialize>(account_data: &[u8]) -> Result<T, PoolError> {
    T::try_from_slice(account_data).map_err(|e| {
        msg!("deserialize_account: failed to decode account data: {:?}", e);
        PoolError::AccountDataCorrupted
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FeeSchedule;

    #[test]
    fn write_replaces_previous_contents() {
        let mut account_data = vec![0xff; 64];
        serialize_to_account(&FeeSchedule::new(2, 10), &mut account_data).unwrap();

        assert_eq!(account_data.len(), 8);
        let decoded: FeeSchedule = deserialize_account(&account_data).unwrap();
        assert_eq!(decoded, FeeSchedule::new(2, 10));
    }

    #[test]
    fn truncated_data_is_rejected() {
        let result: Result<FeeSchedule, _> = deserialize_account(&[1, 0, 0]);
        assert_eq!(result, Err(PoolError::AccountDataCorrupted));
    }
}
