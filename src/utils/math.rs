//! Pool Math
//!
//! Integer arithmetic for the weight curve, the weighted sell formula, the
//! constant-product quote and trade fees. All intermediates are computed in
//! `u128`; results that do not fit back into `u64` are reported as
//! `ArithmeticOverflow` and zero denominators as `DivisionByZero`.

use crate::{constants::MAX_WEIGHT, error::PoolError};

/// Linear interpolation of a weight over a block window.
///
/// `at` is clamped into `[start_x, end_x]`, so the curve is flat outside the
/// window rather than extrapolated:
///
/// `(start_y * (end_x - at) + end_y * (at - start_x)) / (end_x - start_x)`
///
/// # Errors
/// * `SaleIsNotRunning` - if `end_x <= start_x`
pub fn linear_weight(
    start_x: u64,
    end_x: u64,
    start_y: u32,
    end_y: u32,
    at: u64,
) -> Result<u32, PoolError> {
    if end_x <= start_x {
        return Err(PoolError::SaleIsNotRunning);
    }

    let at = at.clamp(start_x, end_x);
    let span = u128::from(end_x - start_x);

    let left = u128::from(start_y)
        .checked_mul(u128::from(end_x - at))
        .ok_or(PoolError::ArithmeticOverflow)?;
    let right = u128::from(end_y)
        .checked_mul(u128::from(at - start_x))
        .ok_or(PoolError::ArithmeticOverflow)?;

    let weight = left
        .checked_add(right)
        .ok_or(PoolError::ArithmeticOverflow)?
        / span;

    u32::try_from(weight).map_err(|_| PoolError::ArithmeticOverflow)
}

/// Weighted sell formula.
///
/// ```text
/// raw        = amount_in * reserve_out / (reserve_in + amount_in)
/// amount_out = raw * weight_in / (MAX_WEIGHT - weight_in)
/// ```
///
/// This linearised form stands in for the exponentiated weighted-pool
/// formula.
pub fn calculate_out_given_in(
    reserve_in: u64,
    reserve_out: u64,
    weight_in: u32,
    amount_in: u64,
) -> Result<u64, PoolError> {
    let denominator = u128::from(reserve_in) + u128::from(amount_in);
    if denominator == 0 {
        return Err(PoolError::DivisionByZero);
    }

    let raw = u128::from(amount_in) * u128::from(reserve_out) / denominator;

    let weight_out = MAX_WEIGHT
        .checked_sub(weight_in)
        .ok_or(PoolError::ArithmeticOverflow)?;
    if weight_out == 0 {
        return Err(PoolError::DivisionByZero);
    }

    let amount_out = raw
        .checked_mul(u128::from(weight_in))
        .ok_or(PoolError::ArithmeticOverflow)?
        / u128::from(weight_out);

    u64::try_from(amount_out).map_err(|_| PoolError::ArithmeticOverflow)
}

/// Constant-product input needed to receive `amount_out`, without weights.
///
/// `amount_in = reserve_in * amount_out / (reserve_out - amount_out)`
///
/// Asking for more than `reserve_out` fails with `InsufficientReserve`; asking
/// for exactly `reserve_out` leaves a zero denominator (`DivisionByZero`).
pub fn calculate_in_given_out(
    reserve_in: u64,
    reserve_out: u64,
    amount_out: u64,
) -> Result<u64, PoolError> {
    let denominator = reserve_out
        .checked_sub(amount_out)
        .ok_or(PoolError::InsufficientReserve)?;
    if denominator == 0 {
        return Err(PoolError::DivisionByZero);
    }

    let amount_in = u128::from(reserve_in) * u128::from(amount_out) / u128::from(denominator);
    u64::try_from(amount_in).map_err(|_| PoolError::ArithmeticOverflow)
}

/// Trade fee for `amount` at `numerator / denominator`.
///
/// The division happens before the multiplication:
/// `floor(amount / denominator) * numerator`. A zero numerator or denominator
/// charges nothing; `numerator == denominator` charges the whole amount.
pub fn calculate_pool_trade_fee(
    amount: u64,
    numerator: u32,
    denominator: u32,
) -> Result<u64, PoolError> {
    if numerator == 0 || denominator == 0 {
        return Ok(0);
    }
    if numerator == denominator {
        return Ok(amount);
    }

    (amount / u64::from(denominator))
        .checked_mul(u64::from(numerator))
        .ok_or(PoolError::ArithmeticOverflow)
}
