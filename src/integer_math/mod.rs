// src/integer_math/mod.rs

pub mod brute_force;
pub mod divisors;
pub mod euclid;
pub mod primality;

use crate::error::MathError;

/// Absolute value with the single i64 edge case surfaced as an error:
/// |i64::MIN| is not representable.
pub(crate) fn checked_abs(operation: &'static str, value: i64) -> Result<i64, MathError> {
    value
        .checked_abs()
        .ok_or_else(|| MathError::overflow(operation, value))
}
