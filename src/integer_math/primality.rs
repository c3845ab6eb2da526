// src/integer_math/primality.rs

use crate::error::MathError;

/// Trial-division primality test: divides `n` by every integer in 2..n.
///
/// The scan range is empty for n <= 2, so 0, 1 and 2 all report true. For 2
/// that is correct; for 0 and 1 it is a quirk of the reference construction
/// that callers may rely on, so it is kept rather than corrected.
///
/// Undefined for negative n (inverted scan range): domain error.
pub fn is_prime(n: i64) -> Result<bool, MathError> {
    if n < 0 {
        return Err(MathError::domain("is_prime", n));
    }

    for i in 2..n {
        if n % i == 0 {
            return Ok(false);
        }
    }
    Ok(true)
}
