// src/integer_math/brute_force.rs

use log::{debug, trace};

use crate::error::MathError;
use crate::integer_math::checked_abs;

/// Multi-operand GCD by exhaustive divisor intersection.
///
/// For every operand, every divisor of its absolute value from 1 through the
/// value itself is enumerated into one pool; a value dividing all operands
/// appears in the pool exactly `numbers.len()` times, and the largest such
/// value is the GCD. O(sum of |operands|) time and space, so this is a
/// reference algorithm for small inputs, not a production GCD.
///
/// A zero operand has no finite divisor enumeration and is rejected with a
/// domain error.
pub fn gcd_all(numbers: &[i64]) -> Result<i64, MathError> {
    debug!(
        "brute-force gcd over {} operands: {:?}",
        numbers.len(),
        numbers
    );

    let mut pool: Vec<i64> = Vec::new();
    for &number in numbers {
        let n = checked_abs("gcd", number)?;
        if n == 0 {
            return Err(MathError::domain("gcd", 0));
        }
        for divisor in 1..=n {
            if n % divisor == 0 {
                pool.push(divisor);
            }
        }
        trace!("divisor pool after {}: {} entries", number, pool.len());
    }

    let required = numbers.len();
    let mut best: Option<i64> = None;
    for &candidate in &pool {
        let count = pool.iter().filter(|&&d| d == candidate).count();
        if count == required && best.map_or(true, |b| candidate > b) {
            best = Some(candidate);
        }
    }

    // 1 divides every nonzero operand, so this only trips on an empty slice,
    // which the arity check upstream already rules out.
    best.ok_or_else(|| MathError::domain("gcd", 0))
}
