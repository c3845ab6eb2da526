// src/integer_math/euclid.rs

use crate::error::MathError;
use crate::integer_math::checked_abs;

/// Two-operand GCD by iterative Euclidean remainder reduction.
///
/// Operates on absolute values, so the result is always non-negative.
/// A zero operand yields the other operand's absolute value; `gcd(0, 0)`
/// is 0.
pub fn gcd_pair(a: i64, b: i64) -> Result<i64, MathError> {
    let mut b0 = checked_abs("gcd", a)?;
    let mut c0 = checked_abs("gcd", b)?;

    while c0 != 0 {
        let r = b0 % c0;
        if r == 0 {
            return Ok(c0);
        }
        b0 = c0;
        c0 = r;
    }
    Ok(b0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_pair_basic() {
        assert_eq!(gcd_pair(48, 18), Ok(6));
        assert_eq!(gcd_pair(18, 48), Ok(6));
        assert_eq!(gcd_pair(17, 5), Ok(1));
    }

    #[test]
    fn test_gcd_pair_negative_operands() {
        assert_eq!(gcd_pair(-48, 18), Ok(6));
        assert_eq!(gcd_pair(48, -18), Ok(6));
        assert_eq!(gcd_pair(-48, -18), Ok(6));
    }

    #[test]
    fn test_gcd_pair_zero_operands() {
        assert_eq!(gcd_pair(0, 7), Ok(7));
        assert_eq!(gcd_pair(7, 0), Ok(7));
        assert_eq!(gcd_pair(0, 0), Ok(0));
    }

    #[test]
    fn test_gcd_pair_min_overflows() {
        assert!(matches!(
            gcd_pair(i64::MIN, 2),
            Err(MathError::Overflow { .. })
        ));
    }

    #[test]
    fn test_gcd_pair_matches_oracle() {
        for a in [1i64, 2, 12, 35, 91, 1024, 99991] {
            for b in [1i64, 3, 18, 49, 91, 768] {
                assert_eq!(gcd_pair(a, b), Ok(num::integer::gcd(a, b)));
            }
        }
    }
}
