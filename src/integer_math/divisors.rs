// src/integer_math/divisors.rs

use crate::error::MathError;

/// Enumerates every natural divisor of `n`.
///
/// Scans 2 through n/2 for divisors, then appends 1 and n themselves, in
/// that fixed order; callers get construction order, not sorted order.
/// For n == 1 the scan range is empty and the result is `[1, 1]` - the
/// duplicate is a documented quirk of the construction, kept as is.
///
/// Undefined for n <= 0 (empty or inverted scan range): domain error.
pub fn divisors_of(n: i64) -> Result<Vec<i64>, MathError> {
    if n <= 0 {
        return Err(MathError::domain("get_divisors", n));
    }

    let mut divisors: Vec<i64> = Vec::new();
    for i in 2..=n / 2 {
        if n % i == 0 {
            divisors.push(i);
        }
    }
    divisors.push(1);
    divisors.push(n);
    Ok(divisors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divisors_of_28() {
        let divisors = divisors_of(28).unwrap();
        assert_eq!(divisors, vec![2, 4, 7, 14, 1, 28]);

        let mut sorted = divisors;
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 4, 7, 14, 28]);
    }

    #[test]
    fn test_divisors_of_prime() {
        assert_eq!(divisors_of(13).unwrap(), vec![1, 13]);
    }

    #[test]
    fn test_divisors_of_one_keeps_duplicate() {
        assert_eq!(divisors_of(1).unwrap(), vec![1, 1]);
    }

    #[test]
    fn test_divisors_of_two() {
        assert_eq!(divisors_of(2).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_divisors_rejects_zero_and_negative() {
        assert!(matches!(divisors_of(0), Err(MathError::Domain { .. })));
        assert!(matches!(divisors_of(-6), Err(MathError::Domain { .. })));
    }
}
