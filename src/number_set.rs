// src/number_set.rs

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::MathError;
use crate::integer_math::{brute_force, divisors, euclid, primality};

/// An ordered, immutable collection of integers with elementary
/// number-theory operations over the held values.
///
/// Construction accepts anything, including an empty list; each operation
/// validates its own arity precondition when called and fails with
/// [`MathError::Arity`] when the held count does not match. Duplicates are
/// permitted and have no effect on GCD results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberSet {
    numbers: Vec<i64>,
}

impl NumberSet {
    /// Holds `numbers` in the order given. Never fails; arity is checked
    /// per operation, not here.
    pub fn new(numbers: Vec<i64>) -> Self {
        NumberSet { numbers }
    }

    /// The held numbers, in construction order.
    pub fn numbers(&self) -> &[i64] {
        &self.numbers
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Greatest common divisor of the absolute values of the held numbers.
    ///
    /// Requires at least two held numbers. Two operands take the Euclidean
    /// path; three or more take the brute-force divisor-intersection path,
    /// which is O(sum of |operands|) and rejects zero operands.
    pub fn gcd(&self) -> Result<i64, MathError> {
        if self.numbers.len() < 2 {
            return Err(MathError::arity(
                "gcd",
                "at least two numbers",
                self.numbers.len(),
            ));
        }

        if self.numbers.len() == 2 {
            debug!("gcd dispatch: 2 operands, euclidean path");
            euclid::gcd_pair(self.numbers[0], self.numbers[1])
        } else {
            debug!(
                "gcd dispatch: {} operands, brute-force path",
                self.numbers.len()
            );
            brute_force::gcd_all(&self.numbers)
        }
    }

    /// True iff the single held number divides `candidate` with zero
    /// remainder. Note the direction: the held number is the divisor under
    /// test, `candidate` is the dividend.
    ///
    /// Requires exactly one held number; a held zero is a domain error.
    pub fn is_divisor_of(&self, candidate: i64) -> Result<bool, MathError> {
        let n = self.single_held("is_divisor_of")?;
        if n == 0 {
            return Err(MathError::domain("is_divisor_of", 0));
        }
        // checked_rem only fails for i64::MIN % -1, where the remainder is
        // mathematically 0 even though the quotient is unrepresentable
        Ok(candidate.checked_rem(n).unwrap_or(0) == 0)
    }

    /// All natural divisors of the single held number, in the fixed
    /// construction order of [`divisors::divisors_of`]: scanned divisors
    /// first, then 1 and the number itself.
    ///
    /// Requires exactly one held number, which must be positive.
    pub fn get_divisors(&self) -> Result<Vec<i64>, MathError> {
        let n = self.single_held("get_divisors")?;
        divisors::divisors_of(n)
    }

    /// Trial-division primality test of the single held number.
    ///
    /// Requires exactly one held number, which must be non-negative. 0 and 1
    /// report true; see [`primality::is_prime`] for the rationale.
    pub fn is_prime(&self) -> Result<bool, MathError> {
        let n = self.single_held("is_prime")?;
        primality::is_prime(n)
    }

    /// True iff the held numbers have a GCD of 1.
    ///
    /// Requires at least two held numbers; propagates any `gcd()` error.
    pub fn are_coprime(&self) -> Result<bool, MathError> {
        if self.numbers.len() < 2 {
            return Err(MathError::arity(
                "are_coprime",
                "at least two numbers",
                self.numbers.len(),
            ));
        }
        Ok(self.gcd()? == 1)
    }

    fn single_held(&self, operation: &'static str) -> Result<i64, MathError> {
        match self.numbers.as_slice() {
            [n] => Ok(*n),
            _ => Err(MathError::arity(
                operation,
                "exactly one number",
                self.numbers.len(),
            )),
        }
    }
}

impl From<Vec<i64>> for NumberSet {
    fn from(numbers: Vec<i64>) -> Self {
        NumberSet::new(numbers)
    }
}

impl FromIterator<i64> for NumberSet {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        NumberSet::new(iter.into_iter().collect())
    }
}
