// src/error.rs

use thiserror::Error;

/// Errors produced by `NumberSet` operations.
///
/// Every operation validates its own preconditions at call time and fails
/// synchronously; nothing is retried or recovered internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// An operation was called with the wrong count of held numbers.
    #[error("{operation} requires {required}, but the set holds {actual} number(s)")]
    Arity {
        operation: &'static str,
        required: &'static str,
        actual: usize,
    },

    /// An operation is undefined for the given input value.
    #[error("{operation} is undefined for {value}")]
    Domain {
        operation: &'static str,
        value: i64,
    },

    /// An intermediate value fell outside the representable `i64` range.
    #[error("{operation} overflowed on {value}")]
    Overflow {
        operation: &'static str,
        value: i64,
    },
}

impl MathError {
    pub(crate) fn arity(operation: &'static str, required: &'static str, actual: usize) -> Self {
        MathError::Arity {
            operation,
            required,
            actual,
        }
    }

    pub(crate) fn domain(operation: &'static str, value: i64) -> Self {
        MathError::Domain { operation, value }
    }

    pub(crate) fn overflow(operation: &'static str, value: i64) -> Self {
        MathError::Overflow { operation, value }
    }
}
