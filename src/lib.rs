// src/lib.rs

pub mod error;
pub mod integer_math;
pub mod number_set;

pub use error::MathError;
pub use number_set::NumberSet;
