//! Basic arithmetic helpers sharing the library's error-return convention.

use thiserror::Error;

/// The only arithmetic failure: dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("division by zero is not allowed")]
    DivisionByZero,
}

pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

pub fn subtract(a: i64, b: i64) -> i64 {
    a - b
}

pub fn multiply(a: i64, b: i64) -> i64 {
    a * b
}

/// Integer division, returning an error instead of panicking when the
/// divisor is zero.
pub fn divide(a: i64, b: i64) -> Result<i64, MathError> {
    if b == 0 {
        return Err(MathError::DivisionByZero);
    }
    Ok(a / b)
}
