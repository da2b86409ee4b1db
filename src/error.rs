//! Error types for the fallible boundaries of this crate.
//!
//! Everything else in `bignum` is a total function over its inputs; the
//! only two places that can fail are parsing untrusted text (`ParseIntError`)
//! and dividing by zero (`DivideByZeroError`).

use thiserror::Error;

/// A decimal string did not match `[+-]?[0-9]+`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseIntError {
    /// The input contained no digits at all (after an optional sign).
    #[error("cannot parse integer from empty string")]
    Empty,
    /// A byte at the given offset was not an ASCII digit.
    #[error("invalid digit found at byte offset {0}")]
    InvalidDigit(usize),
}

/// Attempted to divide or take the remainder of a value by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("attempt to divide by zero")]
pub struct DivideByZeroError;
