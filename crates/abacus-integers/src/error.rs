//! Errors signaled by arithmetic operations.

use thiserror::Error;

/// Errors that can occur during exact arithmetic.
///
/// Every violation is reported at the point of detection, before any
/// partial result escapes, so a failed operation leaves its operands
/// untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// An argument was outside the operation's domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A zero divisor or zero denominator was supplied.
    #[error("division by zero")]
    DivisionByZero,
}
