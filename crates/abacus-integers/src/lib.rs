//! # abacus-integers
//!
//! Exact arbitrary-precision arithmetic for the Abacus calculator:
//! multiple-precision integers ([`Mp`]) and always-reduced rationals
//! ([`Rational`]), together with the number-theoretic operations the
//! calculator's evaluation layer relies on.
//!
//! ## Design notes
//!
//! - Integers are stored as base-10^6 chunks with an explicit sign flag,
//!   and every operation returns a fully normalized value.
//! - Rationals are kept in lowest terms with a positive denominator.
//! - Fallible operations return [`ArithmeticError`]; the std operator
//!   impls for division assert a nonzero divisor and leave explicit
//!   handling to the `checked_*` methods.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod factor;
pub mod mp;
pub mod number;
pub mod print;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::ArithmeticError;
pub use factor::prime_factorization_batch;
pub use mp::Mp;
pub use number::Number;
pub use print::{parentheses_well_formed, trim_parentheses};
pub use rational::Rational;
