//! # Abacus
//!
//! Exact arithmetic core for a calculator backend.
//!
//! Abacus provides arbitrary-precision integer and rational arithmetic
//! with no floating-point rounding: results are exact at every step, and
//! doubles only appear as a best-effort view for display.
//!
//! ## Features
//!
//! - **Multiple-precision integers**: base-10^6 chunked storage with
//!   schoolbook arithmetic and one-pass long division
//! - **Exact rationals**: always reduced, positive denominators
//! - **Number theory**: gcd, prime factorization, square-free
//!   decomposition, binomial coefficients
//! - **Polymorphic values**: the `Number` trait keeps the evaluation
//!   layer agnostic of the concrete variant
//!
//! ## Quick Start
//!
//! ```
//! use abacus::prelude::*;
//!
//! let sum = Rational::from_i64(1, 2)? + Rational::from_i64(1, 3)?;
//! assert_eq!(sum.print(false), "5/6");
//! # Ok::<(), ArithmeticError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use abacus_integers as integers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use abacus_integers::{
        parentheses_well_formed, trim_parentheses, ArithmeticError, Mp, Number, Rational,
    };
}
