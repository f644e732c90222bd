//! Number-theoretic operations: prime factorization, squared parts and
//! binomial coefficients.
//!
//! Factorization is plain trial division, which is plenty for calculator
//! operands; the factor maps are ordered by increasing prime.

use num_traits::{One, Zero};
use rayon::prelude::*;
use std::collections::BTreeMap;

use crate::error::ArithmeticError;
use crate::mp::Mp;
use crate::print::enclose;
use crate::rational::Rational;

impl Mp {
    /// Returns the prime factorization of the absolute value as a map
    /// from prime to exponent, ordered by increasing prime.
    ///
    /// The product of `prime^exponent` over the entries reconstructs
    /// `abs(self)`; the factorization of one is the empty map. A negative
    /// value factors its absolute value.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for zero, which has no factorization.
    pub fn prime_factorization(&self) -> Result<BTreeMap<Mp, u32>, ArithmeticError> {
        if self.is_zero() {
            return Err(ArithmeticError::InvalidArgument(
                "zero has no prime factorization",
            ));
        }
        let mut factors = BTreeMap::new();
        let mut remaining = self.abs();
        let two = Mp::new(2);
        let mut candidate = two.clone();
        while &candidate * &candidate <= remaining {
            let mut exponent = 0u32;
            loop {
                let (quotient, rest) = remaining.div_rem(&candidate)?;
                if !rest.is_zero() {
                    break;
                }
                remaining = quotient;
                exponent += 1;
            }
            if exponent > 0 {
                factors.insert(candidate.clone(), exponent);
            }
            candidate = if candidate == two {
                Mp::new(3)
            } else {
                &candidate + &two
            };
        }
        if remaining > Mp::one() {
            factors.insert(remaining, 1);
        }
        Ok(factors)
    }

    /// Splits the value as `a * a * b` with `a` maximal, so `b` is
    /// square-free. `a` is always non-negative; a negative value carries
    /// its sign on `b`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for zero.
    pub fn separate_squared_part(&self) -> Result<(Mp, Mp), ArithmeticError> {
        let factors = self.prime_factorization()?;
        let mut squared = Mp::one();
        let mut square_free = Mp::one();
        for (prime, exponent) in &factors {
            let paired = prime.pow(i64::from(exponent / 2))?;
            squared = &squared * &paired;
            if exponent % 2 == 1 {
                square_free = &square_free * prime;
            }
        }
        if self.is_negative() {
            square_free = -square_free;
        }
        Ok((squared, square_free))
    }

    /// Computes the binomial coefficient "n choose k", the number of ways
    /// to pick `k` items from `n`.
    ///
    /// Returns zero when `n <= 0`, `k <= 0`, or `k > n`. The accumulation
    /// multiplies and divides one factor at a time, so every intermediate
    /// value is itself a binomial coefficient and the divisions stay
    /// exact.
    #[must_use]
    pub fn binomial_coeff(n: i64, k: i64) -> Mp {
        if n <= 0 || k <= 0 || k > n {
            return Mp::zero();
        }
        let mut result = Mp::one();
        for i in 1..=k {
            result = &result * &Mp::new(n - k + i);
            result = &result / &Mp::new(i);
        }
        result
    }
}

/// Factors a batch of values, one rayon task each.
#[must_use]
pub fn prime_factorization_batch(
    values: &[Mp],
) -> Vec<Result<BTreeMap<Mp, u32>, ArithmeticError>> {
    values.par_iter().map(Mp::prime_factorization).collect()
}

impl Rational {
    /// Returns the merged factorization of the reduced fraction: the
    /// numerator's primes with positive exponents and the denominator's
    /// with negative exponents. The fraction is reduced, so the two sets
    /// of primes never overlap.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the value is zero.
    pub fn prime_factorization(&self) -> Result<BTreeMap<Mp, i32>, ArithmeticError> {
        let mut merged = BTreeMap::new();
        for (prime, exponent) in self.numerator().prime_factorization()? {
            merged.insert(prime, exponent as i32);
        }
        for (prime, exponent) in self.denominator().prime_factorization()? {
            merged.insert(prime, -(exponent as i32));
        }
        Ok(merged)
    }

    /// Splits the value as `a * a * b` with `b` square-free in both
    /// numerator and denominator, applying [`Mp::separate_squared_part`]
    /// componentwise.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the value is zero.
    pub fn separate_squared_part(&self) -> Result<(Rational, Rational), ArithmeticError> {
        let (num_squared, num_free) = self.numerator().separate_squared_part()?;
        let (denom_squared, denom_free) = self.denominator().separate_squared_part()?;
        Ok((
            Rational::new(num_squared, denom_squared)?,
            Rational::new(num_free, denom_free)?,
        ))
    }

    /// Renders the merged factorization as `prime^exponent` terms joined
    /// by `" * "`, omitting the exponent when it is one. The empty
    /// factorization renders as `"1"`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the value is zero.
    pub fn print_factors(&self, use_parentheses: bool) -> Result<String, ArithmeticError> {
        let factors = self.prime_factorization()?;
        let mut rendered = String::new();
        for (prime, exponent) in &factors {
            if !rendered.is_empty() {
                rendered.push_str(" * ");
            }
            if *exponent == 1 {
                rendered.push_str(&prime.to_string());
            } else {
                rendered.push_str(&format!("{prime}^{exponent}"));
            }
        }
        if rendered.is_empty() {
            rendered.push('1');
        }
        Ok(if use_parentheses {
            enclose(&rendered, ('(', ')'))
        } else {
            rendered
        })
    }
}
