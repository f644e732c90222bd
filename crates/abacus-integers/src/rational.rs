//! Exact rational numbers.
//!
//! This module provides fractions of multiple-precision integers, kept in
//! lowest terms with a positive denominator at all times.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::ArithmeticError;
use crate::mp::Mp;
use crate::number::Number;
use crate::print::enclose;

/// An exact fraction of two multiple-precision integers.
///
/// Rationals are always stored in lowest terms with a positive
/// denominator; the sign of the fraction is carried by the numerator.
/// Every constructor and arithmetic operation re-establishes this
/// invariant before the value is returned.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    num: Mp,
    denom: Mp,
}

impl Rational {
    /// Creates `num / denom`, reduced to lowest terms.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` when `denom` is zero.
    pub fn new(num: Mp, denom: Mp) -> Result<Self, ArithmeticError> {
        if denom.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self::reduced(num, denom))
    }

    /// Creates `num / denom` from machine integers.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` when `denom` is zero.
    pub fn from_i64(num: i64, denom: i64) -> Result<Self, ArithmeticError> {
        Self::new(Mp::new(num), Mp::new(denom))
    }

    /// Creates a rational from an integer (denominator one).
    #[must_use]
    pub fn from_integer(n: Mp) -> Self {
        Self {
            num: n,
            denom: Mp::one(),
        }
    }

    /// Divides out the gcd and moves the sign to the numerator.
    /// Callers guarantee `denom` is nonzero.
    fn reduced(num: Mp, denom: Mp) -> Self {
        let g = num.gcd(&denom);
        let mut num = &num / &g;
        let mut denom = &denom / &g;
        if denom.is_negative() {
            num = -num;
            denom = -denom;
        }
        Self { num, denom }
    }

    /// Returns the numerator of the reduced fraction.
    #[must_use]
    pub fn numerator(&self) -> Mp {
        self.num.clone()
    }

    /// Returns the denominator of the reduced fraction. It is always
    /// positive.
    #[must_use]
    pub fn denominator(&self) -> Mp {
        self.denom.clone()
    }

    /// Returns true if the reduced denominator is one, i.e. the value is
    /// an integer.
    #[must_use]
    pub fn is_int(&self) -> bool {
        self.denom.is_one()
    }

    /// Divides by `rhs`, re-reducing the result.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` when `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self::reduced(&self.num * &rhs.denom, &self.denom * &rhs.num))
    }

    /// Raises to an integer power; a negative exponent inverts the
    /// fraction first, relying on [`Mp::pow`] for the magnitudes.
    ///
    /// `pow(0)` is `1/1` for every value, including zero.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` when the value is zero and `p` is
    /// negative, and `InvalidArgument` when `p` is `i64::MIN`.
    pub fn pow(&self, p: i64) -> Result<Self, ArithmeticError> {
        if p == 0 {
            return Ok(Self::one());
        }
        let e = p
            .checked_abs()
            .ok_or(ArithmeticError::InvalidArgument("exponent out of range"))?;
        let base = if p < 0 {
            if self.is_zero() {
                return Err(ArithmeticError::DivisionByZero);
            }
            Self::reduced(self.denom.clone(), self.num.clone())
        } else {
            self.clone()
        };
        // base is reduced, so the powers share no factor either
        Ok(Self {
            num: base.num.pow(e)?,
            denom: base.denom.pow(e)?,
        })
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self {
            num: Mp::zero(),
            denom: Mp::one(),
        }
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self {
            num: Mp::one(),
            denom: Mp::one(),
        }
    }

    fn is_one(&self) -> bool {
        self.num.is_one() && self.denom.is_one()
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // denominators are positive, so cross-multiplication keeps order
        (&self.num * &other.denom).cmp(&(&other.num * &self.denom))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Number for Rational {
    fn get(&self) -> (f64, f64) {
        (self.num.to_f64() / self.denom.to_f64(), 0.0)
    }

    fn print(&self, use_parentheses: bool) -> String {
        let rendered = self.to_string();
        if use_parentheses {
            enclose(&rendered, ('(', ')'))
        } else {
            rendered
        }
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_int() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.denom)
        }
    }
}

// Arithmetic operations
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        &self + rhs
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational::reduced(
            &(&self.num * &rhs.denom) + &(&rhs.num * &self.denom),
            &self.denom * &rhs.denom,
        )
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        &self - rhs
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational::reduced(
            &(&self.num * &rhs.denom) - &(&rhs.num * &self.denom),
            &self.denom * &rhs.denom,
        )
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        &self * rhs
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational::reduced(&self.num * &rhs.num, &self.denom * &rhs.denom)
    }
}

impl Div for Rational {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`Rational::checked_div`] to handle
    /// that case explicitly.
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(&rhs).expect("division by zero")
    }
}

impl Div for &Rational {
    type Output = Rational;

    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`Rational::checked_div`] to handle
    /// that case explicitly.
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).expect("division by zero")
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            num: -self.num,
            denom: self.denom,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl From<Mp> for Rational {
    fn from(n: Mp) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Mp::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(Mp::new(i64::from(n)))
    }
}
