//! Multiple-precision integers.
//!
//! This module provides a signed integer of unbounded magnitude, stored
//! as base-10^6 chunks with an explicit sign flag. All the digit-level
//! work of the crate lives here: normalization, schoolbook addition and
//! multiplication, one-pass long division, gcd and exponentiation.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use crate::error::ArithmeticError;

/// Decimal digits stored per chunk.
pub const CHUNK_DIGITS: usize = 6;

/// Exclusive upper bound of a chunk: `10^CHUNK_DIGITS`.
pub const CHUNK_BASE: u64 = 1_000_000;

/// A multiple-precision signed integer.
///
/// Values are stored as base-10^6 chunks, least significant first, with
/// the sign carried separately. The representation is always normalized:
/// every chunk is below [`CHUNK_BASE`], the most significant chunk is
/// nonzero (except for the single zero chunk of the value zero), and zero
/// is never negative. Arithmetic operators return new values; the only
/// in-place mutation is [`Mp::set_digit`], which re-normalizes before
/// returning.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Mp {
    chunks: Vec<u32>,
    negative: bool,
}

impl Mp {
    /// Creates a new multiple-precision integer from a machine integer.
    #[must_use]
    pub fn new(value: i64) -> Self {
        let mut out = Self::from_magnitude(value.unsigned_abs());
        out.negative = value < 0;
        out
    }

    fn from_magnitude(value: u64) -> Self {
        let mut chunks = Vec::new();
        let mut rest = value;
        loop {
            chunks.push((rest % CHUNK_BASE) as u32);
            rest /= CHUNK_BASE;
            if rest == 0 {
                break;
            }
        }
        Self {
            chunks,
            negative: false,
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            chunks: self.chunks.clone(),
            negative: false,
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Returns the `i`-th decimal digit, counting from the least
    /// significant. Digits above the most significant one read as zero.
    #[must_use]
    pub fn get_digit(&self, i: usize) -> u32 {
        let chunk = i / CHUNK_DIGITS;
        if chunk >= self.chunks.len() {
            return 0;
        }
        let place = 10u32.pow((i % CHUNK_DIGITS) as u32);
        (self.chunks[chunk] / place) % 10
    }

    /// Sets the `i`-th decimal digit, counting from the least significant,
    /// growing the representation when `i` lies beyond the current most
    /// significant digit.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when `val` is not a single decimal digit.
    pub fn set_digit(&mut self, i: usize, val: u32) -> Result<(), ArithmeticError> {
        if val > 9 {
            return Err(ArithmeticError::InvalidArgument(
                "digit value must be between 0 and 9",
            ));
        }
        let chunk = i / CHUNK_DIGITS;
        if chunk >= self.chunks.len() {
            self.chunks.resize(chunk + 1, 0);
        }
        let place = 10u32.pow((i % CHUNK_DIGITS) as u32);
        let old = (self.chunks[chunk] / place) % 10;
        self.chunks[chunk] = self.chunks[chunk] - old * place + val * place;
        self.normalize();
        Ok(())
    }

    /// Returns the number of decimal digits in the normalized
    /// representation. Zero has exactly one digit.
    #[must_use]
    pub fn num_digits(&self) -> usize {
        let mut top = self.chunks.last().copied().unwrap_or(0);
        let mut top_digits = 1;
        while top >= 10 {
            top /= 10;
            top_digits += 1;
        }
        (self.chunks.len() - 1) * CHUNK_DIGITS + top_digits
    }

    /// Returns the value reduced modulo [`CHUNK_BASE`] as a machine
    /// integer.
    ///
    /// Out-of-range magnitudes are not an error: only the least
    /// significant chunk survives, negated when the value is negative, so
    /// the result matches `value % 10^6` under truncating division.
    #[must_use]
    pub fn to_int(&self) -> i64 {
        let low = i64::from(self.chunks[0]);
        if self.negative {
            -low
        } else {
            low
        }
    }

    /// Returns a best-effort `f64` approximation of the value.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        let mut value = 0.0_f64;
        for &chunk in self.chunks.iter().rev() {
            value = value * CHUNK_BASE as f64 + f64::from(chunk);
        }
        if self.negative {
            -value
        } else {
            value
        }
    }

    /// Computes quotient and remainder in a single long-division pass.
    ///
    /// Division truncates toward zero and the remainder takes the sign of
    /// `self`, so `a == (a / b) * b + (a % b)` holds for every nonzero
    /// `b`.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` when `rhs` is zero.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self), ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let (q, r) = div_rem_magnitude(&self.chunks, &rhs.chunks);
        let mut quotient = Self {
            chunks: q,
            negative: self.negative != rhs.negative,
        };
        let mut remainder = Self {
            chunks: r,
            negative: self.negative,
        };
        quotient.normalize();
        remainder.normalize();
        Ok((quotient, remainder))
    }

    /// Computes the quotient of truncating division.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` when `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        self.div_rem(rhs).map(|(q, _)| q)
    }

    /// Computes the remainder of truncating division.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` when `rhs` is zero.
    pub fn checked_rem(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        self.div_rem(rhs).map(|(_, r)| r)
    }

    /// Computes `self^p` by binary exponentiation.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when `p` is negative.
    pub fn pow(&self, p: i64) -> Result<Self, ArithmeticError> {
        if p < 0 {
            return Err(ArithmeticError::InvalidArgument(
                "exponent must be nonnegative",
            ));
        }
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = p as u64;
        while exp > 0 {
            if exp & 1 == 1 {
                result = &result * &base;
            }
            base = &base * &base;
            exp >>= 1;
        }
        Ok(result)
    }

    /// Computes the greatest common divisor of the absolute values.
    /// The result is always non-negative.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.abs();
        let mut b = other.abs();
        while !b.is_zero() {
            let r = &a % &b;
            a = b;
            b = r;
        }
        a
    }

    /// Folds [`Mp::gcd`] across a collection.
    ///
    /// An empty slice yields zero, the identity of the gcd fold, so a
    /// single-element slice returns that element's absolute value.
    #[must_use]
    pub fn gcd_many(values: &[Self]) -> Self {
        values.iter().fold(Self::zero(), |acc, v| acc.gcd(v))
    }

    /// Restores the storage invariant after an arithmetic pass: trims
    /// most-significant zero chunks and clears the sign of zero.
    fn normalize(&mut self) {
        while self.chunks.len() > 1 && self.chunks.last() == Some(&0) {
            self.chunks.pop();
        }
        if self.chunks.is_empty() {
            self.chunks.push(0);
        }
        if self.chunks.len() == 1 && self.chunks[0] == 0 {
            self.negative = false;
        }
    }
}

impl Default for Mp {
    fn default() -> Self {
        Self::zero()
    }
}

/// Compares two trimmed magnitudes, most significant chunk first.
fn cmp_magnitude(a: &[u32], b: &[u32]) -> Ordering {
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }
    for i in (0..a.len()).rev() {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => {}
            other => return other,
        }
    }
    Ordering::Equal
}

fn add_magnitude(a: &[u32], b: &[u32]) -> Vec<u32> {
    let len = a.len().max(b.len());
    let mut out = Vec::with_capacity(len + 1);
    let mut carry = 0u64;
    for i in 0..len {
        let sum = carry
            + u64::from(a.get(i).copied().unwrap_or(0))
            + u64::from(b.get(i).copied().unwrap_or(0));
        out.push((sum % CHUNK_BASE) as u32);
        carry = sum / CHUNK_BASE;
    }
    if carry > 0 {
        out.push(carry as u32);
    }
    out
}

/// Subtracts `b` from `a` chunk-wise. Requires `a >= b` in magnitude.
fn sub_magnitude(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0i64;
    for i in 0..a.len() {
        let mut diff = i64::from(a[i]) - borrow - i64::from(b.get(i).copied().unwrap_or(0));
        if diff < 0 {
            diff += CHUNK_BASE as i64;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(diff as u32);
    }
    out
}

fn mul_magnitude(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut acc = vec![0u64; a.len() + b.len()];
    for (i, &ai) in a.iter().enumerate() {
        let mut carry = 0u64;
        for (j, &bj) in b.iter().enumerate() {
            let t = acc[i + j] + u64::from(ai) * u64::from(bj) + carry;
            acc[i + j] = t % CHUNK_BASE;
            carry = t / CHUNK_BASE;
        }
        let mut k = i + b.len();
        while carry > 0 {
            let t = acc[k] + carry;
            acc[k] = t % CHUNK_BASE;
            carry = t / CHUNK_BASE;
            k += 1;
        }
    }
    acc.into_iter().map(|c| c as u32).collect()
}

/// Multiplies a trimmed magnitude by a single chunk-sized factor,
/// returning a trimmed magnitude.
fn mul_magnitude_small(a: &[u32], m: u64) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len() + 2);
    let mut carry = 0u64;
    for &ai in a {
        let t = u64::from(ai) * m + carry;
        out.push((t % CHUNK_BASE) as u32);
        carry = t / CHUNK_BASE;
    }
    while carry > 0 {
        out.push((carry % CHUNK_BASE) as u32);
        carry /= CHUNK_BASE;
    }
    trim_magnitude(&mut out);
    out
}

fn trim_magnitude(chunks: &mut Vec<u32>) {
    while chunks.len() > 1 && chunks.last() == Some(&0) {
        chunks.pop();
    }
    if chunks.is_empty() {
        chunks.push(0);
    }
}

/// Schoolbook long division over magnitudes, producing quotient and
/// remainder in one pass. Each quotient chunk is found by binary search
/// on `b * q <= rem`. Requires `b` nonzero.
fn div_rem_magnitude(a: &[u32], b: &[u32]) -> (Vec<u32>, Vec<u32>) {
    let mut quotient = vec![0u32; a.len()];
    let mut rem: Vec<u32> = vec![0];
    for i in (0..a.len()).rev() {
        // rem = rem * CHUNK_BASE + a[i]
        if rem.len() == 1 && rem[0] == 0 {
            rem[0] = a[i];
        } else {
            rem.insert(0, a[i]);
        }
        let (mut lo, mut hi) = (0u64, CHUNK_BASE - 1);
        while lo < hi {
            let mid = (lo + hi + 1) / 2;
            if cmp_magnitude(&mul_magnitude_small(b, mid), &rem) == Ordering::Greater {
                hi = mid - 1;
            } else {
                lo = mid;
            }
        }
        quotient[i] = lo as u32;
        if lo > 0 {
            rem = sub_magnitude(&rem, &mul_magnitude_small(b, lo));
            trim_magnitude(&mut rem);
        }
    }
    trim_magnitude(&mut quotient);
    (quotient, rem)
}

fn add_signed(lhs: &Mp, rhs: &Mp) -> Mp {
    let mut out = if lhs.negative == rhs.negative {
        Mp {
            chunks: add_magnitude(&lhs.chunks, &rhs.chunks),
            negative: lhs.negative,
        }
    } else {
        match cmp_magnitude(&lhs.chunks, &rhs.chunks) {
            Ordering::Less => Mp {
                chunks: sub_magnitude(&rhs.chunks, &lhs.chunks),
                negative: rhs.negative,
            },
            _ => Mp {
                chunks: sub_magnitude(&lhs.chunks, &rhs.chunks),
                negative: lhs.negative,
            },
        }
    };
    out.normalize();
    out
}

impl Zero for Mp {
    fn zero() -> Self {
        Self {
            chunks: vec![0],
            negative: false,
        }
    }

    fn is_zero(&self) -> bool {
        self.chunks.len() == 1 && self.chunks[0] == 0
    }
}

impl One for Mp {
    fn one() -> Self {
        Self {
            chunks: vec![1],
            negative: false,
        }
    }

    fn is_one(&self) -> bool {
        !self.negative && self.chunks.len() == 1 && self.chunks[0] == 1
    }
}

impl Ord for Mp {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => cmp_magnitude(&self.chunks, &other.chunks),
            (true, true) => cmp_magnitude(&other.chunks, &self.chunks),
        }
    }
}

impl PartialOrd for Mp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Mp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mp({self})")
    }
}

impl fmt::Display for Mp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        let mut chunks = self.chunks.iter().rev();
        if let Some(top) = chunks.next() {
            write!(f, "{top}")?;
        }
        for chunk in chunks {
            write!(f, "{chunk:0width$}", width = CHUNK_DIGITS)?;
        }
        Ok(())
    }
}

// Arithmetic operations
impl Add for Mp {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        add_signed(&self, &rhs)
    }
}

impl Add<&Mp> for Mp {
    type Output = Self;

    fn add(self, rhs: &Mp) -> Self::Output {
        add_signed(&self, rhs)
    }
}

impl Add for &Mp {
    type Output = Mp;

    fn add(self, rhs: Self) -> Self::Output {
        add_signed(self, rhs)
    }
}

impl Sub for Mp {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        add_signed(&self, &(-rhs))
    }
}

impl Sub<&Mp> for Mp {
    type Output = Self;

    fn sub(self, rhs: &Mp) -> Self::Output {
        add_signed(&self, &(-rhs))
    }
}

impl Sub for &Mp {
    type Output = Mp;

    fn sub(self, rhs: Self) -> Self::Output {
        add_signed(self, &(-rhs))
    }
}

impl Mul for Mp {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<&Mp> for Mp {
    type Output = Self;

    fn mul(self, rhs: &Mp) -> Self::Output {
        &self * rhs
    }
}

impl Mul for &Mp {
    type Output = Mp;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut out = Mp {
            chunks: mul_magnitude(&self.chunks, &rhs.chunks),
            negative: self.negative != rhs.negative,
        };
        out.normalize();
        out
    }
}

impl Div for Mp {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`Mp::checked_div`] to handle that
    /// case explicitly.
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(&rhs).expect("division by zero")
    }
}

impl Div for &Mp {
    type Output = Mp;

    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`Mp::checked_div`] to handle that
    /// case explicitly.
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).expect("division by zero")
    }
}

impl Rem for Mp {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`Mp::checked_rem`] to handle that
    /// case explicitly.
    fn rem(self, rhs: Self) -> Self::Output {
        self.checked_rem(&rhs).expect("division by zero")
    }
}

impl Rem for &Mp {
    type Output = Mp;

    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`Mp::checked_rem`] to handle that
    /// case explicitly.
    fn rem(self, rhs: Self) -> Self::Output {
        self.checked_rem(rhs).expect("division by zero")
    }
}

impl Neg for Mp {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
        self
    }
}

impl Neg for &Mp {
    type Output = Mp;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl From<i32> for Mp {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<i64> for Mp {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<u64> for Mp {
    fn from(value: u64) -> Self {
        Self::from_magnitude(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_ops() {
        let a = Mp::new(10);
        let b = Mp::new(3);

        assert_eq!((a.clone() + b.clone()).to_int(), 13);
        assert_eq!((a.clone() - b.clone()).to_int(), 7);
        assert_eq!((a.clone() * b.clone()).to_int(), 30);
        assert_eq!((a.clone() / b.clone()).to_int(), 3);
        assert_eq!((a % b).to_int(), 1);
    }

    #[test]
    fn test_carry_across_chunks() {
        let sum = Mp::new(99_999) + Mp::new(1);
        assert_eq!(sum, Mp::new(100_000));
        assert_eq!(sum.to_string(), "100000");

        let boundary = Mp::new(999_999) + Mp::new(1);
        assert_eq!(boundary, Mp::new(1_000_000));
        assert_eq!(boundary.to_string(), "1000000");
    }

    #[test]
    fn test_display() {
        assert_eq!(Mp::new(0).to_string(), "0");
        assert_eq!(Mp::new(-42).to_string(), "-42");
        assert_eq!(Mp::new(1_000_001).to_string(), "1000001");
        assert_eq!(Mp::new(i64::MAX).to_string(), "9223372036854775807");
        assert_eq!(Mp::new(i64::MIN).to_string(), "-9223372036854775808");
    }

    #[test]
    fn test_large_product() {
        let a = Mp::new(123_456_789_012_345);
        let b = Mp::new(987_654_321_098_765);
        let product = &a * &b;
        assert_eq!(product.to_string(), "121932631137021071359549253925");
        assert_eq!(&product / &b, a);
        assert_eq!(&product % &b, Mp::new(0));
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        let cases = [(7i64, 2i64), (-7, 2), (7, -2), (-7, -2), (6, 3), (-6, 3)];
        for (a, b) in cases {
            let (q, r) = Mp::new(a).div_rem(&Mp::new(b)).unwrap();
            assert_eq!(q, Mp::new(a / b), "quotient of {a}/{b}");
            assert_eq!(r, Mp::new(a % b), "remainder of {a}/{b}");
        }
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            Mp::new(5).div_rem(&Mp::new(0)),
            Err(ArithmeticError::DivisionByZero)
        );
        assert_eq!(
            Mp::new(5).checked_rem(&Mp::new(0)),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn test_comparisons() {
        let mut values = vec![Mp::new(3), Mp::new(-5), Mp::new(0), Mp::new(-3), Mp::new(5)];
        values.sort();
        assert_eq!(
            values,
            vec![Mp::new(-5), Mp::new(-3), Mp::new(0), Mp::new(3), Mp::new(5)]
        );
        assert!(Mp::new(1_000_000) > Mp::new(999_999));
        assert!(Mp::new(-1_000_000) < Mp::new(-999_999));
    }

    #[test]
    fn test_digits() {
        let n = Mp::new(1_234_567);
        assert_eq!(n.get_digit(0), 7);
        assert_eq!(n.get_digit(6), 1);
        assert_eq!(n.get_digit(7), 0);
        assert_eq!(n.num_digits(), 7);
        assert_eq!(Mp::new(0).num_digits(), 1);
        assert_eq!(Mp::new(999_999).num_digits(), 6);
    }

    #[test]
    fn test_set_digit() {
        let mut n = Mp::new(5);
        n.set_digit(0, 7).unwrap();
        assert_eq!(n, Mp::new(7));

        n.set_digit(7, 3).unwrap();
        assert_eq!(n, Mp::new(30_000_007));
        assert_eq!(n.get_digit(7), 3);

        assert_eq!(
            n.set_digit(0, 10),
            Err(ArithmeticError::InvalidArgument(
                "digit value must be between 0 and 9"
            ))
        );

        let mut top = Mp::new(1_000_000);
        top.set_digit(6, 0).unwrap();
        assert_eq!(top, Mp::new(0));
    }

    #[test]
    fn test_to_int() {
        assert_eq!(Mp::new(123).to_int(), 123);
        assert_eq!(Mp::new(8_000_003).to_int(), 3);
        assert_eq!(Mp::new(-8_000_003).to_int(), -3);
    }

    #[test]
    fn test_pow() {
        assert_eq!(Mp::new(2).pow(10).unwrap(), Mp::new(1024));
        assert_eq!(Mp::new(7).pow(0).unwrap(), Mp::new(1));
        assert_eq!(Mp::new(0).pow(0).unwrap(), Mp::new(1));
        assert_eq!(Mp::new(-2).pow(3).unwrap(), Mp::new(-8));
        assert!(Mp::new(2).pow(-1).is_err());

        let big = Mp::new(10).pow(30).unwrap();
        assert_eq!(big.num_digits(), 31);
    }

    #[test]
    fn test_gcd() {
        assert_eq!(Mp::new(48).gcd(&Mp::new(18)), Mp::new(6));
        assert_eq!(Mp::new(-48).gcd(&Mp::new(18)), Mp::new(6));
        assert_eq!(Mp::new(0).gcd(&Mp::new(-7)), Mp::new(7));
        assert_eq!(Mp::gcd_many(&[]), Mp::new(0));
        assert_eq!(
            Mp::gcd_many(&[Mp::new(12), Mp::new(18), Mp::new(30)]),
            Mp::new(6)
        );
    }

    #[test]
    fn test_additive_inverse() {
        let a = Mp::new(123_456_789);
        assert_eq!(&a + &(-&a), Mp::new(0));
        assert_eq!(&a - &a, Mp::new(0));
        assert!(Mp::new(-3).abs() >= Mp::new(0));
        assert_eq!(-Mp::new(0), Mp::new(0));
    }

    #[test]
    fn test_to_f64() {
        assert!((Mp::new(1_500_000).to_f64() - 1_500_000.0).abs() < f64::EPSILON);
        assert!(Mp::new(-2).to_f64() < 0.0);
    }
}
