//! Exact Arithmetic Examples
//!
//! Demonstrates the calculator core: multiple-precision integers,
//! reduced rationals, factorization and printing.
//!
//! Run with: cargo run --example calculator_arithmetic

use abacus::prelude::*;

// Helper to build rationals from machine integers
fn r(num: i64, denom: i64) -> Rational {
    Rational::from_i64(num, denom).expect("nonzero denominator")
}

fn main() -> Result<(), ArithmeticError> {
    println!("=== Multiple-precision integers ===");
    let big = Mp::new(2).pow(200)?;
    println!("2^200 = {big} ({} digits)", big.num_digits());

    let (squared, square_free) = Mp::new(720).separate_squared_part()?;
    println!("720 = {squared}^2 * {square_free}");

    println!("C(50, 25) = {}", Mp::binomial_coeff(50, 25));
    println!("gcd(123456, 7890) = {}", Mp::new(123_456).gcd(&Mp::new(7890)));

    println!("\n=== Exact rationals ===");
    let sum = r(1, 2) + r(1, 3);
    println!("1/2 + 1/3 = {}", sum.print(false));
    println!("4/6 reduces to {}", r(4, 6));
    println!("(2/3)^-2 = {}", r(2, 3).pow(-2)?);
    println!("60 factors as {}", r(60, 1).print_factors(false)?);
    println!("720/1001 factors as {}", r(720, 1001).print_factors(true)?);

    let (real, _imaginary) = sum.get();
    println!("5/6 is approximately {real}");

    Ok(())
}
