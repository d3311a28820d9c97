//! Exercise 3: Second-Order Recurrences
//! Example: Fibonacci, Pell and Lucas from one iterator
//!
//! Run with: cargo run --example recurrences

use sequence_exercises::{fibonacci, lucas, pell, recurrence_sequence, Error, Recurrence};

fn main() -> Result<(), Error> {
    println!("=== Presets ===\n");
    println!("Fibonacci: {:?}", fibonacci::<u64>().take(10).collect::<Vec<_>>());
    println!("Pell:      {:?}", pell::<u64>().take(10).collect::<Vec<_>>());
    println!("Lucas:     {:?}", lucas::<u64>().take(10).collect::<Vec<_>>());

    println!("\n=== Custom Coefficients ===");
    // s(n) = 3 * s(n-1) - 2 * s(n-2) + 1
    let custom: Vec<i64> = recurrence_sequence(3, -2, 1, (0, 1)).take(8).collect();
    println!("p=3, q=-2, r=1: {:?}", custom);

    println!("\n=== Overflow Handling ===");
    let count = fibonacci::<u64>().count();
    println!("Fibonacci numbers that fit in u64: {}", count);
    if let Some(last) = fibonacci::<u64>().last() {
        println!("Largest: {}", last);
    }

    println!("\n=== From TOML ===");
    let source = "p = 1\nq = 1\nr = 0\ninitial = [2, 1]\n";
    let lucas_config = Recurrence::<i64>::from_toml_str(source)?;
    println!("{:?}", lucas_config);
    println!("L(20) = {}", lucas_config.nth_term(20)?);

    Ok(())
}
