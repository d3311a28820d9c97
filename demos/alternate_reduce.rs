//! Exercise 1: Alternating Reduce
//! Example: `((a0 + a1) * a2 + a3) * a4 + ...` with a single fold
//!
//! Run with: cargo run --example alternate_reduce

use sequence_exercises::{alternate_reduce, Error};

fn main() -> Result<(), Error> {
    println!("=== Alternating Reduce ===\n");

    let numbers = [1, 2, 3, 4, 5, 6];
    let value = alternate_reduce(&numbers)?;
    assert_eq!(value, 71);
    println!("{:?} -> {}", numbers, value);
    println!("  ((1 + 2) * 3 + 4) * 5 + 6 = 71");

    println!("\n=== Single Element ===");
    println!("[42] -> {}", alternate_reduce(&[42])?);

    println!("\n=== Floats ===");
    let floats = [1.5, 0.5, 4.0];
    println!("{:?} -> {}", floats, alternate_reduce(&floats)?);

    println!("\n=== Empty Input ===");
    let empty: [i32; 0] = [];
    match alternate_reduce(&empty) {
        Ok(v) => println!("  unexpected value {}", v),
        Err(e) => println!("  error: {}", e),
    }

    Ok(())
}
