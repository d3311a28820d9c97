//! Exercise 4: Float Range
//! Example: `range` with a floating point step
//!
//! Run with: cargo run --example float_range

use sequence_exercises::{float_range, Error};

fn main() -> Result<(), Error> {
    println!("=== Float Range ===\n");

    let values: Vec<f64> = float_range(0.0, 1.0, 0.25)?.collect();
    assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75]);
    println!("float_range(0.0, 1.0, 0.25) = {:?}", values);

    println!("\n=== Counting Down ===");
    let down: Vec<f64> = float_range(1.0, 0.0, -0.3)?.collect();
    println!("float_range(1.0, 0.0, -0.3) = {:?}", down);

    println!("\n=== Tenths Without Drift ===");
    let tenths: Vec<f64> = float_range(0.0, 1.0, 0.1)?.collect();
    if let Some(last) = tenths.last() {
        println!("{} values, last = {}", tenths.len(), last);
    }

    println!("\n=== Zero Step ===");
    match float_range(0.0, 1.0, 0.0) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  error: {}", e),
    }

    Ok(())
}
