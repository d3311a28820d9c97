//! Exercise 2: Contiguous Subarrays
//! Example: Every `array[i..j]` from pairs of boundary indices
//!
//! Run with: cargo run --example contiguous_subarrays

use sequence_exercises::contiguous_subarrays;

fn main() {
    println!("=== Contiguous Subarrays ===\n");

    let array = [1, 2, 3];
    for sub in contiguous_subarrays(&array) {
        println!("  {:?}", sub);
    }

    println!("\n=== Counting ===");
    for n in 0..6 {
        let data: Vec<usize> = (0..n).collect();
        println!("  n = {} -> {} subarrays", n, contiguous_subarrays(&data).count());
    }

    println!("\n=== Maximum Subarray Sum (brute force) ===");
    let prices = [-2, 1, -3, 4, -1, 2, 1, -5, 4];
    let best = contiguous_subarrays(&prices)
        .max_by_key(|sub| sub.iter().sum::<i32>())
        .unwrap_or(&[]);
    println!("  best: {:?} (sum {})", best, best.iter().sum::<i32>());
}
