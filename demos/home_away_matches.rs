//! Exercise 5: Home and Away Matches
//! Example: Every ordered pairing of teams, sorted
//!
//! Run with: cargo run --example home_away_matches

use sequence_exercises::{fixtures, fixtures_json, round_robin_pairs, Error};

fn main() -> Result<(), Error> {
    println!("=== Round Robin ===\n");

    let teams = ["Liverpool", "Arsenal", "Chelsea"];
    for (home, away) in round_robin_pairs(&teams)? {
        println!("  ({}, {})", home, away);
    }

    println!("\n=== Fixtures ===");
    for fixture in fixtures(&teams)? {
        println!("  {}", fixture);
    }

    println!("\n=== JSON ===");
    println!("{}", fixtures_json(&teams)?);

    println!("\n=== Duplicate Team ===");
    match round_robin_pairs(&["Arsenal", "Arsenal"]) {
        Ok(pairs) => println!("  unexpected {:?}", pairs),
        Err(e) => println!("  error: {}", e),
    }

    Ok(())
}
