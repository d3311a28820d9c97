//! # Sequence Exercises
//!
//! Small, independent exercises built on iterator adapters and folds.
//!
//! ## Exercises
//!
//! 1. **Alternating reduce** - `((a0 + a1) * a2 + a3) * a4 + ...` with a fold
//! 2. **Contiguous subarrays** - every `array[i..j]` from pairs of boundaries
//! 3. **Second-order recurrences** - Fibonacci, Pell, Lucas and any
//!    `s(n) = p * s(n-1) + q * s(n-2) + r`
//! 4. **Float range** - `range` with a floating point step
//! 5. **Home and away matches** - every ordered pairing of teams, sorted
//!
//! ## Running Demos
//!
//! ```bash
//! cargo run --example alternate_reduce
//! cargo run --example contiguous_subarrays
//! cargo run --example recurrences
//! cargo run --example float_range
//! cargo run --example home_away_matches
//! ```
//!
//! ## Key Dependencies
//!
//! - `itertools` - combinations, permutations and sorting adapters
//! - `thiserror` - the crate [`Error`] type
//! - `serde`, `toml`, `serde_json` - recurrence configs and fixture export
//! - `tracing` - debug events for rejected inputs

pub mod alternate;
pub mod error;
pub mod fixtures;
pub mod float_range;
pub mod recurrence;
pub mod subarrays;

pub use alternate::alternate_reduce;
pub use error::{Error, Result};
pub use fixtures::{fixtures, fixtures_json, round_robin_pairs, Fixture};
pub use float_range::{float_range, FloatRange};
pub use recurrence::{fibonacci, lucas, pell, recurrence_sequence, Recurrence, SecondOrder, Term};
pub use subarrays::contiguous_subarrays;
