//! Home and away fixtures between every pair of teams.

use std::fmt;

use itertools::Itertools;
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// One match of the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Fixture<'a> {
    pub home: &'a str,
    pub away: &'a str,
}

impl fmt::Display for Fixture<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.home, self.away)
    }
}

/// Every ordered `(home, away)` pair of distinct teams, sorted
/// lexicographically.
///
/// `n` teams play `n * (n - 1)` matches. Repeated names are rejected with
/// [`Error::DuplicateTeam`].
///
/// ```
/// use sequence_exercises::round_robin_pairs;
///
/// let pairs = round_robin_pairs(&["Chelsea", "Arsenal"]).unwrap();
/// assert_eq!(pairs, vec![("Arsenal", "Chelsea"), ("Chelsea", "Arsenal")]);
/// ```
pub fn round_robin_pairs<S: AsRef<str>>(teams: &[S]) -> Result<Vec<(&str, &str)>> {
    if let Some(team) = teams.iter().map(AsRef::as_ref).duplicates().next() {
        debug!(team, "duplicate team in round robin");
        return Err(Error::DuplicateTeam(team.to_string()));
    }

    let pairs = teams
        .iter()
        .map(AsRef::as_ref)
        .permutations(2)
        .map(|pair| (pair[0], pair[1]))
        .sorted()
        .collect();
    Ok(pairs)
}

/// [`round_robin_pairs`] as [`Fixture`] records.
pub fn fixtures<S: AsRef<str>>(teams: &[S]) -> Result<Vec<Fixture<'_>>> {
    let fixtures = round_robin_pairs(teams)?
        .into_iter()
        .map(|(home, away)| Fixture { home, away })
        .collect();
    Ok(fixtures)
}

/// The schedule as a JSON array of `{"home": .., "away": ..}` objects.
pub fn fixtures_json<S: AsRef<str>>(teams: &[S]) -> Result<String> {
    Ok(serde_json::to_string(&fixtures(teams)?)?)
}
