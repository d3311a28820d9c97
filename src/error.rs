use thiserror::Error;

/// Errors raised when an exercise is called outside its preconditions.
#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot reduce an empty sequence")]
    EmptyInput,

    #[error("invalid float range step {step}: step must be finite and non-zero")]
    InvalidStep { step: f64 },

    #[error("invalid float range bounds {start}..{stop}: bounds must be finite")]
    InvalidBounds { start: f64, stop: f64 },

    #[error("team '{0}' appears more than once")]
    DuplicateTeam(String),

    #[error("term {index} does not fit in the term type")]
    Overflow { index: usize },

    #[error("invalid recurrence config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to serialize fixtures: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
