use thiserror::Error;

use crate::models::MatchStatus;

#[derive(Error, Debug)]
pub enum SimulationError {
    /// Lifecycle call made in the wrong state (double start, ticking before start).
    #[error("Invalid simulation state: {status:?}")]
    InvalidState { status: MatchStatus },

    /// The clock was advanced after it had already signalled the end of the match.
    #[error("Clock already finished at minute {minute}")]
    InvalidTick { minute: u8 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchema { found: u8, expected: u8 },

    /// Serialized match state that could not have come from a real run.
    #[error("Invalid match snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimulationError {
    /// Usage errors come from the caller driving the engine incorrectly.
    /// Everything else is a rejected input.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, SimulationError::InvalidState { .. } | SimulationError::InvalidTick { .. })
    }
}

pub type Result<T> = std::result::Result<T, SimulationError>;
