// src/generator/error.rs

use thiserror::Error;

/// Everything that can stop a generation run.
#[derive(Debug, Error)]
pub enum CaveError {
    /// The configuration was rejected before generation started.
    #[error("invalid configuration: `{field}` {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// Region filtering removed every floor region, so there is no main room.
    #[error("no floor region reached the room threshold of {threshold} tiles")]
    NoSurvivingRooms { threshold: usize },

    /// The connector found no candidate pair while rooms were still unreachable.
    #[error("no connection candidate found while {inaccessible} room(s) remain inaccessible")]
    NoConnectionFound { inaccessible: usize },

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CaveError>;

impl CaveError {
    pub(crate) fn config(field: &'static str, reason: impl Into<String>) -> Self {
        CaveError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}
