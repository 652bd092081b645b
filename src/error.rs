use std::time::Duration;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SkillError>;

/// Failures that can occur while answering a skill request.
#[derive(Error, Debug)]
pub enum SkillError {
    /// The event was sent by a skill other than the configured one.
    #[error("Invalid application id: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Schedule store unavailable: {0}")]
    StoreUnavailable(String),

    /// A game record whose date or time could not be read.
    #[error("Could not parse game {game}: {reason}")]
    Parse { game: String, reason: String },

    #[error("Malformed season record: {0}")]
    MalformedRecord(String),

    #[error("Schedule lookup timed out after {0:?}")]
    Timeout(Duration),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SkillError {
    /// Whether the dispatcher should answer with a spoken apology instead of
    /// failing the invocation.
    pub fn is_recoverable(&self) -> bool {
        match self {
            SkillError::NotFound(_)
            | SkillError::StoreUnavailable(_)
            | SkillError::Parse { .. }
            | SkillError::MalformedRecord(_)
            | SkillError::Timeout(_) => true,
            SkillError::Unauthorized(_) | SkillError::Config(_) => false,
        }
    }
}
