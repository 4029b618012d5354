//! Error types for the Mind Matters companion
//!
//! Scoring itself never fails; these errors cover the fallible edges of the
//! crate (configuration, catalog files, answer validation and storage).
//! Structured definitions use thiserror, propagation at the binary uses anyhow.

use thiserror::Error;

/// Main error type for Mind Matters operations
#[derive(Error, Debug)]
pub enum MindMattersError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML document could not be parsed
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Mood label outside the accepted vocabulary
    #[error("Invalid mood: {0}")]
    InvalidMood(String),

    /// Answer does not belong to the question it was given for
    #[error("Invalid answer for question {question_id}: {answer}")]
    InvalidAnswer { question_id: u32, answer: String },

    /// Not every question of the assessment was answered
    #[error("Assessment incomplete: missing answers for questions {0:?}")]
    IncompleteAssessment(Vec<u32>),

    /// Catalog data is malformed
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// User not found
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Resource already exists
    #[error("Resource already exists: {0}")]
    AlreadyExists(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Result type alias for Mind Matters operations
pub type Result<T> = std::result::Result<T, MindMattersError>;

/// Convert anyhow::Error to MindMattersError
impl From<anyhow::Error> for MindMattersError {
    fn from(err: anyhow::Error) -> Self {
        MindMattersError::Other(err.to_string())
    }
}
