//! Error types for the transcript summarizer.

use thiserror::Error;

/// Library-level error type for summarizer operations.
///
/// Every variant is fatal for the invocation that produced it.
#[derive(Error, Debug)]
pub enum SummarizerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid invocation event: {0}")]
    InvalidEvent(String),

    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    #[error("Object storage error: {0}")]
    Storage(String),

    #[error("Model invocation failed: {0}")]
    Model(String),

    #[error("Missing expected field: {0}")]
    MissingField(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias for summarizer operations.
pub type Result<T> = std::result::Result<T, SummarizerError>;
