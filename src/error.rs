// Typed errors with thiserror. Surface meaningful messages to JS.
// See steering.md: Rust Rules (Engine)

use thiserror::Error;

/// Engine error types.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid counter label '{label}': expected an integer with an optional '+' suffix")]
    InvalidCounterLabel { label: String },

    #[error("Invalid event batch: {0}")]
    InvalidEvents(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Serialization(err.to_string())
    }
}
