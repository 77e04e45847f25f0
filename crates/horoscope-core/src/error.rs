//! Error types for horoscope-core.
//!
//! The computation engine itself never returns these: contract violations
//! (negative day counts, out-of-range phase indices) panic. `EngineError`
//! covers configuration loading and the calling-layer validators in
//! [`crate::validation`].

use thiserror::Error;

/// Top-level error type for horoscope-core.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Validation error: {field} - {message}")]
    ValidationError { field: String, message: String },

    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },

    #[error("Date {date} is outside the supported range {min}..={max}")]
    DateOutOfRange {
        date: String,
        min: String,
        max: String,
    },

    #[error("Unsupported range length: {0} (allowed: 7, 30)")]
    InvalidRangeLength(u32),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl EngineError {
    /// Shorthand for a field-level validation failure.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::SerializationError(err.to_string())
    }
}

impl From<config::ConfigError> for EngineError {
    fn from(err: config::ConfigError) -> Self {
        EngineError::ConfigError(err.to_string())
    }
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
