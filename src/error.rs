//! Custom error types for stashflow
//!
//! This module defines the error hierarchy for the engine and its command-line
//! front end using thiserror for ergonomic error definitions.

use thiserror::Error;

/// The main error type for stashflow operations
#[derive(Error, Debug)]
pub enum StashError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors for input records
    #[error("Validation error: {0}")]
    Validation(String),

    /// A cadence keyword the engine does not recognize (strict policy only)
    #[error("Invalid cadence '{cadence}' on {line}")]
    InvalidCadence { cadence: String, line: String },

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Free-tier count limit exceeded (only raised when the caller enforces limits)
    #[error("Plan limit exceeded: {0}")]
    LimitExceeded(String),
}

impl StashError {
    /// Create an invalid cadence error for a named line item
    pub fn invalid_cadence(cadence: impl Into<String>, line: impl Into<String>) -> Self {
        Self::InvalidCadence {
            cadence: cadence.into(),
            line: line.into(),
        }
    }

    /// Check if this is an invalid cadence error
    pub fn is_invalid_cadence(&self) -> bool {
        matches!(self, Self::InvalidCadence { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for StashError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StashError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for StashError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<crate::models::InputValidationError> for StashError {
    fn from(err: crate::models::InputValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type alias for stashflow operations
pub type StashResult<T> = Result<T, StashError>;
