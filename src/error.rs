//! Custom error types for trippicker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The message shown when required registration fields are missing
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";

/// The main error type for trippicker operations
#[derive(Error, Debug)]
pub enum TrippickerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for registration input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Staged-data storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl TrippickerError {
    /// The submit-time error for an empty admin name or email
    pub fn missing_required_fields() -> Self {
        Self::Validation(REQUIRED_FIELDS_MESSAGE.to_string())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for TrippickerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrippickerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for trippicker operations
pub type TrippickerResult<T> = Result<T, TrippickerError>;
