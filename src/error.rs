//! Custom error types for Tally
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Tally operations
#[derive(Error, Debug)]
pub enum TallyError {
    /// A category name was empty after trimming
    #[error("Category name cannot be empty")]
    EmptyName,

    /// A category with the same name already exists
    #[error("Category already exists: {0}")]
    DuplicateCategory(String),

    /// An amount was not a number, was zero or negative, or was too large
    #[error("Invalid amount '{0}': must be a number greater than zero and at most 10000000000.00")]
    InvalidAmount(String),

    /// A category name did not resolve to an existing category
    #[error("Category not found: {0}")]
    UnknownCategory(String),

    /// The store rejected a write that breaks a constraint
    #[error("Integrity violation: {0}")]
    IntegrityViolation(String),

    /// The schema definition file could not be found at startup
    #[error("Schema file not found: {0}. Run 'tally init' first")]
    SchemaMissing(String),

    /// Other database failures
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl TallyError {
    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UnknownCategory(_))
    }

    /// Check if this error was caused by caller input rather than the store
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyName
                | Self::DuplicateCategory(_)
                | Self::InvalidAmount(_)
                | Self::UnknownCategory(_)
        )
    }
}

impl From<rusqlite::Error> for TallyError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(code, message)
                if code.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Self::IntegrityViolation(message.unwrap_or_else(|| code.to_string()))
            }
            other => Self::Storage(other.to_string()),
        }
    }
}

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TallyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for TallyError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for Tally operations
pub type TallyResult<T> = Result<T, TallyError>;
