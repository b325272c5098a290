//! Error handling module for the Gourmet core.
//!
//! Provides a single error type with stable error codes. None of these errors
//! is fatal: callers decide how each one is presented.

use thiserror::Error;

use crate::validation::ValidationResult;

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const LOAD_ERROR: &str = "LOAD_ERROR";
    pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
}

/// Application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// One or more form fields failed validation; submission is blocked.
    #[error("{} field(s) failed validation", .0.errors.len())]
    Validation(ValidationResult),
    /// Menu data could not be fetched or parsed.
    #[error("{0}")]
    Load(String),
    /// The local store could not be read or written.
    #[error("{0}")]
    Storage(String),
    /// Invalid configuration value
    #[error("{0}")]
    Config(String),
}

impl AppError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => codes::VALIDATION_ERROR,
            AppError::Load(_) => codes::LOAD_ERROR,
            AppError::Storage(_) => codes::STORAGE_ERROR,
            AppError::Config(_) => codes::CONFIG_ERROR,
        }
    }

    /// Per-field messages when this is a validation failure.
    pub fn validation(&self) -> Option<&ValidationResult> {
        match self {
            AppError::Validation(result) => Some(result),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Storage error: {:?}", err);
        AppError::Storage(format!("Storage error: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("Menu transport error: {:?}", err);
        AppError::Load(format!("Menu transport error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        AppError::Load(format!("JSON error: {}", err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("I/O error: {:?}", err);
        AppError::Load(format!("I/O error: {}", err))
    }
}
