//! Application error types
//!
//! Unified error handling for the command-line front end.

use serde::Serialize;
use std::fmt;
use ubl_core::FetchError;

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Startup errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid feed URL: {0}")]
    InvalidFeedUrl(String),

    // Input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Feed errors
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Timed out after {0} ms")]
    Timeout(u64),

    // Internal errors
    #[error("Internal error")]
    Internal(#[source] anyhow::Error),
}

impl AppError {
    /// Process exit status for this error (sysexits.h values)
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            // EX_USAGE
            Self::InvalidInput(_) => 64,

            // EX_UNAVAILABLE / EX_TEMPFAIL
            Self::Fetch(_) => 69,
            Self::Timeout(_) => 75,

            // EX_SOFTWARE
            Self::Internal(_) => 70,

            // EX_CONFIG
            Self::Config(_) | Self::InvalidFeedUrl(_) => 78,
        }
    }

    /// Get error code for structured output
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::InvalidFeedUrl(_) => "INVALID_FEED_URL",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Fetch(e) => e.code(),
            Self::Timeout(_) => "TIMEOUT",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Create an invalid input error
    #[must_use]
    pub fn invalid_input(msg: impl fmt::Display) -> Self {
        Self::InvalidInput(msg.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Error structure for JSON output
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        let details = match err {
            AppError::Fetch(FetchError::BadStatus(status)) => {
                Some(serde_json::json!({ "status": status }))
            }
            _ => None,
        };

        Self {
            code: err.error_code().to_string(),
            message: err.to_string(),
            details,
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
