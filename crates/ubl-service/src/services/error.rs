//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use std::fmt;

use ubl_common::AppError;
use ubl_core::FetchError;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// The feed could not be retrieved
    Fetch(FetchError),

    /// The feed did not answer within the gate timeout
    Timeout { millis: u64 },

    /// Internal error
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(e) => write!(f, "{e}"),
            Self::Timeout { millis } => write!(f, "Ban list lookup timed out after {millis} ms"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Fetch(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a timeout error
    pub fn timeout(millis: u64) -> Self {
        Self::Timeout { millis }
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Check if the ban list was unreachable, as opposed to a local fault
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Fetch(_) | Self::Timeout { .. })
    }

    /// Get the error code for logs and structured output
    pub fn error_code(&self) -> &str {
        match self {
            Self::Fetch(e) => e.code(),
            Self::Timeout { .. } => "TIMEOUT",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<FetchError> for ServiceError {
    fn from(err: FetchError) -> Self {
        Self::Fetch(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Fetch(e) => AppError::Fetch(e),
            ServiceError::Timeout { millis } => AppError::Timeout(millis),
            ServiceError::Internal(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
