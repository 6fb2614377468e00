//! Decode errors - why a feed row could not become a ban record

use thiserror::Error;

/// Row decoding errors
///
/// Every variant except `MissingColumn` carries the raw cell text that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    // =========================================================================
    // Structural Errors
    // =========================================================================
    #[error("Column not present in row: {0}")]
    MissingColumn(&'static str),

    // =========================================================================
    // Value Errors
    // =========================================================================
    #[error("Invalid player UUID: {0:?}")]
    InvalidIdentity(String),

    #[error("Invalid ban date: {0:?}")]
    InvalidDate(String),

    #[error("Invalid ban length: {0:?}")]
    InvalidDuration(String),

    #[error("Invalid expiry date: {0:?}")]
    InvalidExpiry(String),
}

impl DecodeError {
    /// Get an error code string for logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingColumn(_) => "MISSING_COLUMN",
            Self::InvalidIdentity(_) => "INVALID_IDENTITY",
            Self::InvalidDate(_) => "INVALID_DATE",
            Self::InvalidDuration(_) => "INVALID_DURATION",
            Self::InvalidExpiry(_) => "INVALID_EXPIRY",
        }
    }

    /// Check if the row shape itself was wrong
    pub fn is_missing_column(&self) -> bool {
        matches!(self, Self::MissingColumn(_))
    }
}
