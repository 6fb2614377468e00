//! Fetch errors - the feed as a whole could not be retrieved

use thiserror::Error;

/// Feed retrieval errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The server answered with anything other than 200 OK; the body is not read
    #[error("Feed returned non-OK status {0}")]
    BadStatus(u16),

    /// Connection, timeout, stream or document-level read failure
    #[error("Feed I/O failure: {0}")]
    IoFailure(String),
}

impl FetchError {
    /// Create an I/O failure from anything displayable
    pub fn io(detail: impl std::fmt::Display) -> Self {
        Self::IoFailure(detail.to_string())
    }

    /// Get an error code string for logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadStatus(_) => "FEED_BAD_STATUS",
            Self::IoFailure(_) => "FEED_IO_FAILURE",
        }
    }

    /// HTTP status returned by the feed, if it answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadStatus(code) => Some(*code),
            Self::IoFailure(_) => None,
        }
    }
}
