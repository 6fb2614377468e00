//! Feed source trait (port) - where the raw ban list comes from
//!
//! The domain layer defines what it needs; the infrastructure layer provides the
//! HTTP implementation, and tests provide in-memory ones.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::feed::FeedTable;

/// Result type for feed retrieval
pub type FetchResult<T> = Result<T, FetchError>;

#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Retrieve and read the whole feed document
    ///
    /// Every call performs a fresh retrieval; implementations must not cache.
    async fn fetch(&self) -> FetchResult<FeedTable>;

    /// Human-readable location of the feed, for diagnostics
    fn location(&self) -> &str;
}
