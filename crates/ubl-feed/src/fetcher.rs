//! Feed fetcher - the production `FeedSource`

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};
use ubl_common::{AppError, AppResult, FeedConfig};
use ubl_core::{FeedSource, FeedTable, FetchError, FetchResult};

use crate::client::{create_client, FetcherConfig};
use crate::table::read_table;
use crate::url::{FeedScheme, FeedUrl};

/// Fetches the ban list document and reads it into a table
///
/// Every call performs a fresh retrieval. Nothing is cached.
#[derive(Debug, Clone)]
pub struct FeedFetcher {
    url: FeedUrl,
    client: Client,
}

impl FeedFetcher {
    /// Create a fetcher for a validated URL using an existing client
    pub fn new(url: FeedUrl, client: Client) -> Self {
        Self { url, client }
    }

    /// Create a fetcher from the `[feed]` settings
    ///
    /// # Errors
    /// Returns `AppError::InvalidFeedUrl` if the configured URL does not validate
    pub fn from_config(config: &FeedConfig) -> AppResult<Self> {
        let url = FeedUrl::parse(config.url())
            .map_err(|e| AppError::InvalidFeedUrl(e.to_string()))?;
        let client = create_client(&FetcherConfig::from(config)).map_err(AppError::internal)?;

        Ok(Self::new(url, client))
    }

    pub fn url(&self) -> &FeedUrl {
        &self.url
    }

    async fn fetch_http(&self) -> FetchResult<Vec<u8>> {
        let response = self
            .client
            .get(self.url.as_url().clone())
            .send()
            .await
            .map_err(FetchError::io)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::BadStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(FetchError::io)?;
        Ok(body.to_vec())
    }

    async fn fetch_file(&self) -> FetchResult<Vec<u8>> {
        let path = self
            .url
            .to_file_path()
            .ok_or_else(|| FetchError::io(format!("not a local path: {}", self.url)))?;

        tokio::fs::read(&path)
            .await
            .map_err(|e| FetchError::io(format!("{}: {e}", path.display())))
    }
}

#[async_trait]
impl FeedSource for FeedFetcher {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> FetchResult<FeedTable> {
        let body = match self.url.scheme() {
            FeedScheme::Http => self.fetch_http().await?,
            FeedScheme::File => self.fetch_file().await?,
        };

        let table = read_table(&body)?;

        debug!(bytes = body.len(), rows = table.len(), "Feed fetched");

        Ok(table)
    }

    fn location(&self) -> &str {
        self.url.as_str()
    }
}
