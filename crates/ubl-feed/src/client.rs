//! HTTP client construction

use std::time::Duration;

use reqwest::Client;
use ubl_common::FeedConfig;

/// Transport settings for the feed client
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Maximum time to establish a connection
    pub connect_timeout: Duration,
    /// Maximum time for the whole request, body included
    pub request_timeout: Duration,
    /// `User-Agent` header sent with every request
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

impl From<&FeedConfig> for FetcherConfig {
    fn from(config: &FeedConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(config.connect_timeout_secs),
            request_timeout: Duration::from_secs(config.request_timeout_secs),
            ..Default::default()
        }
    }
}

/// Create the HTTP client shared by every fetch
///
/// The client pools connections but holds no feed data between calls.
pub fn create_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(config.connect_timeout)
        .timeout(config.request_timeout)
        .user_agent(config.user_agent.as_str())
        .build()
}
