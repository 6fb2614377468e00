//! Feed URL validation
//!
//! The URL is checked once at startup so a typo in the configuration fails fast
//! instead of surfacing as a fetch failure on every login.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use reqwest::Url;

/// Transport used to retrieve the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedScheme {
    /// `http` or `https`
    Http,
    /// `file`, a local copy of the feed
    File,
}

/// A validated feed location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedUrl {
    url: Url,
    scheme: FeedScheme,
}

impl FeedUrl {
    /// Parse and validate a feed URL
    pub fn parse(s: &str) -> Result<Self, FeedUrlError> {
        let url = Url::parse(s.trim()).map_err(|e| FeedUrlError::Malformed {
            url: s.to_string(),
            reason: e.to_string(),
        })?;

        let scheme = match url.scheme() {
            "http" | "https" => FeedScheme::Http,
            "file" if url.to_file_path().is_ok() => FeedScheme::File,
            "file" => return Err(FeedUrlError::NotLocalPath(url.to_string())),
            other => return Err(FeedUrlError::UnsupportedScheme(other.to_string())),
        };

        Ok(Self { url, scheme })
    }

    #[inline]
    pub fn scheme(&self) -> FeedScheme {
        self.scheme
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    pub fn as_url(&self) -> &Url {
        &self.url
    }

    /// Local path for `file` URLs
    pub fn to_file_path(&self) -> Option<PathBuf> {
        match self.scheme {
            FeedScheme::File => self.url.to_file_path().ok(),
            FeedScheme::Http => None,
        }
    }
}

/// Feed URL validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedUrlError {
    #[error("malformed feed URL {url:?}: {reason}")]
    Malformed { url: String, reason: String },

    #[error("unsupported feed URL scheme {0:?} (expected http, https or file)")]
    UnsupportedScheme(String),

    #[error("feed file URL {0:?} does not name a local path")]
    NotLocalPath(String),
}

impl fmt::Display for FeedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedUrl {
    type Err = FeedUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
