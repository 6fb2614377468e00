//! # ubl-feed
//!
//! Feed layer implementing the `FeedSource` trait for HTTP(S) and local file URLs.
//!
//! ## Overview
//!
//! - Eager validation of the configured feed URL
//! - Shared HTTP client with connect and request timeouts
//! - Header-keyed CSV reading into a `FeedTable`
//! - `FeedFetcher`, the `FeedSource` implementation used in production
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ubl_core::FeedSource;
//! use ubl_feed::{create_client, FeedFetcher, FeedUrl, FetcherConfig};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let url = FeedUrl::parse("https://example.com/bans.csv")?;
//!     let client = create_client(&FetcherConfig::default())?;
//!     let table = FeedFetcher::new(url, client).fetch().await?;
//!     println!("{} rows", table.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod fetcher;
pub mod table;
pub mod url;

// Re-export commonly used types
pub use client::{create_client, FetcherConfig};
pub use fetcher::FeedFetcher;
pub use table::read_table;
pub use url::{FeedScheme, FeedUrl, FeedUrlError};
