//! Traits (ports) implemented by the infrastructure layer

mod feed_source;

pub use feed_source::{FeedSource, FetchResult};
