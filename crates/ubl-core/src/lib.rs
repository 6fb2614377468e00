//! # ubl-core
//!
//! Domain layer containing the ban record entity, the date and duration formats used by the
//! ban list feed, the row decoder, and the feed source trait.
//! This crate has zero dependencies on infrastructure (HTTP client, CSV reader, etc.).

pub mod decoder;
pub mod entities;
pub mod error;
pub mod feed;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use decoder::{decode, COLUMNS, NEVER_EXPIRES, PERMANENT_LENGTH};
pub use entities::BanRecord;
pub use error::{DecodeError, FetchError};
pub use feed::{FeedRow, FeedTable};
pub use traits::{FeedSource, FetchResult};
pub use value_objects::{BanDate, BanLength, DateParseError, LengthParseError, LengthUnit};
