//! Value objects - the date and duration formats written in the ban list feed
//!
//! Both formats are symmetric: the same grammar is used to parse feed cells and to
//! render kick messages.

mod ban_date;
mod ban_length;

pub use ban_date::{BanDate, DateParseError};
pub use ban_length::{BanLength, LengthParseError, LengthUnit};
