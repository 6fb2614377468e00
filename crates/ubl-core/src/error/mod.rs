//! Domain errors

mod decode_error;
mod fetch_error;

pub use decode_error::DecodeError;
pub use fetch_error::FetchError;
