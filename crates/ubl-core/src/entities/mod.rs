//! Domain entities

mod ban_record;

pub use ban_record::BanRecord;
