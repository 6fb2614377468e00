//! Record decoder - turns one raw feed row into a `BanRecord`
//!
//! Decoding is all-or-nothing: the first failing field rejects the whole row.

use uuid::Uuid;

use crate::entities::BanRecord;
use crate::error::DecodeError;
use crate::feed::FeedRow;
use crate::value_objects::{BanDate, BanLength};

pub const COLUMN_USERNAME: &str = "IGN";
pub const COLUMN_IDENTITY: &str = "UUID";
pub const COLUMN_REASON: &str = "Reason";
pub const COLUMN_BAN_DATE: &str = "Date Banned";
pub const COLUMN_LENGTH: &str = "Length of Ban";
pub const COLUMN_EXPIRY: &str = "Expiry Date";
pub const COLUMN_CASE: &str = "Case";

/// Columns every row must carry, in feed header order
pub const COLUMNS: [&str; 7] = [
    COLUMN_USERNAME,
    COLUMN_IDENTITY,
    COLUMN_REASON,
    COLUMN_BAN_DATE,
    COLUMN_LENGTH,
    COLUMN_EXPIRY,
    COLUMN_CASE,
];

/// `Length of Ban` value marking a permanent ban
pub const PERMANENT_LENGTH: &str = "Permanent";

/// `Expiry Date` value marking a permanent ban
pub const NEVER_EXPIRES: &str = "Never";

/// Hyphenated UUID text length
const CANONICAL_UUID_LEN: usize = 36;

/// Decode a feed row into a ban record
pub fn decode(row: &FeedRow) -> Result<BanRecord, DecodeError> {
    if let Some(missing) = COLUMNS.into_iter().find(|column| !row.contains(column)) {
        return Err(DecodeError::MissingColumn(missing));
    }

    let username = cell(row, COLUMN_USERNAME);
    let identity = cell(row, COLUMN_IDENTITY);
    let reason = cell(row, COLUMN_REASON);
    let ban_date = cell(row, COLUMN_BAN_DATE);
    let length = cell(row, COLUMN_LENGTH);
    let expiry = cell(row, COLUMN_EXPIRY);
    let case_reference = cell(row, COLUMN_CASE);

    let identity_id = parse_identity(identity)
        .ok_or_else(|| DecodeError::InvalidIdentity(identity.to_string()))?;

    let banned_at = BanDate::parse(ban_date)
        .map_err(|_| DecodeError::InvalidDate(ban_date.to_string()))?
        .start_of_day();

    let duration = if length == PERMANENT_LENGTH {
        None
    } else {
        Some(
            BanLength::parse(length)
                .map_err(|_| DecodeError::InvalidDuration(length.to_string()))?,
        )
    };

    let expires_at = if expiry == NEVER_EXPIRES {
        None
    } else {
        Some(
            BanDate::parse(expiry)
                .map_err(|_| DecodeError::InvalidExpiry(expiry.to_string()))?
                .start_of_day(),
        )
    };

    Ok(BanRecord::new(
        username,
        identity_id,
        reason,
        banned_at,
        duration,
        expires_at,
        case_reference,
    ))
}

// Presence is checked up front in decode()
fn cell<'a>(row: &'a FeedRow, column: &str) -> &'a str {
    row.get(column).unwrap_or_default()
}

fn parse_identity(raw: &str) -> Option<Uuid> {
    let trimmed = raw.trim();
    if trimmed.len() != CANONICAL_UUID_LEN {
        return None;
    }
    Uuid::parse_str(trimmed).ok()
}
