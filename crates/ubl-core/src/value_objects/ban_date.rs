//! Ban date - calendar date as written in the feed
//!
//! Format: `<day> <FullMonthName>, <year>`, e.g. `12 September, 2018`.
//! The day may omit its leading zero when parsing; rendering always pads it to two digits.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use std::fmt;
use std::str::FromStr;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Calendar date of a ban or of its expiry (no time-of-day precision)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BanDate(NaiveDate);

impl BanDate {
    /// Wrap an existing calendar date
    #[inline]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build from year, month (1-12) and day, if the date exists
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse the feed date format
    ///
    /// Hand-written rather than chrono's `%d %B, %Y`: `%B` ignores case and accepts
    /// abbreviations, while the feed only allows exact full month names.
    pub fn parse(s: &str) -> Result<Self, DateParseError> {
        let invalid = || DateParseError::InvalidFormat(s.to_string());

        let (day_month, year) = s.trim().split_once(", ").ok_or_else(invalid)?;
        let (day, month) = day_month.split_once(' ').ok_or_else(invalid)?;

        let day = parse_digits(day, 1..=2).ok_or_else(invalid)?;
        let year = parse_digits(year, 4..=4).ok_or_else(invalid)?;
        let month = MONTH_NAMES
            .iter()
            .position(|name| *name == month)
            .ok_or_else(|| DateParseError::UnknownMonth(month.to_string()))?;

        // position() is at most 11
        Self::from_ymd(year as i32, month as u32 + 1, day)
            .ok_or_else(|| DateParseError::OutOfRange(s.to_string()))
    }

    /// Get the inner calendar date
    #[inline]
    pub const fn date(&self) -> NaiveDate {
        self.0
    }

    #[inline]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    #[inline]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    #[inline]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Full English month name
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.0.month0() as usize]
    }

    /// Midnight UTC at the start of this date
    pub fn start_of_day(&self) -> DateTime<Utc> {
        self.0.and_time(NaiveTime::MIN).and_utc()
    }
}

fn parse_digits(s: &str, width: std::ops::RangeInclusive<usize>) -> Option<u32> {
    if !width.contains(&s.len()) || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Error when parsing a feed date
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateParseError {
    #[error("invalid date format: {0:?}")]
    InvalidFormat(String),

    #[error("unknown month name: {0:?}")]
    UnknownMonth(String),

    #[error("date does not exist: {0:?}")]
    OutOfRange(String),
}

impl fmt::Display for BanDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02} {}, {:04}", self.day(), self.month_name(), self.year())
    }
}

impl FromStr for BanDate {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for BanDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<DateTime<Utc>> for BanDate {
    fn from(instant: DateTime<Utc>) -> Self {
        Self(instant.date_naive())
    }
}
