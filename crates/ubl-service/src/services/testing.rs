//! In-memory feed sources for service tests

use std::time::Duration;

use async_trait::async_trait;
use ubl_core::{FeedRow, FeedSource, FeedTable, FetchError, FetchResult, COLUMNS};

pub const NOTCH: &str = "069a79f4-44e9-4726-a5be-fca90e38aaf5";
pub const JEB: &str = "853c80ef-3c37-49fd-aa49-938b674adae6";

/// A feed that always returns the same table
pub struct StaticFeed {
    table: FeedTable,
    delay: Option<Duration>,
}

impl StaticFeed {
    pub fn new(rows: &[[&str; 7]]) -> Self {
        let rows = rows
            .iter()
            .enumerate()
            .map(|(i, cells)| {
                FeedRow::from_pairs(i as u64 + 2, COLUMNS.iter().copied().zip(cells.iter().copied()))
            })
            .collect();
        let headers = COLUMNS.iter().map(|c| (*c).to_string()).collect();

        Self {
            table: FeedTable::new(headers, rows),
            delay: None,
        }
    }

    pub fn empty() -> Self {
        Self::new(&[])
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl FeedSource for StaticFeed {
    async fn fetch(&self) -> FetchResult<FeedTable> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.table.clone())
    }

    fn location(&self) -> &str {
        "memory://static"
    }
}

/// A feed that always fails
pub struct FailingFeed(pub FetchError);

#[async_trait]
impl FeedSource for FailingFeed {
    async fn fetch(&self) -> FetchResult<FeedTable> {
        Err(self.0.clone())
    }

    fn location(&self) -> &str {
        "memory://failing"
    }
}

/// A feed whose retrieval task dies
pub struct PanickingFeed;

#[async_trait]
impl FeedSource for PanickingFeed {
    async fn fetch(&self) -> FetchResult<FeedTable> {
        panic!("feed source crashed")
    }

    fn location(&self) -> &str {
        "memory://panicking"
    }
}

pub fn permanent(uuid: &str, reason: &str) -> [String; 7] {
    [
        "Griefer".to_string(),
        uuid.to_string(),
        reason.to_string(),
        "12 September, 2018".to_string(),
        "Permanent".to_string(),
        "Never".to_string(),
        "https://redd.it/case".to_string(),
    ]
}

pub fn temporary(uuid: &str, reason: &str, length: &str, expiry: &str) -> [String; 7] {
    [
        "Griefer".to_string(),
        uuid.to_string(),
        reason.to_string(),
        "1 January, 2019".to_string(),
        length.to_string(),
        expiry.to_string(),
        "https://redd.it/case".to_string(),
    ]
}

/// Borrow owned rows as the `&str` arrays `StaticFeed::new` takes
pub fn as_rows(rows: &[[String; 7]]) -> Vec<[&str; 7]> {
    rows.iter().map(|row| row.each_ref().map(String::as_str)).collect()
}
