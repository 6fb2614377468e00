//! Ban list service
//!
//! Fetches the feed, decodes each row independently and answers queries over the
//! resulting records. A row that fails to decode is dropped; the rest of the batch
//! is kept in feed order.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, error, info, instrument};
use ubl_core::{decode, BanRecord, FeedTable};
use uuid::Uuid;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Ban list service
pub struct BanListService<'a> {
    ctx: &'a ServiceContext,
}

/// Counts for the startup statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BanSummary {
    /// Records that decoded, active or expired
    pub total: usize,
    /// Records in force at the time of the summary
    pub active: usize,
    /// Rows dropped by the decoder
    pub dropped_rows: usize,
}

impl<'a> BanListService<'a> {
    /// Create a new BanListService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Every decodable record in feed order
    ///
    /// A feed failure is logged and yields an empty list.
    #[instrument(skip(self))]
    pub async fn retrieve_all(&self) -> Vec<BanRecord> {
        match self.try_retrieve_all().await {
            Ok(records) => records,
            Err(e) => {
                error!(
                    feed = %self.ctx.feed().location(),
                    code = e.error_code(),
                    error = %e,
                    "Couldn't fetch ban entries"
                );
                Vec::new()
            }
        }
    }

    /// Records for one identity in feed order, empty when there are none
    ///
    /// A feed failure is logged and yields an empty list.
    #[instrument(skip(self))]
    pub async fn retrieve_for(&self, identity_id: Uuid) -> Vec<BanRecord> {
        match self.try_retrieve_for(identity_id).await {
            Ok(records) => records,
            Err(e) => {
                error!(
                    feed = %self.ctx.feed().location(),
                    %identity_id,
                    code = e.error_code(),
                    error = %e,
                    "Couldn't retrieve bans"
                );
                Vec::new()
            }
        }
    }

    /// Every decodable record, surfacing feed failures
    #[instrument(skip(self))]
    pub async fn try_retrieve_all(&self) -> ServiceResult<Vec<BanRecord>> {
        let table = self.ctx.feed().fetch().await?;
        Ok(decode_table(table).records)
    }

    /// Records for one identity, surfacing feed failures
    #[instrument(skip(self))]
    pub async fn try_retrieve_for(&self, identity_id: Uuid) -> ServiceResult<Vec<BanRecord>> {
        let records = self.try_retrieve_all().await?;

        Ok(records
            .into_iter()
            .filter(|record| record.identity_id() == identity_id)
            .collect())
    }

    /// Count total, active and dropped entries as of now
    pub async fn summary(&self) -> ServiceResult<BanSummary> {
        self.summary_at(Utc::now()).await
    }

    /// Count total, active and dropped entries as of `now`
    #[instrument(skip(self))]
    pub async fn summary_at(&self, now: DateTime<Utc>) -> ServiceResult<BanSummary> {
        let table = self.ctx.feed().fetch().await?;
        let decoded = decode_table(table);

        let summary = BanSummary {
            total: decoded.records.len(),
            active: decoded
                .records
                .iter()
                .filter(|record| record.is_active_at(now))
                .count(),
            dropped_rows: decoded.dropped,
        };

        info!(
            total = summary.total,
            active = summary.active,
            dropped_rows = summary.dropped_rows,
            "Ban list summarized"
        );

        Ok(summary)
    }
}

struct Decoded {
    records: Vec<BanRecord>,
    dropped: usize,
}

fn decode_table(table: FeedTable) -> Decoded {
    let mut records = Vec::with_capacity(table.len());
    let mut dropped = 0;

    for row in table.into_rows() {
        match decode(&row) {
            Ok(record) => records.push(record),
            Err(e) => {
                // Row contents stay out of the log
                debug!(
                    line = row.line(),
                    code = e.code(),
                    missing_column = e.is_missing_column(),
                    "Dropping undecodable row"
                );
                dropped += 1;
            }
        }
    }

    Decoded { records, dropped }
}
