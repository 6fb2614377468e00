//! Ban record entity - one parsed row of the ban list feed

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::value_objects::{BanDate, BanLength};

/// A single ban entry. May be expired.
///
/// Fields are fixed at construction; a record is never edited after decoding.
/// `expires_at` and `duration` are both `None` for a permanent ban by feed convention,
/// but the pairing is not cross-checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BanRecord {
    username: String,
    identity_id: Uuid,
    reason: String,
    banned_at: DateTime<Utc>,
    duration: Option<BanLength>,
    expires_at: Option<DateTime<Utc>>,
    case_reference: String,
}

impl BanRecord {
    /// Create a new BanRecord
    pub fn new(
        username: impl Into<String>,
        identity_id: Uuid,
        reason: impl Into<String>,
        banned_at: DateTime<Utc>,
        duration: Option<BanLength>,
        expires_at: Option<DateTime<Utc>>,
        case_reference: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            identity_id,
            reason: reason.into(),
            banned_at,
            duration,
            expires_at,
            case_reference: case_reference.into(),
        }
    }

    /// Username at the time of the ban (not authoritative, names change)
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Stable player identity
    #[inline]
    pub fn identity_id(&self) -> Uuid {
        self.identity_id
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    #[inline]
    pub fn banned_at(&self) -> DateTime<Utc> {
        self.banned_at
    }

    /// Original ban length, `None` if permanent
    #[inline]
    pub fn duration(&self) -> Option<BanLength> {
        self.duration
    }

    /// Expiry instant, `None` if permanent
    #[inline]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Link or id of the case write-up
    pub fn case_reference(&self) -> &str {
        &self.case_reference
    }

    /// Date the ban was issued, in feed format
    pub fn ban_date(&self) -> BanDate {
        BanDate::from(self.banned_at)
    }

    /// Date the ban expires, in feed format
    pub fn expiry_date(&self) -> Option<BanDate> {
        self.expires_at.map(BanDate::from)
    }

    /// Check if the ban has no expiry
    #[inline]
    pub fn is_permanent(&self) -> bool {
        self.expires_at.is_none()
    }

    /// Check if the ban is in force at `now`
    ///
    /// Only the expiry instant matters; the symbolic duration is not consulted.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => now < expires_at,
            None => true,
        }
    }

    /// Check if the ban is in force right now
    pub fn is_active(&self) -> bool {
        self.is_active_at(Utc::now())
    }

    /// Time left until expiry, negative once expired, `None` if permanent
    ///
    /// Prefer `is_active_at` for activity checks.
    pub fn remaining_at(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.expires_at.map(|expires_at| expires_at - now)
    }
}
