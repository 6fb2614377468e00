//! Login gate
//!
//! Decides whether a joining player may enter. The lookup runs on its own task and
//! is bounded by the gate timeout; a lookup that overruns is abandoned and its
//! result discarded.

use chrono::{DateTime, Utc};
use tracing::{error, info, instrument, warn};
use ubl_common::FailPolicy;
use ubl_core::BanRecord;
use uuid::Uuid;

use super::ban_list::BanListService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::kick_message::{render_kick_message, render_plain};

/// Outcome of a login check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginDecision {
    /// Let the player in
    Allow,
    /// Refuse the player with a rendered kick message
    Deny {
        message: String,
        /// The ban that caused the refusal, absent when the list was unavailable
        record: Option<BanRecord>,
    },
}

impl LoginDecision {
    #[inline]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Kick message, if denied
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Allow => None,
            Self::Deny { message, .. } => Some(message),
        }
    }
}

/// Login gate
pub struct LoginGate<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LoginGate<'a> {
    /// Create a new LoginGate
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Check a login attempt
    ///
    /// Never fails: an unreachable ban list is resolved by the fail policy.
    #[instrument(skip(self))]
    pub async fn check(&self, identity_id: Uuid) -> LoginDecision {
        match self.lookup(identity_id).await {
            Ok(records) => {
                let decision = self.evaluate(&records, Utc::now());
                if let LoginDecision::Deny { record: Some(record), .. } = &decision {
                    info!(
                        %identity_id,
                        username = record.username(),
                        permanent = record.is_permanent(),
                        "Login denied by ban list"
                    );
                }
                decision
            }
            Err(e) => self.unavailable(identity_id, &e),
        }
    }

    /// Decide from already retrieved records
    ///
    /// The first record active at `now` wins; later records are not consulted.
    pub fn evaluate(&self, records: &[BanRecord], now: DateTime<Utc>) -> LoginDecision {
        let Some(record) = records.iter().find(|record| record.is_active_at(now)) else {
            return LoginDecision::Allow;
        };

        let messages = self.ctx.kick_messages();
        let template = if record.duration().is_none() {
            &messages.permanent
        } else {
            &messages.temporary
        };

        LoginDecision::Deny {
            message: render_kick_message(template, record),
            record: Some(record.clone()),
        }
    }

    async fn lookup(&self, identity_id: Uuid) -> ServiceResult<Vec<BanRecord>> {
        let timeout = self.ctx.gate_timeout();
        let ctx = self.ctx.clone();

        let task = tokio::spawn(async move {
            BanListService::new(&ctx).try_retrieve_for(identity_id).await
        });

        match tokio::time::timeout(timeout, task).await {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => Err(ServiceError::internal(format!("lookup task failed: {e}"))),
            Err(_) => Err(ServiceError::timeout(timeout.as_millis() as u64)),
        }
    }

    /// Resolve a failed lookup by the fail policy
    ///
    /// A local fault (the lookup task dying) is treated like an unreachable list
    /// but logged apart from it.
    fn unavailable(&self, identity_id: Uuid, err: &ServiceError) -> LoginDecision {
        let cause = if err.is_unavailable() {
            "Couldn't retrieve bans"
        } else {
            "Ban lookup failed"
        };

        match self.ctx.fail_policy() {
            FailPolicy::Open => {
                error!(
                    %identity_id,
                    code = err.error_code(),
                    error = %err,
                    "{cause}, skipping"
                );
                LoginDecision::Allow
            }
            FailPolicy::Closed => {
                warn!(
                    %identity_id,
                    code = err.error_code(),
                    error = %err,
                    "{cause}, refusing login"
                );
                LoginDecision::Deny {
                    message: render_plain(&self.ctx.kick_messages().unavailable),
                    record: None,
                }
            }
        }
    }
}
