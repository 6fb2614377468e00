//! Service context - dependency container for services
//!
//! Holds the feed source and the gate settings. Built once at startup and cloned
//! into every consumer; clones share the same feed source.

use std::sync::Arc;
use std::time::Duration;

use ubl_common::{AppConfig, FailPolicy, GateConfig, KickMessages};
use ubl_core::FeedSource;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Immutable after construction. There is no global instance.
#[derive(Clone)]
pub struct ServiceContext {
    feed: Arc<dyn FeedSource>,
    gate: GateConfig,
    kick_messages: Arc<KickMessages>,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(feed: Arc<dyn FeedSource>, gate: GateConfig, kick_messages: KickMessages) -> Self {
        Self {
            feed,
            gate,
            kick_messages: Arc::new(kick_messages),
        }
    }

    /// Create a context from loaded configuration
    pub fn from_config(config: &AppConfig, feed: Arc<dyn FeedSource>) -> Self {
        Self::new(feed, config.gate.clone(), config.kick_messages.clone())
    }

    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Feed ===

    /// Get the ban list feed source
    pub fn feed(&self) -> &dyn FeedSource {
        self.feed.as_ref()
    }

    // === Gate settings ===

    pub fn gate_timeout(&self) -> Duration {
        Duration::from_millis(self.gate.timeout_ms)
    }

    pub fn fail_policy(&self) -> FailPolicy {
        self.gate.fail_policy
    }

    /// Get the kick message templates
    pub fn kick_messages(&self) -> &KickMessages {
        self.kick_messages.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("feed", &self.feed.location())
            .field("gate", &self.gate)
            .field("kick_messages", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    feed: Option<Arc<dyn FeedSource>>,
    gate: Option<GateConfig>,
    kick_messages: Option<KickMessages>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(mut self, feed: Arc<dyn FeedSource>) -> Self {
        self.feed = Some(feed);
        self
    }

    pub fn gate(mut self, gate: GateConfig) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        let mut gate = self.gate.take().unwrap_or_default();
        gate.timeout_ms = timeout.as_millis() as u64;
        self.gate = Some(gate);
        self
    }

    pub fn fail_policy(mut self, policy: FailPolicy) -> Self {
        let mut gate = self.gate.take().unwrap_or_default();
        gate.fail_policy = policy;
        self.gate = Some(gate);
        self
    }

    pub fn kick_messages(mut self, messages: KickMessages) -> Self {
        self.kick_messages = Some(messages);
        self
    }

    /// Build the ServiceContext
    ///
    /// Gate settings and kick messages fall back to their defaults.
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if no feed source was provided
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.feed
                .ok_or_else(|| ServiceError::internal("feed source is required"))?,
            self.gate.unwrap_or_default(),
            self.kick_messages.unwrap_or_default(),
        ))
    }
}
