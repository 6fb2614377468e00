//! Test helpers for integration tests
//!
//! Provides a fake feed server whose body, status and latency can be changed while
//! it runs, plus shortcuts for wiring the real fetcher and services to it.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use anyhow::Result;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use ubl_common::{FailPolicy, GateConfig, KickMessages};
use ubl_feed::{create_client, FeedFetcher, FeedUrl, FetcherConfig};
use ubl_service::ServiceContext;

/// Path the fake feed is served on
pub const FEED_PATH: &str = "/bans.csv";

struct FeedState {
    body: RwLock<String>,
    status: RwLock<StatusCode>,
    delay: RwLock<Duration>,
    hits: AtomicUsize,
}

/// Fake feed server instance that manages lifecycle
pub struct FakeFeed {
    pub addr: SocketAddr,
    state: Arc<FeedState>,
    handle: JoinHandle<()>,
}

impl FakeFeed {
    /// Start serving `body` with status 200
    pub async fn start(body: impl Into<String>) -> Result<Self> {
        let state = Arc::new(FeedState {
            body: RwLock::new(body.into()),
            status: RwLock::new(StatusCode::OK),
            delay: RwLock::new(Duration::ZERO),
            hits: AtomicUsize::new(0),
        });

        let app = Router::new()
            .route(FEED_PATH, get(serve_feed))
            .with_state(state.clone());

        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            state,
            handle,
        })
    }

    /// Full URL of the feed
    pub fn url(&self) -> String {
        format!("http://{}{}", self.addr, FEED_PATH)
    }

    pub fn set_body(&self, body: impl Into<String>) {
        *write(&self.state.body) = body.into();
    }

    pub fn set_status(&self, status: StatusCode) {
        *write(&self.state.status) = status;
    }

    /// Hold every response back by `delay`
    pub fn set_delay(&self, delay: Duration) {
        *write(&self.state.delay) = delay;
    }

    /// Number of requests served so far
    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    /// A real fetcher pointed at this server
    pub fn fetcher(&self) -> Result<FeedFetcher> {
        let url = FeedUrl::parse(&self.url())?;
        let client = create_client(&FetcherConfig::default())?;
        Ok(FeedFetcher::new(url, client))
    }

    /// A service context with default gate settings
    pub fn context(&self) -> Result<ServiceContext> {
        self.context_with(GateConfig::default())
    }

    /// A service context with custom gate settings and the test kick messages
    pub fn context_with(&self, gate: GateConfig) -> Result<ServiceContext> {
        Ok(ServiceContext::builder()
            .feed(Arc::new(self.fetcher()?))
            .gate(gate)
            .kick_messages(test_kick_messages())
            .build()?)
    }
}

impl Drop for FakeFeed {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Gate settings with a short timeout
pub fn gate_config(timeout: Duration, fail_policy: FailPolicy) -> GateConfig {
    GateConfig {
        timeout_ms: timeout.as_millis() as u64,
        fail_policy,
    }
}

/// Plain templates that make assertions readable
pub fn test_kick_messages() -> KickMessages {
    KickMessages {
        permanent: vec![
            "&cBanned: {reason}".to_string(),
            "Length: {banLength}, expires: {expireDate}".to_string(),
        ],
        temporary: vec![
            "&cSuspended: {reason}".to_string(),
            "Length: {banLength}, expires: {expireDate}".to_string(),
        ],
        unavailable: vec!["&eBan list unavailable".to_string()],
    }
}

async fn serve_feed(State(state): State<Arc<FeedState>>) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);

    let delay = *read(&state.delay);
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let status = *read(&state.status);
    let body = read(&state.body).clone();
    (status, [(header::CONTENT_TYPE, "text/csv")], body)
}

fn read<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(std::sync::PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(std::sync::PoisonError::into_inner)
}
