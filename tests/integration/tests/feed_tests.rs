//! Feed pipeline integration tests
//!
//! Each test serves a CSV document from a local fake feed and drives the real
//! fetcher, decoder and services against it.
//!
//! Run with: cargo test -p integration-tests --test feed_tests

use std::time::Duration;

use axum::http::StatusCode;
use integration_tests::*;
use ubl_common::FailPolicy;
use ubl_core::{BanRecord, FeedSource, FetchError};
use ubl_service::{BanListService, LoginDecision, LoginGate, ServiceError};

fn reasons(records: &[BanRecord]) -> Vec<&str> {
    records.iter().map(BanRecord::reason).collect()
}

// ============================================================================
// Retrieval
// ============================================================================

#[tokio::test]
async fn test_retrieve_all() {
    let server = FakeFeed::start(feed(&[NOTCH_PERMANENT, JEB_EXPIRED, JEB_ACTIVE]))
        .await
        .unwrap();
    let ctx = server.context().unwrap();

    let records = BanListService::new(&ctx).retrieve_all().await;
    assert_eq!(reasons(&records), ["Fly, speed and kill aura", "Duping", "Griefing"]);

    let notch = &records[0];
    assert_eq!(notch.username(), "Notch");
    assert_eq!(notch.identity_id(), uuid(NOTCH));
    assert!(notch.duration().is_none());
    assert!(notch.expires_at().is_none());
    assert_eq!(notch.ban_date().to_string(), "12 September, 2018");
    assert_eq!(notch.case_reference(), "https://redd.it/9f2a1b");

    let jeb = &records[2];
    assert_eq!(jeb.duration().unwrap().to_string(), "50 Years, 2 Weeks");
    assert_eq!(jeb.expiry_date().unwrap().to_string(), "19 January, 2099");
}

#[tokio::test]
async fn test_malformed_rows_are_dropped_in_order() {
    let mut rows = vec![NOTCH_PERMANENT];
    rows.extend(MALFORMED_ROWS);
    rows.push(JEB_ACTIVE);
    rows.push(MALFORMED_ROWS[0]);
    rows.push(DINNERBONE_EXPIRED);

    let server = FakeFeed::start(feed(&rows)).await.unwrap();
    let ctx = server.context().unwrap();
    let service = BanListService::new(&ctx);

    let records = service.retrieve_all().await;
    assert_eq!(records.len(), rows.len() - MALFORMED_ROWS.len() - 1);
    assert_eq!(reasons(&records), ["Fly, speed and kill aura", "Griefing", "Spam"]);

    let summary = service.summary().await.unwrap();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.active, 2);
    assert_eq!(summary.dropped_rows, MALFORMED_ROWS.len() + 1);
}

#[tokio::test]
async fn test_retrieve_for_is_ordered_subset() {
    let server = FakeFeed::start(feed(&[JEB_EXPIRED, NOTCH_PERMANENT, JEB_ACTIVE]))
        .await
        .unwrap();
    let ctx = server.context().unwrap();
    let service = BanListService::new(&ctx);

    let all = service.retrieve_all().await;
    let jeb = service.retrieve_for(uuid(JEB)).await;

    assert_eq!(reasons(&jeb), ["Duping", "Griefing"]);
    assert!(jeb.iter().all(|record| all.contains(record)));
    assert!(service.retrieve_for(uuid(DINNERBONE)).await.is_empty());
}

#[tokio::test]
async fn test_column_order_independence() {
    let server = FakeFeed::start(reordered_feed()).await.unwrap();
    let ctx = server.context().unwrap();
    let reordered = BanListService::new(&ctx).retrieve_all().await;

    server.set_body(feed(&[NOTCH_PERMANENT, JEB_ACTIVE]));
    let standard = BanListService::new(&ctx).retrieve_all().await;

    assert_eq!(reordered.len(), 2);
    assert_eq!(reordered, standard);
}

#[tokio::test]
async fn test_header_only_feed() {
    let server = FakeFeed::start(feed(&[])).await.unwrap();
    let ctx = server.context().unwrap();

    let summary = BanListService::new(&ctx).summary().await.unwrap();
    assert_eq!(summary.total, 0);
    assert_eq!(summary.dropped_rows, 0);
}

#[tokio::test]
async fn test_every_call_fetches() {
    let server = FakeFeed::start(feed(&[NOTCH_PERMANENT])).await.unwrap();
    let ctx = server.context().unwrap();
    let service = BanListService::new(&ctx);

    assert_eq!(service.retrieve_all().await.len(), 1);
    server.set_body(feed(&[NOTCH_PERMANENT, JEB_ACTIVE]));
    assert_eq!(service.retrieve_all().await.len(), 2);
    assert_eq!(server.hits(), 2);
}

// ============================================================================
// Fetch failures
// ============================================================================

#[tokio::test]
async fn test_bad_status() {
    let server = FakeFeed::start(feed(&[NOTCH_PERMANENT])).await.unwrap();
    server.set_status(StatusCode::NOT_FOUND);

    let err = server.fetcher().unwrap().fetch().await.unwrap_err();
    assert_eq!(err, FetchError::BadStatus(404));

    let ctx = server.context().unwrap();
    let service = BanListService::new(&ctx);
    assert!(service.retrieve_all().await.is_empty());
    assert!(service.retrieve_for(uuid(NOTCH)).await.is_empty());
    assert!(matches!(
        service.try_retrieve_all().await,
        Err(ServiceError::Fetch(FetchError::BadStatus(404)))
    ));
}

#[tokio::test]
async fn test_success_other_than_ok_is_bad_status() {
    let server = FakeFeed::start(feed(&[NOTCH_PERMANENT])).await.unwrap();
    server.set_status(StatusCode::NO_CONTENT);

    let err = server.fetcher().unwrap().fetch().await.unwrap_err();
    assert_eq!(err.status(), Some(204));
}

#[tokio::test]
async fn test_server_gone_is_io_failure() {
    let server = FakeFeed::start(feed(&[NOTCH_PERMANENT])).await.unwrap();
    let fetcher = server.fetcher().unwrap();
    drop(server);
    tokio::time::sleep(Duration::from_millis(50)).await;

    let err = fetcher.fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::IoFailure(_)));
}

// ============================================================================
// Login gate
// ============================================================================

#[tokio::test]
async fn test_gate_denies_permanent_ban() {
    let server = FakeFeed::start(feed(&[NOTCH_PERMANENT])).await.unwrap();
    let ctx = server.context().unwrap();

    let decision = LoginGate::new(&ctx).check(uuid(NOTCH)).await;
    assert_eq!(
        decision.message(),
        Some("\u{00A7}cBanned: Fly, speed and kill aura\nLength: Forever, expires: Never")
    );
}

#[tokio::test]
async fn test_gate_first_active_wins() {
    let server = FakeFeed::start(feed(&[JEB_EXPIRED, JEB_ACTIVE])).await.unwrap();
    let ctx = server.context().unwrap();

    match LoginGate::new(&ctx).check(uuid(JEB)).await {
        LoginDecision::Deny { message, record } => {
            assert_eq!(
                message,
                "\u{00A7}cSuspended: Griefing\nLength: 50 Years, 2 Weeks, expires: 19 January, 2099"
            );
            assert_eq!(record.unwrap().reason(), "Griefing");
        }
        LoginDecision::Allow => panic!("expected a denial"),
    }
}

#[tokio::test]
async fn test_gate_allows_expired_and_unknown() {
    let server = FakeFeed::start(feed(&[DINNERBONE_EXPIRED, NOTCH_PERMANENT]))
        .await
        .unwrap();
    let ctx = server.context().unwrap();
    let gate = LoginGate::new(&ctx);

    assert!(gate.check(uuid(DINNERBONE)).await.is_allowed());
    assert!(gate.check(uuid(JEB)).await.is_allowed());
}

#[tokio::test]
async fn test_gate_fails_open_on_bad_status() {
    let server = FakeFeed::start(feed(&[NOTCH_PERMANENT])).await.unwrap();
    server.set_status(StatusCode::INTERNAL_SERVER_ERROR);
    let ctx = server.context().unwrap();

    assert!(LoginGate::new(&ctx).check(uuid(NOTCH)).await.is_allowed());
}

#[tokio::test]
async fn test_gate_fails_closed_when_configured() {
    let server = FakeFeed::start(feed(&[NOTCH_PERMANENT])).await.unwrap();
    server.set_status(StatusCode::SERVICE_UNAVAILABLE);
    let ctx = server
        .context_with(gate_config(Duration::from_secs(5), FailPolicy::Closed))
        .unwrap();

    let decision = LoginGate::new(&ctx).check(uuid(JEB)).await;
    assert_eq!(
        decision,
        LoginDecision::Deny {
            message: "\u{00A7}eBan list unavailable".to_string(),
            record: None,
        }
    );
}

#[tokio::test]
async fn test_gate_timeout() {
    let server = FakeFeed::start(feed(&[NOTCH_PERMANENT])).await.unwrap();
    server.set_delay(Duration::from_secs(3));

    let open = server
        .context_with(gate_config(Duration::from_millis(100), FailPolicy::Open))
        .unwrap();
    assert!(LoginGate::new(&open).check(uuid(NOTCH)).await.is_allowed());

    let closed = server
        .context_with(gate_config(Duration::from_millis(100), FailPolicy::Closed))
        .unwrap();
    let decision = LoginGate::new(&closed).check(uuid(NOTCH)).await;
    assert_eq!(decision.message(), Some("\u{00A7}eBan list unavailable"));
}

// ============================================================================
// Output
// ============================================================================

#[tokio::test]
async fn test_records_serialize() {
    let server = FakeFeed::start(feed(&[NOTCH_PERMANENT, JEB_ACTIVE])).await.unwrap();
    let ctx = server.context().unwrap();
    let records = BanListService::new(&ctx).retrieve_all().await;

    let json = serde_json::to_value(&records).unwrap();
    assert_eq!(json[0]["identity_id"], NOTCH);
    assert!(json[0]["duration"].is_null());
    assert!(json[0]["expires_at"].is_null());
    assert_eq!(json[1]["duration"], "50 Years, 2 Weeks");
    assert_eq!(json[1]["expires_at"], "2099-01-19T00:00:00Z");
}
