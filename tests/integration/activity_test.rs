//! Integration tests for recording activities into PostgreSQL.

use std::sync::Arc;

use http::HeaderMap;
use http::header::USER_AGENT;

use libris_database::ActivityLogRepository;
use libris_entity::activity::{ActivityModule, ActivityStatus};
use libris_service::{ActivityRecorder, RequestContext};

use crate::helpers::{TestDb, unique_username};

const EDGE_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.0.0";

#[tokio::test]
#[ignore = "requires PostgreSQL (LIBRIS__DATABASE__URL)"]
async fn test_login_row_is_persisted_with_device_info() {
    let db = TestDb::new().await;
    let username = unique_username("alice");
    let ctx = RequestContext::new(
        "10.0.0.5",
        Some("Mozilla/5.0 (Windows NT 10.0) Chrome/100".to_string()),
    );

    assert!(db.recorder.log_login(Some(42), &username, true, &ctx).await);

    let rows = db.rows_for(&username).await;
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.user_id, Some(42));
    assert_eq!(row.action, "login");
    assert_eq!(row.details, "User logged in successfully");
    assert_eq!(row.module, ActivityModule::Authentication);
    assert_eq!(row.ip_address, "10.0.0.5");
    assert_eq!(row.device_info, "Windows, Chrome");
    assert_eq!(row.status, ActivityStatus::Success);
}

#[tokio::test]
#[ignore = "requires PostgreSQL (LIBRIS__DATABASE__URL)"]
async fn test_failed_login_stores_null_user_id() {
    let db = TestDb::new().await;
    let username = unique_username("bob");

    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, EDGE_UA.parse().unwrap());
    let ctx = RequestContext::from_parts(Some("203.0.113.7".parse().unwrap()), &headers);

    assert!(db.recorder.log_login(None, &username, false, &ctx).await);

    let rows = db.rows_for(&username).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].user_id, None);
    assert_eq!(rows[0].action, "login_failed");
    assert_eq!(rows[0].status, ActivityStatus::Failure);
    assert_eq!(rows[0].device_info, "Windows, Edge");
}

#[tokio::test]
#[ignore = "requires PostgreSQL (LIBRIS__DATABASE__URL)"]
async fn test_long_action_and_username_are_stored_intact() {
    let db = TestDb::new().await;
    let username = format!("{}-{}", unique_username("long"), "x".repeat(300));
    let action = format!("reserve_interlibrary_loan_{}", "y".repeat(200));

    let ok = db
        .recorder
        .record(
            Some(11),
            Some(&username),
            &action,
            "Requested from partner library",
            ActivityModule::Circulation,
            ActivityStatus::Success,
            &RequestContext::new("10.2.2.2", None),
        )
        .await;
    assert!(ok);

    let rows = db.rows_for(&username).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].action, action);
    assert_eq!(rows[0].username.as_deref(), Some(username.as_str()));
}

#[tokio::test]
#[ignore = "requires PostgreSQL (LIBRIS__DATABASE__URL)"]
async fn test_schema_bootstrap_is_idempotent() {
    let db = TestDb::new().await;
    let repo = Arc::new(ActivityLogRepository::new(db.pool.clone()));

    let again = ActivityRecorder::initialize(repo).await;
    assert!(again.is_ok());
}

#[tokio::test]
#[ignore = "requires PostgreSQL (LIBRIS__DATABASE__URL)"]
async fn test_concurrent_records_do_not_interfere() {
    let db = TestDb::new().await;
    let username = unique_username("concurrent");
    let ctx = RequestContext::new("10.1.1.1", None);

    let mut handles = Vec::new();
    for book_id in 0..8 {
        let recorder = db.recorder.clone();
        let username = username.clone();
        let ctx = ctx.clone();
        handles.push(tokio::spawn(async move {
            recorder
                .log_book_activity(Some(9), Some(&username), "view_book", book_id, "Emma", &ctx)
                .await
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap());
    }

    let rows = db.rows_for(&username).await;
    assert_eq!(rows.len(), 8);
    assert!(rows.iter().all(|r| r.user_agent == "Unknown"));
    assert!(rows.iter().all(|r| r.module == ActivityModule::Catalog));
}

#[tokio::test]
#[ignore = "requires PostgreSQL (LIBRIS__DATABASE__URL)"]
async fn test_closed_pool_returns_false() {
    let db = TestDb::new().await;
    let username = unique_username("closed");
    db.pool.close().await;

    let ok = db
        .recorder
        .log_logout(3, &username, &RequestContext::default())
        .await;
    assert!(!ok);
}
