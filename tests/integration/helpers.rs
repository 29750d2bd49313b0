//! Shared test helpers for integration tests.

use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use libris_core::config::DatabaseConfig;
use libris_database::{ActivityLogRepository, DatabasePool};
use libris_entity::activity::ActivityLogEntry;
use libris_service::ActivityRecorder;

/// Test database context
pub struct TestDb {
    /// Connection pool for direct queries
    pub pool: PgPool,
    /// Recorder wired to the real repository
    pub recorder: ActivityRecorder,
}

impl TestDb {
    /// Connect, provision the schema, and build a recorder.
    pub async fn new() -> Self {
        let url = std::env::var("LIBRIS__DATABASE__URL")
            .expect("LIBRIS__DATABASE__URL must point at a test database");
        let config = DatabaseConfig {
            url,
            max_connections: 4,
            min_connections: 1,
            connect_timeout_seconds: 5,
            idle_timeout_seconds: 60,
        };

        let db = DatabasePool::connect(&config)
            .await
            .expect("Failed to connect to test database");
        let repo = Arc::new(ActivityLogRepository::new(db.pool().clone()));
        let recorder = ActivityRecorder::initialize(repo)
            .await
            .expect("Failed to provision activity schema");

        Self {
            pool: db.pool().clone(),
            recorder,
        }
    }

    /// Fetch every row recorded for a username, oldest first.
    pub async fn rows_for(&self, username: &str) -> Vec<ActivityLogEntry> {
        sqlx::query_as::<_, ActivityLogEntry>(
            "SELECT * FROM activity_logs WHERE username = $1 ORDER BY id",
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await
        .expect("Failed to query activity_logs")
    }
}

/// A username no other test run will collide with.
pub fn unique_username(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}
