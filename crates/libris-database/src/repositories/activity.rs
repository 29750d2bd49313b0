//! Activity log repository implementation.

use sqlx::PgPool;

use libris_core::result::AppResult;
use libris_entity::activity::{ActivityLogEntry, NewActivityEntry};

use crate::connection::map_sqlx_error;
use crate::migration;

/// Append-only repository for the `activity_logs` table.
#[derive(Debug, Clone)]
pub struct ActivityLogRepository {
    pool: PgPool,
}

impl ActivityLogRepository {
    /// Create a new activity log repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert one activity row. `id` and `created_at` are assigned by PostgreSQL.
    pub async fn create(&self, data: &NewActivityEntry) -> AppResult<ActivityLogEntry> {
        sqlx::query_as::<_, ActivityLogEntry>(
            "INSERT INTO activity_logs \
             (user_id, username, action, action_details, module, ip_address, user_agent, device_info, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.username)
        .bind(&data.action)
        .bind(&data.details)
        .bind(data.module.as_str())
        .bind(&data.ip_address)
        .bind(data.user_agent())
        .bind(data.device_info().as_str())
        .bind(data.status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to insert activity entry"))
    }

    /// Create the `activity_logs` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> AppResult<()> {
        migration::run_migrations(&self.pool).await
    }
}
