//! Database schema bootstrap.

use sqlx::PgPool;
use tracing::info;

use libris_core::error::{AppError, ErrorKind};

/// Run all pending database migrations.
///
/// Safe to call repeatedly: applied migrations are skipped and the
/// statements themselves use `IF NOT EXISTS`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Running database migrations...");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Database migrations completed successfully");
    Ok(())
}
