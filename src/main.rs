//! Libris activity log bootstrap.
//!
//! Loads configuration, initializes diagnostics, connects to PostgreSQL,
//! and provisions the activity log schema once before the application
//! starts recording.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use libris_core::config::AppConfig;
use libris_core::error::AppError;
use libris_database::{ActivityLogRepository, DatabasePool};
use libris_service::ActivityRecorder;

#[tokio::main]
async fn main() {
    let env = std::env::var("LIBRIS_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Bootstrap error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Libris activity log v{}", env!("CARGO_PKG_VERSION"));

    let db = DatabasePool::connect(&config.database).await?;
    let repo = Arc::new(ActivityLogRepository::new(db.pool().clone()));

    let recorder = if config.activity.ensure_schema_on_startup {
        ActivityRecorder::initialize(repo).await?
    } else {
        tracing::info!("Schema bootstrap disabled; assuming activity_logs exists");
        ActivityRecorder::new(repo)
    };
    tracing::debug!(?recorder, "Activity recorder ready");

    if !db.health_check().await? {
        return Err(AppError::service_unavailable("Database health check returned no rows"));
    }

    db.close().await;
    Ok(())
}
