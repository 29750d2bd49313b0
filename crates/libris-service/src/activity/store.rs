//! Storage port for activity entries.

use async_trait::async_trait;

use libris_core::result::AppResult;
use libris_database::repositories::ActivityLogRepository;
use libris_entity::activity::{ActivityLogEntry, NewActivityEntry};

/// Persistence collaborator used by the recorder.
///
/// Each `insert` writes exactly one row and is atomic on its own; the
/// recorder never reads back or coordinates across rows.
#[async_trait]
pub trait ActivityStore: Send + Sync + 'static {
    /// Persist one activity entry.
    async fn insert(&self, entry: &NewActivityEntry) -> AppResult<ActivityLogEntry>;

    /// Idempotently create the backing table.
    async fn ensure_schema(&self) -> AppResult<()>;
}

#[async_trait]
impl ActivityStore for ActivityLogRepository {
    async fn insert(&self, entry: &NewActivityEntry) -> AppResult<ActivityLogEntry> {
        self.create(entry).await
    }

    async fn ensure_schema(&self) -> AppResult<()> {
        ActivityLogRepository::ensure_schema(self).await
    }
}
