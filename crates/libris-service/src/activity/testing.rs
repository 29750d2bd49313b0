//! In-memory store doubles and a diagnostic event counter for unit tests.

use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use libris_core::error::{AppError, ErrorKind};
use libris_core::result::AppResult;
use libris_entity::activity::{ActivityLogEntry, NewActivityEntry};

use super::store::ActivityStore;

/// Keeps every inserted entry in memory.
#[derive(Default)]
pub(crate) struct RecordingStore {
    entries: Mutex<Vec<NewActivityEntry>>,
    next_id: AtomicI64,
    schema_calls: AtomicUsize,
}

impl RecordingStore {
    pub(crate) fn entries(&self) -> Vec<NewActivityEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub(crate) fn schema_calls(&self) -> usize {
        self.schema_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ActivityStore for RecordingStore {
    async fn insert(&self, entry: &NewActivityEntry) -> AppResult<ActivityLogEntry> {
        self.entries.lock().unwrap().push(entry.clone());
        Ok(ActivityLogEntry {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            user_id: entry.user_id,
            username: entry.username.clone(),
            action: entry.action.clone(),
            details: entry.details.clone(),
            module: entry.module,
            ip_address: entry.ip_address.clone(),
            user_agent: entry.user_agent().to_string(),
            device_info: entry.device_info().to_string(),
            status: entry.status,
            created_at: Utc::now(),
        })
    }

    async fn ensure_schema(&self) -> AppResult<()> {
        self.schema_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Rejects every call with a fixed error kind.
pub(crate) struct FailingStore {
    kind: ErrorKind,
}

impl FailingStore {
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }
}

#[async_trait]
impl ActivityStore for FailingStore {
    async fn insert(&self, _entry: &NewActivityEntry) -> AppResult<ActivityLogEntry> {
        Err(AppError::new(self.kind, "insert rejected"))
    }

    async fn ensure_schema(&self) -> AppResult<()> {
        Err(AppError::new(self.kind, "schema unavailable"))
    }
}

/// Panics inside `insert`, as a buggy driver would.
pub(crate) struct PanickingStore;

#[async_trait]
impl ActivityStore for PanickingStore {
    async fn insert(&self, _entry: &NewActivityEntry) -> AppResult<ActivityLogEntry> {
        panic!("driver bug")
    }

    async fn ensure_schema(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Counts WARN and ERROR events emitted while installed.
#[derive(Clone, Default)]
pub(crate) struct EventCounter(Arc<AtomicUsize>);

impl EventCounter {
    /// Install as the thread-local default subscriber.
    pub(crate) fn install(&self) -> DefaultGuard {
        tracing::subscriber::set_default(tracing_subscriber::registry().with(self.clone()))
    }

    pub(crate) fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for EventCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = *event.metadata().level();
        if level == Level::WARN || level == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}
