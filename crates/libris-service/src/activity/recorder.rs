//! Best-effort activity recording.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tracing::{debug, error, info};

use libris_core::result::AppResult;
use libris_entity::activity::{ActivityLogEntry, ActivityModule, ActivityStatus, NewActivityEntry};

use super::store::ActivityStore;
use crate::context::RequestContext;

/// Writes user actions to the audit trail.
///
/// Recording must never interrupt the operation being audited: [`record`]
/// swallows every failure, including a panicking store, logs it once, and
/// reports `false`.
///
/// [`record`]: ActivityRecorder::record
#[derive(Clone)]
pub struct ActivityRecorder {
    /// Activity storage.
    store: Arc<dyn ActivityStore>,
}

impl std::fmt::Debug for ActivityRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityRecorder").finish_non_exhaustive()
    }
}

impl ActivityRecorder {
    /// Creates a recorder over an already-provisioned store.
    pub fn new(store: Arc<dyn ActivityStore>) -> Self {
        Self { store }
    }

    /// Provisions the schema once, then creates the recorder.
    pub async fn initialize(store: Arc<dyn ActivityStore>) -> AppResult<Self> {
        store.ensure_schema().await?;
        info!("Activity log schema ready");
        Ok(Self::new(store))
    }

    /// Records an activity, returning whether it was persisted.
    #[allow(clippy::too_many_arguments)]
    pub async fn record(
        &self,
        user_id: Option<i64>,
        username: Option<&str>,
        action: &str,
        details: &str,
        module: ActivityModule,
        status: ActivityStatus,
        ctx: &RequestContext,
    ) -> bool {
        let outcome = AssertUnwindSafe(
            self.try_record(user_id, username, action, details, module, status, ctx),
        )
        .catch_unwind()
        .await;

        match outcome {
            Ok(Ok(entry)) => {
                debug!(id = entry.id, action, module = %module, "Activity recorded");
                true
            }
            Ok(Err(e)) => {
                error!(
                    user_id = ?user_id,
                    action,
                    module = %module,
                    kind = %e.kind,
                    error = %e,
                    "Failed to record activity"
                );
                false
            }
            Err(payload) => {
                error!(
                    user_id = ?user_id,
                    action,
                    module = %module,
                    panic = panic_message(payload.as_ref()),
                    "Activity store panicked while recording"
                );
                false
            }
        }
    }

    /// Records an activity, surfacing the failure instead of logging it.
    #[allow(clippy::too_many_arguments)]
    pub async fn try_record(
        &self,
        user_id: Option<i64>,
        username: Option<&str>,
        action: &str,
        details: &str,
        module: ActivityModule,
        status: ActivityStatus,
        ctx: &RequestContext,
    ) -> AppResult<ActivityLogEntry> {
        let entry = NewActivityEntry::new(
            module,
            action,
            details,
            status,
            ctx.ip_address_or_default(),
            ctx.user_agent_or_default(),
        )
        .with_actor(user_id, username.map(String::from));

        self.store.insert(&entry).await
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg
    } else {
        "non-string panic payload"
    }
}
