//! Activity log entry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::device::DeviceInfo;
use super::module::ActivityModule;
use super::status::ActivityStatus;

/// An immutable, persisted activity log row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ActivityLogEntry {
    /// Storage-assigned identifier.
    pub id: i64,
    /// The acting user, absent for anonymous or failed-auth events.
    pub user_id: Option<i64>,
    /// The acting username, if known.
    pub username: Option<String>,
    /// Action identifier (e.g., `"login"`, `"borrow_book"`).
    pub action: String,
    /// Free-text description of the action.
    #[sqlx(rename = "action_details")]
    pub details: String,
    /// Subsystem the action belongs to.
    #[sqlx(try_from = "String")]
    pub module: ActivityModule,
    /// Remote address of the request.
    pub ip_address: String,
    /// Raw User-Agent header.
    pub user_agent: String,
    /// Classified "OS, Browser" label.
    pub device_info: String,
    /// Outcome of the action.
    #[sqlx(try_from = "String")]
    pub status: ActivityStatus,
    /// Storage-assigned insert time.
    pub created_at: DateTime<Utc>,
}

/// Data required to insert a new activity log row.
///
/// The device label is always derived from the user agent passed to
/// [`NewActivityEntry::new`]; there is no way to set it directly.
#[derive(Debug, Clone, Serialize)]
pub struct NewActivityEntry {
    /// The acting user.
    pub user_id: Option<i64>,
    /// The acting username.
    pub username: Option<String>,
    /// Action identifier.
    pub action: String,
    /// Free-text description.
    pub details: String,
    /// Subsystem tag.
    pub module: ActivityModule,
    /// Outcome.
    pub status: ActivityStatus,
    /// Remote address.
    pub ip_address: String,
    user_agent: String,
    device_info: DeviceInfo,
}

impl NewActivityEntry {
    /// Build an anonymous entry, classifying `user_agent` into a device label.
    pub fn new(
        module: ActivityModule,
        action: impl Into<String>,
        details: impl Into<String>,
        status: ActivityStatus,
        ip_address: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        let user_agent = user_agent.into();
        let device_info = DeviceInfo::from_user_agent(&user_agent);
        Self {
            user_id: None,
            username: None,
            action: action.into(),
            details: details.into(),
            module,
            status,
            ip_address: ip_address.into(),
            user_agent,
            device_info,
        }
    }

    /// Attach the acting user.
    pub fn with_actor(mut self, user_id: Option<i64>, username: Option<String>) -> Self {
        self.user_id = user_id;
        self.username = username;
        self
    }

    /// Raw User-Agent header.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Classified device label.
    pub fn device_info(&self) -> &DeviceInfo {
        &self.device_info
    }
}
