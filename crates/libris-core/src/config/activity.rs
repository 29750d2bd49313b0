//! Activity log configuration.

use serde::{Deserialize, Serialize};

/// Settings for the activity recorder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityConfig {
    /// Create the `activity_logs` table at startup if it is missing.
    #[serde(default = "default_true")]
    pub ensure_schema_on_startup: bool,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            ensure_schema_on_startup: true,
        }
    }
}

fn default_true() -> bool {
    true
}
