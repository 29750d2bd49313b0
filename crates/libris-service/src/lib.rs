//! # libris-service
//!
//! Activity recording for the Libris audit trail. The recorder turns a
//! caller's description of a user action plus the current request context
//! into an `activity_logs` row, deriving the device label from the
//! User-Agent header.
//!
//! The storage collaborator is injected at construction as an
//! `Arc<dyn ActivityStore>`.

pub mod activity;
pub mod context;

pub use activity::{ActivityRecorder, ActivityStore};
pub use context::RequestContext;
