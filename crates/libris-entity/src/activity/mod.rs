//! Activity log entries, their taxonomy, and user-agent classification.

pub mod device;
pub mod model;
pub mod module;
pub mod status;

pub use device::{Browser, DeviceInfo, OperatingSystem, classify};
pub use model::{ActivityLogEntry, NewActivityEntry};
pub use module::ActivityModule;
pub use status::ActivityStatus;
