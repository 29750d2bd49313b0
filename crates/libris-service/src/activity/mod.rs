//! Activity recording: the storage port, the recorder, and the
//! per-event convenience calls built on top of it.

pub mod events;
pub mod recorder;
pub mod store;

#[cfg(test)]
mod testing;

pub use recorder::ActivityRecorder;
pub use store::ActivityStore;
