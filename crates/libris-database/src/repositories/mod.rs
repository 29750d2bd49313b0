//! Repository implementations.

pub mod activity;

pub use activity::ActivityLogRepository;
