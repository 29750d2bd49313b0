//! # libris-database
//!
//! PostgreSQL connection management, schema bootstrap, and the concrete
//! activity log repository.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::ActivityLogRepository;
