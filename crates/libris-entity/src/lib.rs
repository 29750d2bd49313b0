//! # libris-entity
//!
//! Domain entity models for the Libris activity log. Every struct in this
//! crate represents a database table row or a domain value object.

pub mod activity;
