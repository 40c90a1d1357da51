//! Domain logic for the sitelog field-operations tracker.
//!
//! This crate is pure: no I/O, no database access, no HTTP. It owns the
//! role policy, input validation, the task and work-log workflow rules,
//! and the report aggregator. The API and repository layers both depend
//! on it; it depends on nothing internal.

pub mod error;
pub mod report;
pub mod roles;
pub mod status;
pub mod types;
pub mod validate;
pub mod workflow;
