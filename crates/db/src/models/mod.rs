//! Entity models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` request DTOs for the API layer (all-`Option` fields,
//!   validated field by field before they reach a repository)
//! - Plain insert/update structs carrying already-validated values

pub mod approval;
pub mod company;
pub mod profile;
pub mod project;
pub mod project_member;
pub mod task;
pub mod work_log;
