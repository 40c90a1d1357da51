//! Workflow rules: who may move which entity into which state.
//!
//! These modules are pure decision logic. The API layer resolves the
//! actor's role, calls the decision function, and only then performs the
//! mutation through the repository layer.

pub mod task;
pub mod work_log;
