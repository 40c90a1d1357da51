//! HTTP handlers, one module per resource.
//!
//! Every handler follows the same shape: authenticate (extractor),
//! validate input, authorize via the RBAC helper, then mutate through a
//! repository and map empty matches onto the failure taxonomy.

pub mod approvals;
pub mod companies;
pub mod profiles;
pub mod project_members;
pub mod projects;
pub mod reports;
pub mod tasks;
pub mod work_logs;
