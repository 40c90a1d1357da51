use serde::Serialize;
use sqlx::FromRow;

use sitelog_core::types::{EntityId, Timestamp};

/// A row from the `approvals` table. Written exactly once when a work
/// log leaves `pending`; never updated or deleted afterwards.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Approval {
    pub id: EntityId,
    pub work_log_id: EntityId,
    pub approved_by: EntityId,
    pub status: String,
    pub note: Option<String>,
    pub approved_at: Timestamp,
    pub created_at: Timestamp,
}

/// Insert values for the audit row; only built after the conditional
/// work-log transition succeeded.
#[derive(Debug, Clone)]
pub struct NewApproval {
    pub work_log_id: EntityId,
    pub approved_by: EntityId,
    pub status: String,
    pub note: Option<String>,
}
