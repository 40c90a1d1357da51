use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use sitelog_core::types::{EntityId, Timestamp};

/// A row from the `project_members` table. `member_role` is a free-text
/// project-scoped label, not the global privilege role.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectMember {
    pub project_id: EntityId,
    pub user_id: EntityId,
    pub member_role: String,
    pub created_at: Timestamp,
}

/// Request body for adding a member to a project.
#[derive(Debug, Clone, Deserialize)]
pub struct AddMemberRequest {
    pub user_id: Option<String>,
    pub member_role: Option<String>,
}

/// Request body for changing a member's project-scoped label.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMemberRequest {
    pub member_role: Option<String>,
}
