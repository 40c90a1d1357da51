use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use sitelog_core::types::{EntityId, Timestamp};

/// A row from the `companies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Company {
    pub id: EntityId,
    pub name: String,
    pub created_at: Timestamp,
}

/// Request body for creating or renaming a company.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyNameRequest {
    pub name: Option<String>,
}
