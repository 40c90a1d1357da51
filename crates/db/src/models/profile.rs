use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use sitelog_core::types::{EntityId, Timestamp};

/// A row from the `profiles` table. One per authenticated actor; the id
/// is the identity service's subject claim.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: EntityId,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub role: String,
    pub company_id: Option<EntityId>,
    pub created_at: Timestamp,
}

/// Request body for updating the caller's own profile.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub phone: Option<String>,
}
