//! Role-based access control helpers.
//!
//! Every mutating handler makes exactly one authorization call before
//! touching entity state: [`require_role`] resolves the actor's profile
//! row, turns a missing or unparseable role into a policy failure, and
//! delegates the rank check to `sitelog_core::roles::authorize`.
//!
//! Policy vs. permission: an actor with no resolvable role record is
//! mis-provisioned upstream (`CoreError::Policy`), which is a different
//! failure from a valid actor whose rank is simply too low
//! (`CoreError::PermissionDenied`).

use sqlx::PgPool;

use sitelog_core::error::CoreError;
use sitelog_core::roles::{authorize, Role};
use sitelog_core::types::EntityId;
use sitelog_db::models::profile::Profile;
use sitelog_db::repositories::ProfileRepo;

use crate::error::AppError;

/// Load the actor's profile row, failing with a policy error if the
/// actor was never provisioned.
pub async fn load_profile(pool: &PgPool, user_id: EntityId) -> Result<Profile, AppError> {
    ProfileRepo::find_by_id(pool, user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Policy("actor has no profile record".into())))
}

/// Parse the stored role value, failing with a policy error on anything
/// outside the known set.
pub fn role_of(profile: &Profile) -> Result<Role, AppError> {
    Role::parse(&profile.role).ok_or_else(|| {
        AppError::Core(CoreError::Policy(format!(
            "actor has unknown role {:?}",
            profile.role
        )))
    })
}

/// Resolve the actor's role and check it against `required`.
///
/// Returns the resolved role so handlers can branch on it afterwards
/// without a second lookup.
pub async fn require_role(
    pool: &PgPool,
    user_id: EntityId,
    required: &[Role],
) -> Result<Role, AppError> {
    let profile = load_profile(pool, user_id).await?;
    let role = role_of(&profile)?;
    authorize(role, required)?;
    Ok(role)
}

/// The actor's company affiliation, required for tenant-scoped
/// operations.
pub fn require_company(profile: &Profile) -> Result<EntityId, AppError> {
    profile.company_id.ok_or_else(|| {
        AppError::Core(CoreError::Validation(
            "user is not assigned to a company".into(),
        ))
    })
}
