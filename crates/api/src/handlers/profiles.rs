//! Handlers for the `/profiles` resource.
//!
//! Profiles are provisioned by the identity service; this surface
//! only offers self-service contact edits and the company roster.

use axum::extract::State;
use axum::Json;

use sitelog_core::error::CoreError;
use sitelog_core::roles::Role;
use sitelog_db::models::profile::{Profile, UpdateProfileRequest};
use sitelog_db::repositories::ProfileRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{load_profile, require_company, require_role};
use crate::state::AppState;

/// GET /api/v1/profiles/me
pub async fn me(auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<Profile>> {
    let profile = load_profile(&state.pool, auth.user_id).await?;
    Ok(Json(profile))
}

/// PATCH /api/v1/profiles/me
///
/// Update the caller's contact fields.
pub async fn update_me(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateProfileRequest>,
) -> AppResult<Json<Profile>> {
    if input.full_name.is_none() && input.phone.is_none() {
        return Err(AppError::Core(CoreError::Validation(
            "no fields to update".into(),
        )));
    }

    let profile = ProfileRepo::update_contact(
        &state.pool,
        auth.user_id,
        input.full_name.as_deref(),
        input.phone.as_deref(),
    )
    .await?
    .ok_or_else(|| AppError::Core(CoreError::Policy("actor has no profile record".into())))?;
    Ok(Json(profile))
}

/// GET /api/v1/profiles/company
///
/// The caller's company roster. Requires manager or above.
pub async fn company_roster(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Profile>>> {
    require_role(&state.pool, auth.user_id, &[Role::Manager]).await?;
    let profile = load_profile(&state.pool, auth.user_id).await?;
    let company_id = require_company(&profile)?;

    let roster = ProfileRepo::list_by_company(&state.pool, company_id).await?;
    Ok(Json(roster))
}
