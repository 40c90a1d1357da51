//! Handlers for project membership, nested under `/projects`.
//!
//! `member_role` is a free-text project-scoped label ("Foreman"); it has
//! nothing to do with the global privilege role on the profile.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use sitelog_core::error::CoreError;
use sitelog_core::roles::Role;
use sitelog_core::validate;
use sitelog_db::models::project_member::{
    AddMemberRequest, ProjectMember, UpdateMemberRequest,
};
use sitelog_db::repositories::ProjectMemberRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::projects::ensure_project_exists;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::require_role;
use crate::state::AppState;

/// GET /api/v1/projects/{project_id}/members
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> AppResult<Json<Vec<ProjectMember>>> {
    let project_id = validate::require_uuid(&project_id, "project_id")?;
    let members = ProjectMemberRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(members))
}

/// POST /api/v1/projects/{project_id}/members
///
/// Add an actor to the project. Requires manager or above.
pub async fn add(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    Json(input): Json<AddMemberRequest>,
) -> AppResult<(StatusCode, Json<ProjectMember>)> {
    require_role(&state.pool, auth.user_id, &[Role::Manager]).await?;
    let project_id = validate::require_uuid(&project_id, "project_id")?;

    let user_id = validate::require_str(input.user_id.as_deref(), "user_id")?;
    let user_id = validate::require_uuid(&user_id, "user_id")?;
    let member_role = validate::require_str(input.member_role.as_deref(), "member_role")?;

    ensure_project_exists(&state.pool, project_id).await?;

    let member = ProjectMemberRepo::add(&state.pool, project_id, user_id, &member_role).await?;
    tracing::info!(
        user_id = %auth.user_id,
        project_id = %project_id,
        member_id = %user_id,
        "Project member added"
    );
    Ok((StatusCode::CREATED, Json(member)))
}

/// PATCH /api/v1/projects/{project_id}/members/{user_id}
///
/// Change a member's role label. Requires manager or above.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((project_id, user_id)): Path<(String, String)>,
    Json(input): Json<UpdateMemberRequest>,
) -> AppResult<Json<ProjectMember>> {
    require_role(&state.pool, auth.user_id, &[Role::Manager]).await?;
    let project_id = validate::require_uuid(&project_id, "project_id")?;
    let user_id = validate::require_uuid(&user_id, "user_id")?;
    let member_role = validate::require_str(input.member_role.as_deref(), "member_role")?;

    let member = ProjectMemberRepo::update_role(&state.pool, project_id, user_id, &member_role)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectMember",
            id: user_id,
        }))?;
    Ok(Json(member))
}

/// DELETE /api/v1/projects/{project_id}/members/{user_id}
///
/// Requires manager or above.
pub async fn remove(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((project_id, user_id)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    require_role(&state.pool, auth.user_id, &[Role::Manager]).await?;
    let project_id = validate::require_uuid(&project_id, "project_id")?;
    let user_id = validate::require_uuid(&user_id, "user_id")?;

    if ProjectMemberRepo::remove(&state.pool, project_id, user_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ProjectMember",
            id: user_id,
        }))
    }
}
