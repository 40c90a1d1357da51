//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use sitelog_core::error::CoreError;
use sitelog_core::roles::Role;
use sitelog_core::status::ProjectStatus;
use sitelog_core::validate;
use sitelog_db::models::project::{
    CreateProjectRequest, NewProject, Project, ProjectUpdate, UpdateProjectRequest,
};
use sitelog_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{load_profile, require_company, require_role};
use crate::state::AppState;

/// GET /api/v1/projects
///
/// All projects of the caller's company.
pub async fn list(auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let profile = load_profile(&state.pool, auth.user_id).await?;
    let company_id = require_company(&profile)?;
    let projects = ProjectRepo::list_by_company(&state.pool, company_id).await?;
    Ok(Json(projects))
}

/// POST /api/v1/projects
///
/// Create a project in the caller's company. Requires manager or above.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateProjectRequest>,
) -> AppResult<(StatusCode, Json<Project>)> {
    require_role(&state.pool, auth.user_id, &[Role::Manager]).await?;

    let name = validate::require_str(input.name.as_deref(), "name")?;
    let status = validate::require_enum(
        input.status.as_deref(),
        "status",
        ProjectStatus::ALL,
        ProjectStatus::parse,
    )?;
    let start_date = validate::optional_date(input.start_date.as_deref(), "start_date")?;
    let end_date = validate::optional_date(input.end_date.as_deref(), "end_date")?;

    let profile = load_profile(&state.pool, auth.user_id).await?;
    let company_id = require_company(&profile)?;

    let project = ProjectRepo::create(
        &state.pool,
        &NewProject {
            company_id,
            name,
            status: status.as_str().to_string(),
            start_date,
            end_date,
        },
    )
    .await?;

    tracing::info!(user_id = %auth.user_id, project_id = %project.id, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Project>> {
    let project_id = validate::require_uuid(&id, "id")?;
    let project = ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;
    Ok(Json(project))
}

/// PATCH /api/v1/projects/{id}
///
/// Partial update. Requires manager or above; an empty patch is a
/// validation error, not a silent success.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateProjectRequest>,
) -> AppResult<Json<Project>> {
    require_role(&state.pool, auth.user_id, &[Role::Manager]).await?;
    let project_id = validate::require_uuid(&id, "id")?;

    let status = validate::optional_enum(
        input.status.as_deref(),
        "status",
        ProjectStatus::ALL,
        ProjectStatus::parse,
    )?;
    let updates = ProjectUpdate {
        name: input.name.clone(),
        status: status.map(|s| s.as_str().to_string()),
        start_date: validate::optional_date(input.start_date.as_deref(), "start_date")?,
        end_date: validate::optional_date(input.end_date.as_deref(), "end_date")?,
    };
    if updates.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "no fields to update".into(),
        )));
    }

    let project = ProjectRepo::update(&state.pool, project_id, &updates)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
///
/// Requires the admin role.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    require_role(&state.pool, auth.user_id, &[Role::Admin]).await?;
    let project_id = validate::require_uuid(&id, "id")?;

    if ProjectRepo::delete(&state.pool, project_id).await? {
        tracing::info!(user_id = %auth.user_id, project_id = %project_id, "Project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))
    }
}

/// Verify a project exists before nesting entities under it.
pub async fn ensure_project_exists(
    pool: &sqlx::PgPool,
    project_id: sitelog_core::types::EntityId,
) -> Result<Project, AppError> {
    ProjectRepo::find_by_id(pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))
}
