//! Handlers for the `/tasks` resource and the task workflow.
//!
//! The role-gated transition rules live in
//! `sitelog_core::workflow::task`; handlers here resolve the actor's
//! role once, apply the decision, and perform the mutation.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use sitelog_core::error::CoreError;
use sitelog_core::roles::Role;
use sitelog_core::status::{TaskApprovalStatus, TaskStatus};
use sitelog_core::validate;
use sitelog_core::workflow::task as task_workflow;
use sitelog_db::models::task::{
    CreateTaskRequest, NewTask, Task, TaskUpdate, UpdateTaskRequest,
};
use sitelog_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::projects::ensure_project_exists;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::require_role;
use crate::state::AppState;

/// GET /api/v1/projects/{project_id}/tasks
pub async fn list_by_project(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> AppResult<Json<Vec<Task>>> {
    let project_id = validate::require_uuid(&project_id, "project_id")?;
    let tasks = TaskRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(tasks))
}

/// POST /api/v1/projects/{project_id}/tasks
///
/// Open to every provisioned actor; the governance fields are resolved
/// per role. Members are forced to self-assign and land in draft (or
/// pending on request); manager+ tasks are auto-approved regardless of
/// the requested approval status.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    Json(input): Json<CreateTaskRequest>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let role = require_role(&state.pool, auth.user_id, &[Role::Member]).await?;
    let project_id = validate::require_uuid(&project_id, "project_id")?;

    let title = validate::require_str(input.title.as_deref(), "title")?;
    let unit = validate::require_str(input.unit.as_deref(), "unit")?;
    let planned_qty = validate::optional_number(input.planned_qty, "planned_qty")?;
    let planned_hours = validate::optional_number(input.planned_hours, "planned_hours")?;
    let start_date = validate::optional_date(input.start_date.as_deref(), "start_date")?;
    let end_date = validate::optional_date(input.end_date.as_deref(), "end_date")?;
    let status = validate::require_enum(
        input.status.as_deref(),
        "status",
        TaskStatus::ALL,
        TaskStatus::parse,
    )?;
    let requested_approval = validate::optional_enum(
        input.approval_status.as_deref(),
        "approval_status",
        TaskApprovalStatus::ALL,
        TaskApprovalStatus::parse,
    )?;

    let decision = task_workflow::resolve_create(
        role,
        auth.user_id,
        requested_approval,
        input.assigned_to,
    )?;

    ensure_project_exists(&state.pool, project_id).await?;

    let task = TaskRepo::create(
        &state.pool,
        &NewTask {
            project_id,
            title,
            unit,
            planned_qty,
            planned_hours,
            start_date,
            end_date,
            status: status.as_str().to_string(),
            approval_status: decision.approval_status.as_str().to_string(),
            assigned_to: decision.assigned_to,
        },
    )
    .await?;

    tracing::info!(
        user_id = %auth.user_id,
        task_id = %task.id,
        approval_status = %task.approval_status,
        "Task created"
    );
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/v1/tasks/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Task>> {
    let task_id = validate::require_uuid(&id, "id")?;
    let task = TaskRepo::find_by_id(&state.pool, task_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: task_id,
        }))?;
    Ok(Json(task))
}

/// PATCH /api/v1/tasks/{id}
///
/// Partial update of any mutable field. Members may not reassign and may
/// only move the governance axis between draft and pending; an empty
/// patch is a validation error.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateTaskRequest>,
) -> AppResult<Json<Task>> {
    let role = require_role(&state.pool, auth.user_id, &[Role::Member]).await?;
    let task_id = validate::require_uuid(&id, "id")?;

    let status = validate::optional_enum(
        input.status.as_deref(),
        "status",
        TaskStatus::ALL,
        TaskStatus::parse,
    )?;
    let requested_approval = validate::optional_enum(
        input.approval_status.as_deref(),
        "approval_status",
        TaskApprovalStatus::ALL,
        TaskApprovalStatus::parse,
    )?;

    task_workflow::check_update(role, input.assigned_to.is_some(), requested_approval)?;

    let updates = TaskUpdate {
        title: input.title.clone(),
        unit: input.unit.clone(),
        planned_qty: validate::optional_number(input.planned_qty, "planned_qty")?,
        planned_hours: validate::optional_number(input.planned_hours, "planned_hours")?,
        start_date: validate::optional_date(input.start_date.as_deref(), "start_date")?,
        end_date: validate::optional_date(input.end_date.as_deref(), "end_date")?,
        status: status.map(|s| s.as_str().to_string()),
        approval_status: requested_approval.map(|s| s.as_str().to_string()),
        assigned_to: input.assigned_to,
    };
    if updates.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "no fields to update".into(),
        )));
    }

    let task = TaskRepo::update(&state.pool, task_id, &updates)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: task_id,
        }))?;
    Ok(Json(task))
}

/// POST /api/v1/tasks/{id}/submit
///
/// The assignee's shortcut: put the task up for approval. Sets the
/// governance axis to pending unconditionally.
pub async fn submit(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Task>> {
    require_role(&state.pool, auth.user_id, &[Role::Member]).await?;
    let task_id = validate::require_uuid(&id, "id")?;

    let task = TaskRepo::find_by_id(&state.pool, task_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: task_id,
        }))?;
    task_workflow::check_submit(auth.user_id, task.assigned_to)?;

    let task = TaskRepo::set_approval_status(&state.pool, task_id, "pending")
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: task_id,
        }))?;

    tracing::info!(user_id = %auth.user_id, task_id = %task_id, "Task submitted for approval");
    Ok(Json(task))
}

/// POST /api/v1/tasks/{id}/approve
///
/// Force-approve. Requires manager or above; no precondition on the
/// prior governance status, and concurrent approvals are
/// last-writer-wins into the same state.
pub async fn approve(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Task>> {
    require_role(&state.pool, auth.user_id, &[Role::Manager]).await?;
    let task_id = validate::require_uuid(&id, "id")?;

    let task = TaskRepo::set_approval_status(&state.pool, task_id, "approved")
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: task_id,
        }))?;

    tracing::info!(user_id = %auth.user_id, task_id = %task_id, "Task approved");
    Ok(Json(task))
}

/// DELETE /api/v1/tasks/{id}
///
/// Requires manager or above.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    require_role(&state.pool, auth.user_id, &[Role::Manager]).await?;
    let task_id = validate::require_uuid(&id, "id")?;

    if TaskRepo::delete(&state.pool, task_id).await? {
        tracing::info!(user_id = %auth.user_id, task_id = %task_id, "Task deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: task_id,
        }))
    }
}
