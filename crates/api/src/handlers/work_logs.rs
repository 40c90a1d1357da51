//! Handlers for the `/work-logs` resource and the one-shot review
//! lifecycle.
//!
//! Every mutation of an existing log goes through a conditional write
//! guarded by `status = 'pending'`. A zero-row match surfaces as 409:
//! the log was already finalized by someone else, or it never existed —
//! the caller cannot tell which, and should re-fetch rather than retry.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use sitelog_core::error::CoreError;
use sitelog_core::roles::Role;
use sitelog_core::status::ApprovalStatus;
use sitelog_core::types::EntityId;
use sitelog_core::validate;
use sitelog_core::workflow::work_log as review;
use sitelog_db::models::approval::{Approval, NewApproval};
use sitelog_db::models::work_log::{
    CreateWorkLogRequest, NewWorkLog, ReviewRequest, UpdateWorkLogRequest, WorkLog, WorkLogUpdate,
};
use sitelog_db::repositories::{ApprovalRepo, TaskRepo, WorkLogRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::require_role;
use crate::state::AppState;

fn pending_conflict(operation: &str, id: EntityId) -> AppError {
    tracing::warn!(work_log_id = %id, operation, "Conditional write matched no pending row");
    AppError::Core(CoreError::Conflict(
        "work log is not pending: already approved or rejected, or it does not exist".into(),
    ))
}

/// GET /api/v1/tasks/{task_id}/work-logs
pub async fn list_by_task(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> AppResult<Json<Vec<WorkLog>>> {
    let task_id = validate::require_uuid(&task_id, "task_id")?;
    let logs = WorkLogRepo::list_by_task(&state.pool, task_id).await?;
    Ok(Json(logs))
}

/// GET /api/v1/projects/{project_id}/work-logs
pub async fn list_by_project(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> AppResult<Json<Vec<WorkLog>>> {
    let project_id = validate::require_uuid(&project_id, "project_id")?;
    let logs = WorkLogRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(logs))
}

/// POST /api/v1/tasks/{task_id}/work-logs
///
/// Record effort against a task. Always created pending. The owning
/// project is resolved from the parent task, never from the request, so
/// a log cannot be forged into a foreign project.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    Json(input): Json<CreateWorkLogRequest>,
) -> AppResult<(StatusCode, Json<WorkLog>)> {
    let task_id = validate::require_uuid(&task_id, "task_id")?;
    let log_date = validate::require_date(input.log_date.as_deref(), "log_date")?;
    let qty_done = validate::optional_number(input.qty_done, "qty_done")?;
    let hours = validate::optional_number(input.hours, "hours")?;

    let task = TaskRepo::find_by_id(&state.pool, task_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: task_id,
        }))?;

    let log = WorkLogRepo::create(
        &state.pool,
        &NewWorkLog {
            task_id,
            project_id: task.project_id,
            user_id: auth.user_id,
            log_date,
            qty_done,
            hours,
            note: input.note.clone(),
        },
    )
    .await?;

    tracing::info!(user_id = %auth.user_id, work_log_id = %log.id, "Work log created");
    Ok((StatusCode::CREATED, Json(log)))
}

/// PATCH /api/v1/work-logs/{id}
///
/// Conditional update: succeeds only while the log is still pending at
/// write time. An empty patch is a validation error.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateWorkLogRequest>,
) -> AppResult<Json<WorkLog>> {
    let log_id = validate::require_uuid(&id, "id")?;
    let updates = WorkLogUpdate {
        qty_done: validate::optional_number(input.qty_done, "qty_done")?,
        hours: validate::optional_number(input.hours, "hours")?,
        note: input.note.clone(),
    };
    if updates.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "no fields to update".into(),
        )));
    }

    let log = WorkLogRepo::update_pending(&state.pool, log_id, &updates)
        .await?
        .ok_or_else(|| pending_conflict("update", log_id))?;

    tracing::debug!(user_id = %auth.user_id, work_log_id = %log_id, "Work log updated");
    Ok(Json(log))
}

/// DELETE /api/v1/work-logs/{id}
///
/// Conditional delete: only pending logs may be removed.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let log_id = validate::require_uuid(&id, "id")?;

    if WorkLogRepo::delete_pending(&state.pool, log_id).await? {
        tracing::info!(user_id = %auth.user_id, work_log_id = %log_id, "Work log deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(pending_conflict("delete", log_id))
    }
}

/// POST /api/v1/work-logs/{id}/approve
///
/// Finalize a pending log as approved and write the audit row. Requires
/// manager or above; the note is optional. Of concurrent reviewers,
/// exactly one wins the conditional transition and inserts the approval
/// record; everyone else gets 409 and no record is written.
pub async fn approve(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<ReviewRequest>,
) -> AppResult<(StatusCode, Json<Approval>)> {
    finalize(auth, state, id, ApprovalStatus::Approved, input.note).await
}

/// POST /api/v1/work-logs/{id}/reject
///
/// Finalize a pending log as rejected. Requires manager or above and a
/// non-empty note, checked before any state is touched.
pub async fn reject(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<ReviewRequest>,
) -> AppResult<(StatusCode, Json<Approval>)> {
    finalize(auth, state, id, ApprovalStatus::Rejected, input.note).await
}

async fn finalize(
    auth: AuthUser,
    state: AppState,
    id: String,
    decision: ApprovalStatus,
    note: Option<String>,
) -> AppResult<(StatusCode, Json<Approval>)> {
    require_role(&state.pool, auth.user_id, &[Role::Manager]).await?;
    let log_id = validate::require_uuid(&id, "id")?;
    let note = review::validate_review_note(decision, note.as_deref())?;

    // The serialization point: only the winner proceeds to the insert.
    let log = WorkLogRepo::finalize_pending(
        &state.pool,
        log_id,
        decision.work_log_status().as_str(),
    )
    .await?
    .ok_or_else(|| pending_conflict(decision.as_str(), log_id))?;

    let approval = ApprovalRepo::create(
        &state.pool,
        &NewApproval {
            work_log_id: log.id,
            approved_by: auth.user_id,
            status: decision.as_str().to_string(),
            note,
        },
    )
    .await?;

    tracing::info!(
        user_id = %auth.user_id,
        work_log_id = %log_id,
        decision = decision.as_str(),
        "Work log finalized"
    );
    Ok((StatusCode::CREATED, Json(approval)))
}

/// GET /api/v1/work-logs/{id}/approval
///
/// The audit row for a finalized log; 404 while the log is still
/// pending.
pub async fn get_approval(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Approval>> {
    let log_id = validate::require_uuid(&id, "id")?;
    let approval = ApprovalRepo::find_by_work_log(&state.pool, log_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Approval",
            id: log_id,
        }))?;
    Ok(Json(approval))
}
