//! Handlers for the report views.
//!
//! Four views, one aggregator: dashboard, project, user, and company
//! reports all reduce their work logs with
//! `sitelog_core::report::summarize` and differ only in which logs they
//! fetch.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use sitelog_core::error::CoreError;
use sitelog_core::report::{summarize, ReportSummary};
use sitelog_core::types::EntityId;
use sitelog_core::validate;
use sitelog_db::models::{project::Project, task::Task, work_log::WorkLog};
use sitelog_db::repositories::{ProjectRepo, TaskRepo, WorkLogRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{load_profile, require_company};
use crate::state::AppState;

/// Response body for `GET /reports/project/{id}`.
#[derive(Debug, Serialize)]
pub struct ProjectReport {
    pub project: Project,
    pub tasks: Vec<Task>,
    pub work_logs: Vec<WorkLog>,
    pub summary: ReportSummary,
}

/// Response body for `GET /reports/user/{id}`.
#[derive(Debug, Serialize)]
pub struct UserReport {
    pub user_id: EntityId,
    pub work_logs: Vec<WorkLog>,
    pub summary: ReportSummary,
}

/// Response body for `GET /reports/company`.
#[derive(Debug, Serialize)]
pub struct CompanyReport {
    pub projects: Vec<Project>,
    pub summary: ReportSummary,
}

/// GET /api/v1/dashboard/summary
///
/// Company-wide totals for the caller's tenant.
pub async fn dashboard_summary(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<ReportSummary>> {
    let profile = load_profile(&state.pool, auth.user_id).await?;
    let company_id = require_company(&profile)?;

    let logs = WorkLogRepo::list_by_company(&state.pool, company_id).await?;
    Ok(Json(summarize(&logs)))
}

/// GET /api/v1/reports/project/{id}
pub async fn project_report(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProjectReport>> {
    let project_id = validate::require_uuid(&id, "id")?;
    let project = ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;

    let tasks = TaskRepo::list_by_project(&state.pool, project_id).await?;
    let work_logs = WorkLogRepo::list_by_project(&state.pool, project_id).await?;
    let summary = summarize(&work_logs);

    Ok(Json(ProjectReport {
        project,
        tasks,
        work_logs,
        summary,
    }))
}

/// GET /api/v1/reports/user/{id}
pub async fn user_report(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserReport>> {
    let user_id = validate::require_uuid(&id, "id")?;
    let work_logs = WorkLogRepo::list_by_user(&state.pool, user_id).await?;
    let summary = summarize(&work_logs);

    Ok(Json(UserReport {
        user_id,
        work_logs,
        summary,
    }))
}

/// GET /api/v1/reports/company
///
/// All projects of the caller's company plus the company-wide summary.
pub async fn company_report(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<CompanyReport>> {
    let profile = load_profile(&state.pool, auth.user_id).await?;
    let company_id = require_company(&profile)?;

    let projects = ProjectRepo::list_by_company(&state.pool, company_id).await?;
    let work_logs = WorkLogRepo::list_by_company(&state.pool, company_id).await?;
    let summary = summarize(&work_logs);

    Ok(Json(CompanyReport { projects, summary }))
}
