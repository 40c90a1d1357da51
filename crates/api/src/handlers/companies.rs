//! Handlers for the `/companies` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use sitelog_core::error::CoreError;
use sitelog_core::roles::Role;
use sitelog_core::validate;
use sitelog_db::models::company::{Company, CompanyNameRequest};
use sitelog_db::repositories::CompanyRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{load_profile, require_company, require_role};
use crate::state::AppState;

/// POST /api/v1/companies
///
/// Bootstrap a new tenant. Open to any authenticated actor; attaching
/// actors to the company is the identity side's provisioning concern.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CompanyNameRequest>,
) -> AppResult<(StatusCode, Json<Company>)> {
    let name = validate::require_str(input.name.as_deref(), "name")?;
    let company = CompanyRepo::create(&state.pool, &name).await?;
    tracing::info!(user_id = %auth.user_id, company_id = %company.id, "Company created");
    Ok((StatusCode::CREATED, Json(company)))
}

/// PATCH /api/v1/companies/{id}
///
/// Rename a company. Requires the admin role.
pub async fn rename(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<CompanyNameRequest>,
) -> AppResult<Json<Company>> {
    require_role(&state.pool, auth.user_id, &[Role::Admin]).await?;
    let company_id = validate::require_uuid(&id, "id")?;
    let name = validate::require_str(input.name.as_deref(), "name")?;

    let company = CompanyRepo::rename(&state.pool, company_id, &name)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Company",
            id: company_id,
        }))?;
    Ok(Json(company))
}

/// GET /api/v1/companies/me
///
/// The caller's own company.
pub async fn me(auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<Company>> {
    let profile = load_profile(&state.pool, auth.user_id).await?;
    let company_id = require_company(&profile)?;

    let company = CompanyRepo::find_by_id(&state.pool, company_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Company",
            id: company_id,
        }))?;
    Ok(Json(company))
}
