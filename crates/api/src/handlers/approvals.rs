//! Handlers for the review queue.

use axum::extract::State;
use axum::Json;

use sitelog_core::roles::Role;
use sitelog_db::models::work_log::WorkLog;
use sitelog_db::repositories::WorkLogRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{load_profile, require_company, require_role};
use crate::state::AppState;

/// GET /api/v1/approvals/pending
///
/// All pending work logs across the caller's company. Requires manager
/// or above.
pub async fn pending(auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<Vec<WorkLog>>> {
    require_role(&state.pool, auth.user_id, &[Role::Manager]).await?;
    let profile = load_profile(&state.pool, auth.user_id).await?;
    let company_id = require_company(&profile)?;

    let queue = WorkLogRepo::list_pending_by_company(&state.pool, company_id).await?;
    Ok(Json(queue))
}
