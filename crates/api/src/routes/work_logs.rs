//! Route definitions for the `/work-logs` resource.
//!
//! ```text
//! PATCH  /{id}            update
//! DELETE /{id}            delete
//! POST   /{id}/approve    approve
//! POST   /{id}/reject     reject
//! GET    /{id}/approval   get_approval
//! ```

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::work_logs;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", patch(work_logs::update).delete(work_logs::delete))
        .route("/{id}/approve", post(work_logs::approve))
        .route("/{id}/reject", post(work_logs::reject))
        .route("/{id}/approval", get(work_logs::get_approval))
}
