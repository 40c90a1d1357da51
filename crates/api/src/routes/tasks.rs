//! Route definitions for the `/tasks` resource.
//!
//! ```text
//! GET    /{id}                  get_by_id
//! PATCH  /{id}                  update
//! DELETE /{id}                  delete
//! POST   /{id}/submit           submit
//! POST   /{id}/approve          approve
//!
//! GET    /{task_id}/work-logs   work_logs::list_by_task
//! POST   /{task_id}/work-logs   work_logs::create
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{tasks, work_logs};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(tasks::get_by_id)
                .patch(tasks::update)
                .delete(tasks::delete),
        )
        .route("/{id}/submit", post(tasks::submit))
        .route("/{id}/approve", post(tasks::approve))
        .route(
            "/{task_id}/work-logs",
            get(work_logs::list_by_task).post(work_logs::create),
        )
}
