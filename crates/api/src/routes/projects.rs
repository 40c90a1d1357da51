//! Route definitions for the `/projects` resource.
//!
//! Also nests membership, task, and work-log collections under
//! `/projects/{project_id}/...`.
//!
//! ```text
//! GET    /                                   list
//! POST   /                                   create
//! GET    /{id}                               get_by_id
//! PATCH  /{id}                               update
//! DELETE /{id}                               delete
//!
//! GET    /{project_id}/members               project_members::list
//! POST   /{project_id}/members               project_members::add
//! PATCH  /{project_id}/members/{user_id}     project_members::update
//! DELETE /{project_id}/members/{user_id}     project_members::remove
//!
//! GET    /{project_id}/tasks                 tasks::list_by_project
//! POST   /{project_id}/tasks                 tasks::create
//!
//! GET    /{project_id}/work-logs             work_logs::list_by_project
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::{project_members, projects, tasks, work_logs};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list).post(projects::create))
        .route(
            "/{id}",
            get(projects::get_by_id)
                .patch(projects::update)
                .delete(projects::delete),
        )
        .route(
            "/{project_id}/members",
            get(project_members::list).post(project_members::add),
        )
        .route(
            "/{project_id}/members/{user_id}",
            axum::routing::patch(project_members::update).delete(project_members::remove),
        )
        .route(
            "/{project_id}/tasks",
            get(tasks::list_by_project).post(tasks::create),
        )
        .route("/{project_id}/work-logs", get(work_logs::list_by_project))
}
