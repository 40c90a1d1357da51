//! Route definitions, one module per resource, assembled by
//! [`api_routes`].

use axum::Router;

use crate::state::AppState;

pub mod approvals;
pub mod companies;
pub mod health;
pub mod profiles;
pub mod projects;
pub mod reports;
pub mod tasks;
pub mod work_logs;

/// All `/api/v1` routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/companies", companies::router())
        .nest("/profiles", profiles::router())
        .nest("/projects", projects::router())
        .nest("/tasks", tasks::router())
        .nest("/work-logs", work_logs::router())
        .nest("/approvals", approvals::router())
        .nest("/reports", reports::router())
        .nest("/dashboard", reports::dashboard_router())
}
