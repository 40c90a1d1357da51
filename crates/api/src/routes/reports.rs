//! Route definitions for the report views.
//!
//! ```text
//! GET    /project/{id}    project_report
//! GET    /user/{id}       user_report
//! GET    /company         company_report
//! ```
//!
//! The dashboard summary lives under its own prefix:
//!
//! ```text
//! GET    /summary         dashboard_summary
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/project/{id}", get(reports::project_report))
        .route("/user/{id}", get(reports::user_report))
        .route("/company", get(reports::company_report))
}

pub fn dashboard_router() -> Router<AppState> {
    Router::new().route("/summary", get(reports::dashboard_summary))
}
