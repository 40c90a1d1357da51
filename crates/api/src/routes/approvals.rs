//! Route definitions for the review queue.
//!
//! ```text
//! GET    /pending    pending
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::approvals;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/pending", get(approvals::pending))
}
