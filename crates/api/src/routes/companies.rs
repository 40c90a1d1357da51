//! Route definitions for the `/companies` resource.
//!
//! ```text
//! POST   /        create
//! GET    /me      me
//! PATCH  /{id}    rename
//! ```

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::companies;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(companies::create))
        .route("/me", get(companies::me))
        .route("/{id}", patch(companies::rename))
}
