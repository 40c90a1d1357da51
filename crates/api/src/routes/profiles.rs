//! Route definitions for the `/profiles` resource.
//!
//! ```text
//! GET    /me        me
//! PATCH  /me        update_me
//! GET    /company   company_roster
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::profiles;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me", get(profiles::me).patch(profiles::update_me))
        .route("/company", get(profiles::company_roster))
}
