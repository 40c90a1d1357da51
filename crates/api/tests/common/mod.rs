//! Shared harness for HTTP-level integration tests.
//!
//! Mirrors the production router construction via
//! `sitelog_api::router::build_app_router` so tests exercise the same
//! middleware stack, and mints bearer tokens directly with the shared
//! secret — the identity service's job in production.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use sitelog_api::auth::jwt::{encode_token, JwtConfig};
use sitelog_api::config::ServerConfig;
use sitelog_api::router::build_app_router;
use sitelog_api::state::AppState;
use sitelog_db::models::project::NewProject;
use sitelog_db::models::task::NewTask;
use sitelog_db::models::{company::Company, profile::Profile, project::Project, task::Task};
use sitelog_db::repositories::{CompanyRepo, ProfileRepo, ProjectRepo, TaskRepo};

const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Build a test `ServerConfig` with safe defaults and a fixed JWT
/// secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_ttl_secs: 3600,
        },
    }
}

/// Build the full application router with all middleware layers.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Mint a bearer token for an actor id.
pub fn token_for(user_id: Uuid) -> String {
    encode_token(user_id, &test_config().jwt).expect("token encoding should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the status and return the `code` field of the error body.
pub async fn error_code(response: Response<Body>, expected: StatusCode) -> String {
    assert_eq!(response.status(), expected);
    let json = body_json(response).await;
    json["code"].as_str().expect("error body has a code").to_string()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn seed_company(pool: &PgPool) -> Company {
    CompanyRepo::create(pool, "Acme Civil")
        .await
        .expect("company creation should succeed")
}

pub async fn seed_profile(pool: &PgPool, role: &str, company_id: Option<Uuid>) -> Profile {
    ProfileRepo::create(pool, Uuid::new_v4(), Some("Test Crew"), role, company_id)
        .await
        .expect("profile creation should succeed")
}

pub async fn seed_project(pool: &PgPool, company_id: Uuid) -> Project {
    ProjectRepo::create(
        pool,
        &NewProject {
            company_id,
            name: "Bypass".to_string(),
            status: "active".to_string(),
            start_date: None,
            end_date: None,
        },
    )
    .await
    .expect("project creation should succeed")
}

pub async fn seed_task(pool: &PgPool, project_id: Uuid, assigned_to: Option<Uuid>) -> Task {
    TaskRepo::create(
        pool,
        &NewTask {
            project_id,
            title: "Pour foundation".to_string(),
            unit: "m3".to_string(),
            planned_qty: Some(40.0),
            planned_hours: Some(16.0),
            start_date: None,
            end_date: None,
            status: "todo".to_string(),
            approval_status: "draft".to_string(),
            assigned_to,
        },
    )
    .await
    .expect("task creation should succeed")
}
