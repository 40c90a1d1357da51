//! HTTP-level tests for the four report views sharing one aggregator.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth};
use sqlx::PgPool;
use uuid::Uuid;

use sitelog_db::models::work_log::NewWorkLog;
use sitelog_db::repositories::WorkLogRepo;

async fn seed_log(
    pool: &PgPool,
    task_id: Uuid,
    project_id: Uuid,
    user_id: Uuid,
    hours: f64,
    qty: f64,
) -> Uuid {
    WorkLogRepo::create(
        pool,
        &NewWorkLog {
            task_id,
            project_id,
            user_id,
            log_date: chrono::NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            qty_done: Some(qty),
            hours: Some(hours),
            note: None,
        },
    )
    .await
    .expect("work log creation should succeed")
    .id
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_dashboard_summary_spans_the_company(pool: PgPool) {
    let company = common::seed_company(&pool).await;
    let member = common::seed_profile(&pool, "member", Some(company.id)).await;
    let manager = common::seed_profile(&pool, "manager", Some(company.id)).await;
    let project = common::seed_project(&pool, company.id).await;
    let task = common::seed_task(&pool, project.id, Some(member.id)).await;

    let approved = seed_log(&pool, task.id, project.id, member.id, 8.0, 10.0).await;
    seed_log(&pool, task.id, project.id, member.id, 4.0, 5.0).await;
    WorkLogRepo::finalize_pending(&pool, approved, "approved")
        .await
        .unwrap()
        .expect("finalization should succeed");

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        "/api/v1/dashboard/summary",
        &common::token_for(manager.id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["total_hours"], 12.0);
    assert_eq!(json["total_qty"], 15.0);
    assert_eq!(json["pending"], 1);
    assert_eq!(json["approved"], 1);
    assert_eq!(json["rejected"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_project_report_bundles_tasks_logs_and_summary(pool: PgPool) {
    let company = common::seed_company(&pool).await;
    let member = common::seed_profile(&pool, "member", Some(company.id)).await;
    let project = common::seed_project(&pool, company.id).await;
    let task = common::seed_task(&pool, project.id, Some(member.id)).await;
    seed_log(&pool, task.id, project.id, member.id, 8.0, 10.0).await;

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!("/api/v1/reports/project/{}", project.id),
        &common::token_for(member.id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["project"]["id"], serde_json::json!(project.id));
    assert_eq!(json["tasks"].as_array().unwrap().len(), 1);
    assert_eq!(json["work_logs"].as_array().unwrap().len(), 1);
    assert_eq!(json["summary"]["total_hours"], 8.0);
    assert_eq!(json["summary"]["pending"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_project_report_missing_project_is_404(pool: PgPool) {
    let company = common::seed_company(&pool).await;
    let member = common::seed_profile(&pool, "member", Some(company.id)).await;

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!("/api/v1/reports/project/{}", Uuid::new_v4()),
        &common::token_for(member.id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_user_report_scopes_to_the_author(pool: PgPool) {
    let company = common::seed_company(&pool).await;
    let crew_a = common::seed_profile(&pool, "member", Some(company.id)).await;
    let crew_b = common::seed_profile(&pool, "member", Some(company.id)).await;
    let project = common::seed_project(&pool, company.id).await;
    let task = common::seed_task(&pool, project.id, Some(crew_a.id)).await;

    seed_log(&pool, task.id, project.id, crew_a.id, 8.0, 1.0).await;
    seed_log(&pool, task.id, project.id, crew_b.id, 3.0, 1.0).await;

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!("/api/v1/reports/user/{}", crew_a.id),
        &common::token_for(crew_a.id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["user_id"], serde_json::json!(crew_a.id));
    assert_eq!(json["work_logs"].as_array().unwrap().len(), 1);
    assert_eq!(json["summary"]["total_hours"], 8.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_company_report_lists_projects_with_summary(pool: PgPool) {
    let company = common::seed_company(&pool).await;
    let manager = common::seed_profile(&pool, "manager", Some(company.id)).await;
    let member = common::seed_profile(&pool, "member", Some(company.id)).await;
    let project = common::seed_project(&pool, company.id).await;
    let task = common::seed_task(&pool, project.id, Some(member.id)).await;
    seed_log(&pool, task.id, project.id, member.id, 8.0, 2.0).await;

    // A second project with no logs still shows up in the listing.
    common::seed_project(&pool, company.id).await;

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        "/api/v1/reports/company",
        &common::token_for(manager.id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["projects"].as_array().unwrap().len(), 2);
    assert_eq!(json["summary"]["total_hours"], 8.0);
    assert_eq!(json["summary"]["pending"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unaffiliated_actor_cannot_pull_company_views(pool: PgPool) {
    let _company = common::seed_company(&pool).await;
    let floating = common::seed_profile(&pool, "member", None).await;

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        "/api/v1/dashboard/summary",
        &common::token_for(floating.id),
    )
    .await;
    let code = common::error_code(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(code, "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_summary_shape_matches_the_aggregator(pool: PgPool) {
    let company = common::seed_company(&pool).await;
    let member = common::seed_profile(&pool, "member", Some(company.id)).await;
    let project = common::seed_project(&pool, company.id).await;
    let task = common::seed_task(&pool, project.id, Some(member.id)).await;

    // Create via the API so the whole pipeline is exercised.
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/tasks/{}/work-logs", task.id),
        &common::token_for(member.id),
        serde_json::json!({ "log_date": "2026-06-02", "hours": 2.5 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        "/api/v1/dashboard/summary",
        &common::token_for(member.id),
    )
    .await;
    let json = body_json(response).await;
    for key in ["total_hours", "total_qty", "pending", "approved", "rejected"] {
        assert!(json.get(key).is_some(), "summary must carry {key}");
    }
    assert_eq!(json["total_hours"], 2.5);
    // qty_done was absent: counts as zero.
    assert_eq!(json["total_qty"], 0.0);
}
