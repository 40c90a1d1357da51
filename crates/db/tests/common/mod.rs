//! Shared fixtures for repository integration tests.

#![allow(dead_code)]

use sqlx::PgPool;
use uuid::Uuid;

use sitelog_db::models::project::NewProject;
use sitelog_db::models::task::NewTask;
use sitelog_db::models::work_log::NewWorkLog;
use sitelog_db::models::{company::Company, profile::Profile, project::Project, task::Task};
use sitelog_db::repositories::{CompanyRepo, ProfileRepo, ProjectRepo, TaskRepo, WorkLogRepo};

pub async fn company(pool: &PgPool, name: &str) -> Company {
    CompanyRepo::create(pool, name)
        .await
        .expect("company creation should succeed")
}

pub async fn profile(pool: &PgPool, role: &str, company_id: Option<Uuid>) -> Profile {
    ProfileRepo::create(pool, Uuid::new_v4(), Some("Test Crew"), role, company_id)
        .await
        .expect("profile creation should succeed")
}

pub async fn project(pool: &PgPool, company_id: Uuid, name: &str) -> Project {
    ProjectRepo::create(
        pool,
        &NewProject {
            company_id,
            name: name.to_string(),
            status: "active".to_string(),
            start_date: None,
            end_date: None,
        },
    )
    .await
    .expect("project creation should succeed")
}

pub async fn task(pool: &PgPool, project_id: Uuid, assigned_to: Option<Uuid>) -> Task {
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

pub async fn pending_log(
    pool: &PgPool,
    task_id: Uuid,
    project_id: Uuid,
    user_id: Uuid,
    hours: Option<f64>,
) -> sitelog_db::models::work_log::WorkLog {
    WorkLogRepo::create(
        pool,
        &NewWorkLog {
            task_id,
            project_id,
            user_id,
            log_date: chrono::NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            qty_done: Some(5.0),
            hours,
            note: None,
        },
    )
    .await
    .expect("work log creation should succeed")
}
