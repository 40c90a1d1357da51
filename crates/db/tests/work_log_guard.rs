//! Integration tests for the work-log conditional-write guard.
//!
//! The `status = 'pending'` predicate is the system's only concurrency
//! control; these tests pin down its semantics against a real database.

mod common;

use sqlx::PgPool;

use sitelog_db::models::approval::NewApproval;
use sitelog_db::models::work_log::WorkLogUpdate;
use sitelog_db::repositories::{ApprovalRepo, WorkLogRepo};

#[sqlx::test(migrations = "./migrations")]
async fn test_update_pending_applies_while_pending(pool: PgPool) {
    let company = common::company(&pool, "Acme Civil").await;
    let author = common::profile(&pool, "member", Some(company.id)).await;
    let project = common::project(&pool, company.id, "Bypass").await;
    let task = common::task(&pool, project.id, Some(author.id)).await;
    let log = common::pending_log(&pool, task.id, project.id, author.id, Some(8.0)).await;

    let updated = WorkLogRepo::update_pending(
        &pool,
        log.id,
        &WorkLogUpdate {
            hours: Some(6.5),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .expect("pending log should accept the update");

    assert_eq!(updated.hours, Some(6.5));
    // Untouched fields keep their values.
    assert_eq!(updated.qty_done, Some(5.0));
    assert_eq!(updated.status, "pending");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_finalize_pending_wins_exactly_once(pool: PgPool) {
    let company = common::company(&pool, "Acme Civil").await;
    let author = common::profile(&pool, "member", Some(company.id)).await;
    let project = common::project(&pool, company.id, "Bypass").await;
    let task = common::task(&pool, project.id, Some(author.id)).await;
    let log = common::pending_log(&pool, task.id, project.id, author.id, Some(8.0)).await;

    let first = WorkLogRepo::finalize_pending(&pool, log.id, "approved")
        .await
        .unwrap();
    assert!(first.is_some(), "first finalization must match the row");
    assert_eq!(first.unwrap().status, "approved");

    // The losing side of the race: same statement, zero rows matched.
    let second = WorkLogRepo::finalize_pending(&pool, log.id, "rejected")
        .await
        .unwrap();
    assert!(second.is_none(), "second finalization must match nothing");

    let row = WorkLogRepo::find_by_id(&pool, log.id).await.unwrap().unwrap();
    assert_eq!(row.status, "approved", "loser must not overwrite the winner");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_finalized_log_rejects_update_and_delete(pool: PgPool) {
    let company = common::company(&pool, "Acme Civil").await;
    let author = common::profile(&pool, "member", Some(company.id)).await;
    let project = common::project(&pool, company.id, "Bypass").await;
    let task = common::task(&pool, project.id, Some(author.id)).await;
    let log = common::pending_log(&pool, task.id, project.id, author.id, Some(8.0)).await;

    WorkLogRepo::finalize_pending(&pool, log.id, "rejected")
        .await
        .unwrap()
        .expect("finalization should succeed");

    let update = WorkLogRepo::update_pending(
        &pool,
        log.id,
        &WorkLogUpdate {
            hours: Some(1.0),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(update.is_none());

    let deleted = WorkLogRepo::delete_pending(&pool, log.id).await.unwrap();
    assert!(!deleted);

    // The row itself is untouched.
    let row = WorkLogRepo::find_by_id(&pool, log.id).await.unwrap().unwrap();
    assert_eq!(row.hours, Some(8.0));
    assert_eq!(row.status, "rejected");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_missing_log_is_indistinguishable_from_finalized(pool: PgPool) {
    let ghost = uuid::Uuid::new_v4();
    let update = WorkLogRepo::update_pending(&pool, ghost, &WorkLogUpdate::default())
        .await
        .unwrap();
    assert!(update.is_none());
    assert!(!WorkLogRepo::delete_pending(&pool, ghost).await.unwrap());
    assert!(WorkLogRepo::finalize_pending(&pool, ghost, "approved")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_approval_row_unique_per_work_log(pool: PgPool) {
    let company = common::company(&pool, "Acme Civil").await;
    let author = common::profile(&pool, "member", Some(company.id)).await;
    let manager = common::profile(&pool, "manager", Some(company.id)).await;
    let project = common::project(&pool, company.id, "Bypass").await;
    let task = common::task(&pool, project.id, Some(author.id)).await;
    let log = common::pending_log(&pool, task.id, project.id, author.id, Some(8.0)).await;

    WorkLogRepo::finalize_pending(&pool, log.id, "approved")
        .await
        .unwrap()
        .expect("finalization should succeed");

    let approval = ApprovalRepo::create(
        &pool,
        &NewApproval {
            work_log_id: log.id,
            approved_by: manager.id,
            status: "approved".to_string(),
            note: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(approval.work_log_id, log.id);

    // A second audit row violates uq_approvals_work_log_id.
    let duplicate = ApprovalRepo::create(
        &pool,
        &NewApproval {
            work_log_id: log.id,
            approved_by: manager.id,
            status: "rejected".to_string(),
            note: Some("duplicate".to_string()),
        },
    )
    .await;
    assert!(duplicate.is_err());

    let found = ApprovalRepo::find_by_work_log(&pool, log.id)
        .await
        .unwrap()
        .expect("approval should be readable");
    assert_eq!(found.status, "approved");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_no_approval_before_finalization(pool: PgPool) {
    let company = common::company(&pool, "Acme Civil").await;
    let author = common::profile(&pool, "member", Some(company.id)).await;
    let project = common::project(&pool, company.id, "Bypass").await;
    let task = common::task(&pool, project.id, Some(author.id)).await;
    let log = common::pending_log(&pool, task.id, project.id, author.id, None).await;

    let approval = ApprovalRepo::find_by_work_log(&pool, log.id).await.unwrap();
    assert!(approval.is_none());
}
