//! Repository for the `work_logs` table.
//!
//! Mutations on existing logs are conditional: every UPDATE/DELETE
//! carries a `status = 'pending'` predicate in the same statement as the
//! mutation itself, so the guard+mutate pair is atomic at the row store.
//! Zero matched rows comes back as `None`/`false` — a first-class
//! outcome, not an error. The caller maps it to Conflict: either the log
//! never existed or another actor already finalized it, and the two are
//! indistinguishable here by design.

use sqlx::PgPool;

use sitelog_core::types::EntityId;

use crate::models::work_log::{NewWorkLog, WorkLog, WorkLogUpdate};

/// Column list for work_logs queries.
const COLUMNS: &str =
    "id, task_id, project_id, user_id, log_date, qty_done, hours, note, status, created_at";

/// Provides CRUD and conditional-finalization operations for work logs.
pub struct WorkLogRepo;

impl WorkLogRepo {
    /// Insert a new work log with status `pending`, returning the row.
    pub async fn create(pool: &PgPool, input: &NewWorkLog) -> Result<WorkLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO work_logs
                (task_id, project_id, user_id, log_date, qty_done, hours, note, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, 'pending')
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkLog>(&query)
            .bind(input.task_id)
            .bind(input.project_id)
            .bind(input.user_id)
            .bind(input.log_date)
            .bind(input.qty_done)
            .bind(input.hours)
            .bind(&input.note)
            .fetch_one(pool)
            .await
    }

    /// Find a work log by its ID.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<WorkLog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM work_logs WHERE id = $1");
        sqlx::query_as::<_, WorkLog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all work logs under a task, oldest log date first.
    pub async fn list_by_task(
        pool: &PgPool,
        task_id: EntityId,
    ) -> Result<Vec<WorkLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM work_logs WHERE task_id = $1 ORDER BY log_date ASC"
        );
        sqlx::query_as::<_, WorkLog>(&query)
            .bind(task_id)
            .fetch_all(pool)
            .await
    }

    /// List all work logs under a project, oldest log date first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: EntityId,
    ) -> Result<Vec<WorkLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM work_logs WHERE project_id = $1 ORDER BY log_date ASC"
        );
        sqlx::query_as::<_, WorkLog>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// List all work logs authored by an actor, oldest log date first.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: EntityId,
    ) -> Result<Vec<WorkLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM work_logs WHERE user_id = $1 ORDER BY log_date ASC"
        );
        sqlx::query_as::<_, WorkLog>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List all work logs for a company's projects, oldest log date first.
    pub async fn list_by_company(
        pool: &PgPool,
        company_id: EntityId,
    ) -> Result<Vec<WorkLog>, sqlx::Error> {
        let query = format!(
            "SELECT w.id, w.task_id, w.project_id, w.user_id, w.log_date, w.qty_done,
                    w.hours, w.note, w.status, w.created_at
             FROM work_logs w
             JOIN projects p ON p.id = w.project_id
             WHERE p.company_id = $1
             ORDER BY w.log_date ASC"
        );
        sqlx::query_as::<_, WorkLog>(&query)
            .bind(company_id)
            .fetch_all(pool)
            .await
    }

    /// List all pending work logs for a company's projects — the review
    /// queue, oldest first.
    pub async fn list_pending_by_company(
        pool: &PgPool,
        company_id: EntityId,
    ) -> Result<Vec<WorkLog>, sqlx::Error> {
        let query = format!(
            "SELECT w.id, w.task_id, w.project_id, w.user_id, w.log_date, w.qty_done,
                    w.hours, w.note, w.status, w.created_at
             FROM work_logs w
             JOIN projects p ON p.id = w.project_id
             WHERE p.company_id = $1 AND w.status = 'pending'
             ORDER BY w.log_date ASC"
        );
        sqlx::query_as::<_, WorkLog>(&query)
            .bind(company_id)
            .fetch_all(pool)
            .await
    }

    /// Conditional update: applies the patch only while the log is still
    /// `pending` at write time. `None` means zero rows matched the
    /// `(id, status = 'pending')` predicate.
    pub async fn update_pending(
        pool: &PgPool,
        id: EntityId,
        input: &WorkLogUpdate,
    ) -> Result<Option<WorkLog>, sqlx::Error> {
        let query = format!(
            "UPDATE work_logs
             SET qty_done = COALESCE($2, qty_done),
                 hours = COALESCE($3, hours),
                 note = COALESCE($4, note)
             WHERE id = $1 AND status = 'pending'
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkLog>(&query)
            .bind(id)
            .bind(input.qty_done)
            .bind(input.hours)
            .bind(&input.note)
            .fetch_optional(pool)
            .await
    }

    /// Conditional delete: removes the log only while it is still
    /// `pending`. Returns whether a row was removed.
    pub async fn delete_pending(pool: &PgPool, id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM work_logs WHERE id = $1 AND status = 'pending'")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Conditional finalization: moves the log out of `pending` into
    /// `approved` or `rejected`.
    ///
    /// This single statement is the serialization point for the one-shot
    /// review lifecycle: of any number of concurrent callers, exactly
    /// one observes `Some(row)` and may go on to write the audit record.
    pub async fn finalize_pending(
        pool: &PgPool,
        id: EntityId,
        status: &str,
    ) -> Result<Option<WorkLog>, sqlx::Error> {
        let query = format!(
            "UPDATE work_logs SET status = $2
             WHERE id = $1 AND status = 'pending'
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkLog>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }
}
