//! Repository for the `approvals` table.
//!
//! Insert and read only: approval rows are immutable audit records, so
//! there is no update or delete here at all.

use sqlx::PgPool;

use sitelog_core::types::EntityId;

use crate::models::approval::{Approval, NewApproval};

/// Column list for approvals queries.
const COLUMNS: &str = "id, work_log_id, approved_by, status, note, approved_at, created_at";

/// Provides insert-once/read operations for approval audit rows.
pub struct ApprovalRepo;

impl ApprovalRepo {
    /// Insert the audit row for a finalized work log.
    ///
    /// Callers must have won the conditional finalization first; the
    /// unique constraint on `work_log_id` turns any double insert into a
    /// constraint violation rather than a second audit row.
    pub async fn create(pool: &PgPool, input: &NewApproval) -> Result<Approval, sqlx::Error> {
        let query = format!(
            "INSERT INTO approvals (work_log_id, approved_by, status, note)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Approval>(&query)
            .bind(input.work_log_id)
            .bind(input.approved_by)
            .bind(&input.status)
            .bind(&input.note)
            .fetch_one(pool)
            .await
    }

    /// Find the approval for a work log, if it has been finalized yet.
    pub async fn find_by_work_log(
        pool: &PgPool,
        work_log_id: EntityId,
    ) -> Result<Option<Approval>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM approvals WHERE work_log_id = $1");
        sqlx::query_as::<_, Approval>(&query)
            .bind(work_log_id)
            .fetch_optional(pool)
            .await
    }
}
