//! Repository for the `tasks` table.

use sqlx::PgPool;

use sitelog_core::types::EntityId;

use crate::models::task::{NewTask, Task, TaskUpdate};

/// Column list for tasks queries.
const COLUMNS: &str = "id, project_id, title, unit, planned_qty, planned_hours, \
    start_date, end_date, status, approval_status, assigned_to, created_at";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks
                (project_id, title, unit, planned_qty, planned_hours,
                 start_date, end_date, status, approval_status, assigned_to)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(&input.unit)
            .bind(input.planned_qty)
            .bind(input.planned_hours)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.status)
            .bind(&input.approval_status)
            .bind(input.assigned_to)
            .fetch_one(pool)
            .await
    }

    /// Find a task by its ID.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tasks under a project, oldest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: EntityId,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks WHERE project_id = $1 ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update. `None` fields are left untouched. Returns
    /// `None` if the id matches no row.
    pub async fn update(
        pool: &PgPool,
        id: EntityId,
        input: &TaskUpdate,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks
             SET title = COALESCE($2, title),
                 unit = COALESCE($3, unit),
                 planned_qty = COALESCE($4, planned_qty),
                 planned_hours = COALESCE($5, planned_hours),
                 start_date = COALESCE($6, start_date),
                 end_date = COALESCE($7, end_date),
                 status = COALESCE($8, status),
                 approval_status = COALESCE($9, approval_status),
                 assigned_to = COALESCE($10, assigned_to)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.unit)
            .bind(input.planned_qty)
            .bind(input.planned_hours)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.status)
            .bind(&input.approval_status)
            .bind(input.assigned_to)
            .fetch_optional(pool)
            .await
    }

    /// Set the governance status unconditionally.
    ///
    /// Used by submit and approve. Deliberately carries no predicate on
    /// the prior status: concurrent calls are last-writer-wins. Returns
    /// `None` if the id matches no row.
    pub async fn set_approval_status(
        pool: &PgPool,
        id: EntityId,
        approval_status: &str,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET approval_status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(approval_status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a task. Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
