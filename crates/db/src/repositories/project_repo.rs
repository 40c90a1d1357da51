//! Repository for the `projects` table.

use sqlx::PgPool;

use sitelog_core::types::EntityId;

use crate::models::project::{NewProject, Project, ProjectUpdate};

/// Column list for projects queries.
const COLUMNS: &str = "id, company_id, name, status, start_date, end_date, created_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (company_id, name, status, start_date, end_date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(input.company_id)
            .bind(&input.name)
            .bind(&input.status)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects belonging to a company, newest first.
    pub async fn list_by_company(
        pool: &PgPool,
        company_id: EntityId,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE company_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(company_id)
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update. `None` fields are left untouched. Returns
    /// `None` if the id matches no row.
    pub async fn update(
        pool: &PgPool,
        id: EntityId,
        input: &ProjectUpdate,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects
             SET name = COALESCE($2, name),
                 status = COALESCE($3, status),
                 start_date = COALESCE($4, start_date),
                 end_date = COALESCE($5, end_date)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.status)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project. Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
