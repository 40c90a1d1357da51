//! Repository for the `project_members` table.

use sqlx::PgPool;

use sitelog_core::types::EntityId;

use crate::models::project_member::ProjectMember;

/// Column list for project_members queries.
const COLUMNS: &str = "project_id, user_id, member_role, created_at";

/// Provides membership operations for projects.
pub struct ProjectMemberRepo;

impl ProjectMemberRepo {
    /// List all members of a project.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: EntityId,
    ) -> Result<Vec<ProjectMember>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_members WHERE project_id = $1 ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, ProjectMember>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Add an actor to a project with a project-scoped role label.
    pub async fn add(
        pool: &PgPool,
        project_id: EntityId,
        user_id: EntityId,
        member_role: &str,
    ) -> Result<ProjectMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_members (project_id, user_id, member_role)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectMember>(&query)
            .bind(project_id)
            .bind(user_id)
            .bind(member_role)
            .fetch_one(pool)
            .await
    }

    /// Change a member's role label. Returns `None` if the pair matches
    /// no row.
    pub async fn update_role(
        pool: &PgPool,
        project_id: EntityId,
        user_id: EntityId,
        member_role: &str,
    ) -> Result<Option<ProjectMember>, sqlx::Error> {
        let query = format!(
            "UPDATE project_members SET member_role = $3
             WHERE project_id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectMember>(&query)
            .bind(project_id)
            .bind(user_id)
            .bind(member_role)
            .fetch_optional(pool)
            .await
    }

    /// Remove a member from a project. Returns whether a row was removed.
    pub async fn remove(
        pool: &PgPool,
        project_id: EntityId,
        user_id: EntityId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM project_members WHERE project_id = $1 AND user_id = $2")
                .bind(project_id)
                .bind(user_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
