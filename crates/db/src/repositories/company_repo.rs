//! Repository for the `companies` table.

use sqlx::PgPool;

use sitelog_core::types::EntityId;

use crate::models::company::Company;

/// Column list for companies queries.
const COLUMNS: &str = "id, name, created_at";

/// Provides CRUD operations for companies.
pub struct CompanyRepo;

impl CompanyRepo {
    /// Insert a new company, returning the created row.
    pub async fn create(pool: &PgPool, name: &str) -> Result<Company, sqlx::Error> {
        let query = format!("INSERT INTO companies (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Company>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Find a company by its ID.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies WHERE id = $1");
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Rename a company. Returns `None` if the id matches no row.
    pub async fn rename(
        pool: &PgPool,
        id: EntityId,
        name: &str,
    ) -> Result<Option<Company>, sqlx::Error> {
        let query =
            format!("UPDATE companies SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }
}
