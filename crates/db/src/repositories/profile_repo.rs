//! Repository for the `profiles` table.

use sqlx::PgPool;

use sitelog_core::types::EntityId;

use crate::models::profile::Profile;

/// Column list for profiles queries.
const COLUMNS: &str = "id, full_name, phone, role, company_id, created_at";

/// Provides read and self-service update operations for actor profiles.
///
/// Profile rows are provisioned by the identity service; this
/// repository never creates or deletes them, except for test fixtures.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Find a profile by actor ID.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every profile affiliated with a company, ordered by name.
    pub async fn list_by_company(
        pool: &PgPool,
        company_id: EntityId,
    ) -> Result<Vec<Profile>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM profiles WHERE company_id = $1 ORDER BY full_name ASC NULLS LAST"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(company_id)
            .fetch_all(pool)
            .await
    }

    /// Update the contact fields of a profile. `None` fields are left
    /// untouched. Returns `None` if the id matches no row.
    pub async fn update_contact(
        pool: &PgPool,
        id: EntityId,
        full_name: Option<&str>,
        phone: Option<&str>,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles
             SET full_name = COALESCE($2, full_name),
                 phone = COALESCE($3, phone)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .bind(full_name)
            .bind(phone)
            .fetch_optional(pool)
            .await
    }

    /// Insert a profile row. Used by test fixtures and ops tooling; in
    /// production the identity service provisions profiles.
    pub async fn create(
        pool: &PgPool,
        id: EntityId,
        full_name: Option<&str>,
        role: &str,
        company_id: Option<EntityId>,
    ) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (id, full_name, role, company_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .bind(full_name)
            .bind(role)
            .bind(company_id)
            .fetch_one(pool)
            .await
    }
}
