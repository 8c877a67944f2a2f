//! Repository for the `shank_categories` table.

use sqlx::PgPool;

use atelier_core::naming;
use atelier_core::types::DbId;

use crate::models::shank_category::{CreateShankCategory, ShankCategory, UpdateShankCategory};

/// Column list for shank_categories queries.
const COLUMNS: &str =
    "id, internal_name, display_name, sort_order, active, created_at, updated_at";

/// Provides CRUD operations for shank categories.
pub struct ShankCategoryRepo;

impl ShankCategoryRepo {
    /// List all shank categories, ordered by sort order then creation.
    pub async fn list(pool: &PgPool) -> Result<Vec<ShankCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shank_categories ORDER BY sort_order ASC, id ASC");
        sqlx::query_as::<_, ShankCategory>(&query)
            .fetch_all(pool)
            .await
    }

    /// List only active categories, for the customer-facing catalog.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<ShankCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM shank_categories
             WHERE active = TRUE
             ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, ShankCategory>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a shank category by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ShankCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shank_categories WHERE id = $1");
        sqlx::query_as::<_, ShankCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new shank category, returning the created row. The slug
    /// falls back to the display name when the caller supplies none.
    pub async fn create(
        pool: &PgPool,
        input: &CreateShankCategory,
    ) -> Result<ShankCategory, sqlx::Error> {
        let internal_name = input
            .internal_name
            .clone()
            .unwrap_or_else(|| naming::slugify(&input.display_name));
        let query = format!(
            "INSERT INTO shank_categories (internal_name, display_name, sort_order, active)
             VALUES ($1, $2, COALESCE($3, 0), COALESCE($4, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ShankCategory>(&query)
            .bind(&internal_name)
            .bind(&input.display_name)
            .bind(input.sort_order)
            .bind(input.active)
            .fetch_one(pool)
            .await
    }

    /// Update a shank category by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateShankCategory,
    ) -> Result<Option<ShankCategory>, sqlx::Error> {
        let query = format!(
            "UPDATE shank_categories SET
                internal_name = COALESCE($2, internal_name),
                display_name = COALESCE($3, display_name),
                sort_order = COALESCE($4, sort_order),
                active = COALESCE($5, active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ShankCategory>(&query)
            .bind(id)
            .bind(&input.internal_name)
            .bind(&input.display_name)
            .bind(input.sort_order)
            .bind(input.active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a shank category by ID. Returns `true` if a row was deleted.
    /// Shank variants referencing the category's display name are left
    /// untouched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM shank_categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
