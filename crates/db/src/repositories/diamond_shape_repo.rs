//! Repository for the `diamond_shapes` table.

use sqlx::PgPool;

use atelier_core::naming;
use atelier_core::types::DbId;

use crate::models::diamond_shape::{CreateDiamondShape, DiamondShape, UpdateDiamondShape};

/// Column list for diamond_shapes queries.
const COLUMNS: &str = "id, internal_name, display_name, image_url, created_at, updated_at";

/// Provides CRUD operations for diamond shapes.
pub struct DiamondShapeRepo;

impl DiamondShapeRepo {
    /// List all diamond shapes in creation order. Creation order is
    /// significant: it is the catalog iteration order the configurator's
    /// first-match rules depend on.
    pub async fn list(pool: &PgPool) -> Result<Vec<DiamondShape>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM diamond_shapes ORDER BY id ASC");
        sqlx::query_as::<_, DiamondShape>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a diamond shape by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<DiamondShape>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM diamond_shapes WHERE id = $1");
        sqlx::query_as::<_, DiamondShape>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new diamond shape, returning the created row. The slug
    /// falls back to the display name when the caller supplies none.
    pub async fn create(
        pool: &PgPool,
        input: &CreateDiamondShape,
    ) -> Result<DiamondShape, sqlx::Error> {
        let internal_name = input
            .internal_name
            .clone()
            .unwrap_or_else(|| naming::slugify(&input.display_name));
        let query = format!(
            "INSERT INTO diamond_shapes (internal_name, display_name, image_url)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DiamondShape>(&query)
            .bind(&internal_name)
            .bind(&input.display_name)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Update a diamond shape by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDiamondShape,
    ) -> Result<Option<DiamondShape>, sqlx::Error> {
        let query = format!(
            "UPDATE diamond_shapes SET
                internal_name = COALESCE($2, internal_name),
                display_name = COALESCE($3, display_name),
                image_url = COALESCE($4, image_url),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DiamondShape>(&query)
            .bind(id)
            .bind(&input.internal_name)
            .bind(&input.display_name)
            .bind(&input.image_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a diamond shape by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM diamond_shapes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
