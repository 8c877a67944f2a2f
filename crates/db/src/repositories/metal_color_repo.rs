//! Repository for the `metal_colors` table.

use sqlx::PgPool;

use atelier_core::naming;
use atelier_core::types::DbId;

use crate::models::metal_color::{CreateMetalColor, MetalColor, UpdateMetalColor};

/// Column list for metal_colors queries.
const COLUMNS: &str = "id, internal_name, display_name, hex_color, active, created_at, updated_at";

/// Provides CRUD operations for metal colors.
pub struct MetalColorRepo;

impl MetalColorRepo {
    /// List all metal colors in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<MetalColor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM metal_colors ORDER BY id ASC");
        sqlx::query_as::<_, MetalColor>(&query)
            .fetch_all(pool)
            .await
    }

    /// List only active colors, for the customer-facing catalog.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<MetalColor>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM metal_colors WHERE active = TRUE ORDER BY id ASC");
        sqlx::query_as::<_, MetalColor>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a metal color by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MetalColor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM metal_colors WHERE id = $1");
        sqlx::query_as::<_, MetalColor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new metal color, returning the created row. The slug
    /// falls back to the display name when the caller supplies none.
    pub async fn create(pool: &PgPool, input: &CreateMetalColor) -> Result<MetalColor, sqlx::Error> {
        let internal_name = input
            .internal_name
            .clone()
            .unwrap_or_else(|| naming::slugify(&input.display_name));
        let query = format!(
            "INSERT INTO metal_colors (internal_name, display_name, hex_color, active)
             VALUES ($1, $2, $3, COALESCE($4, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MetalColor>(&query)
            .bind(&internal_name)
            .bind(&input.display_name)
            .bind(&input.hex_color)
            .bind(input.active)
            .fetch_one(pool)
            .await
    }

    /// Update a metal color by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMetalColor,
    ) -> Result<Option<MetalColor>, sqlx::Error> {
        let query = format!(
            "UPDATE metal_colors SET
                internal_name = COALESCE($2, internal_name),
                display_name = COALESCE($3, display_name),
                hex_color = COALESCE($4, hex_color),
                active = COALESCE($5, active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MetalColor>(&query)
            .bind(id)
            .bind(&input.internal_name)
            .bind(&input.display_name)
            .bind(&input.hex_color)
            .bind(input.active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a metal color by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM metal_colors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
