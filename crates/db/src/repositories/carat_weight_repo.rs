//! Repository for the `carat_weights` table.

use sqlx::PgPool;

use atelier_core::naming;
use atelier_core::types::DbId;

use crate::models::carat_weight::{CaratWeight, CreateCaratWeight, UpdateCaratWeight};

/// Column list for carat_weights queries.
const COLUMNS: &str = "id, internal_name, display_name, value, created_at, updated_at";

/// Provides CRUD operations for carat weights.
pub struct CaratWeightRepo;

impl CaratWeightRepo {
    /// List all carat weights by ascending value, creation order as the
    /// tiebreak.
    pub async fn list(pool: &PgPool) -> Result<Vec<CaratWeight>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM carat_weights ORDER BY value ASC, id ASC");
        sqlx::query_as::<_, CaratWeight>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a carat weight by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CaratWeight>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM carat_weights WHERE id = $1");
        sqlx::query_as::<_, CaratWeight>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new carat weight, returning the created row. The slug
    /// falls back to the display name when the caller supplies none.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCaratWeight,
    ) -> Result<CaratWeight, sqlx::Error> {
        let internal_name = input
            .internal_name
            .clone()
            .unwrap_or_else(|| naming::slugify(&input.display_name));
        let query = format!(
            "INSERT INTO carat_weights (internal_name, display_name, value)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CaratWeight>(&query)
            .bind(&internal_name)
            .bind(&input.display_name)
            .bind(input.value)
            .fetch_one(pool)
            .await
    }

    /// Update a carat weight by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCaratWeight,
    ) -> Result<Option<CaratWeight>, sqlx::Error> {
        let query = format!(
            "UPDATE carat_weights SET
                internal_name = COALESCE($2, internal_name),
                display_name = COALESCE($3, display_name),
                value = COALESCE($4, value),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CaratWeight>(&query)
            .bind(id)
            .bind(&input.internal_name)
            .bind(&input.display_name)
            .bind(input.value)
            .fetch_optional(pool)
            .await
    }

    /// Delete a carat weight by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM carat_weights WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
