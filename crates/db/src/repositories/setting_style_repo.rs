//! Repository for the `setting_styles` table.

use sqlx::PgPool;

use atelier_core::naming;
use atelier_core::types::DbId;

use crate::models::setting_style::{CreateSettingStyle, SettingStyle, UpdateSettingStyle};

/// Column list for setting_styles queries.
const COLUMNS: &str =
    "id, internal_name, display_name, image_url, per_shape_images, created_at, updated_at";

/// Provides CRUD operations for setting styles.
pub struct SettingStyleRepo;

impl SettingStyleRepo {
    /// List all setting styles in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<SettingStyle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM setting_styles ORDER BY id ASC");
        sqlx::query_as::<_, SettingStyle>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a setting style by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SettingStyle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM setting_styles WHERE id = $1");
        sqlx::query_as::<_, SettingStyle>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new setting style, returning the created row. The slug
    /// falls back to the display name when the caller supplies none.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSettingStyle,
    ) -> Result<SettingStyle, sqlx::Error> {
        let internal_name = input
            .internal_name
            .clone()
            .unwrap_or_else(|| naming::slugify(&input.display_name));
        let query = format!(
            "INSERT INTO setting_styles (internal_name, display_name, image_url, per_shape_images)
             VALUES ($1, $2, $3, COALESCE($4, '{{}}'::jsonb))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SettingStyle>(&query)
            .bind(&internal_name)
            .bind(&input.display_name)
            .bind(&input.image_url)
            .bind(&input.per_shape_images)
            .fetch_one(pool)
            .await
    }

    /// Update a setting style by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSettingStyle,
    ) -> Result<Option<SettingStyle>, sqlx::Error> {
        let query = format!(
            "UPDATE setting_styles SET
                internal_name = COALESCE($2, internal_name),
                display_name = COALESCE($3, display_name),
                image_url = COALESCE($4, image_url),
                per_shape_images = COALESCE($5, per_shape_images),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SettingStyle>(&query)
            .bind(id)
            .bind(&input.internal_name)
            .bind(&input.display_name)
            .bind(&input.image_url)
            .bind(&input.per_shape_images)
            .fetch_optional(pool)
            .await
    }

    /// Delete a setting style by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM setting_styles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
