//! Repository for the `shank_variants` table.

use sqlx::PgPool;

use atelier_core::naming;
use atelier_core::types::DbId;

use crate::models::shank_variant::{CreateShankVariant, ShankVariant, UpdateShankVariant};

/// Column list for shank_variants queries.
const COLUMNS: &str = "id, internal_name, display_name, model_file, \
                       matching_band_file1, matching_band_file2, image_url, \
                       category_name, scale, pos_z, is_default, created_at, updated_at";

/// Provides CRUD operations for shank variants.
pub struct ShankVariantRepo;

impl ShankVariantRepo {
    /// List all shank variants in creation order. Creation order doubles
    /// as the default-shank fallback order for the configurator.
    pub async fn list(pool: &PgPool) -> Result<Vec<ShankVariant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shank_variants ORDER BY id ASC");
        sqlx::query_as::<_, ShankVariant>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a shank variant by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ShankVariant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shank_variants WHERE id = $1");
        sqlx::query_as::<_, ShankVariant>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new shank variant, returning the created row. The slug
    /// falls back to the display name when the caller supplies none.
    ///
    /// When `is_default` is set, the previous default is cleared in the
    /// same transaction so at most one default survives.
    pub async fn create(pool: &PgPool, input: &CreateShankVariant) -> Result<ShankVariant, sqlx::Error> {
        let internal_name = input
            .internal_name
            .clone()
            .unwrap_or_else(|| naming::slugify(&input.display_name));
        let mut tx = pool.begin().await?;

        if input.is_default == Some(true) {
            sqlx::query("UPDATE shank_variants SET is_default = FALSE WHERE is_default = TRUE")
                .execute(&mut *tx)
                .await?;
        }

        let query = format!(
            "INSERT INTO shank_variants (internal_name, display_name, model_file,
                                         matching_band_file1, matching_band_file2, image_url,
                                         category_name, scale, pos_z, is_default)
             VALUES ($1, $2, $3, $4, $5, $6,
                     COALESCE($7, 'Most Popular'), COALESCE($8, 0.14),
                     COALESCE($9, 0), COALESCE($10, FALSE))
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ShankVariant>(&query)
            .bind(&internal_name)
            .bind(&input.display_name)
            .bind(&input.model_file)
            .bind(&input.matching_band_file1)
            .bind(&input.matching_band_file2)
            .bind(&input.image_url)
            .bind(&input.category_name)
            .bind(input.scale)
            .bind(input.pos_z)
            .bind(input.is_default)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row)
    }

    /// Update a shank variant by ID, returning the updated row.
    ///
    /// Absent fields keep their current values, except `category_name`:
    /// the admin form always submits it, so an absent value means
    /// "uncategorized" and resets to the 'Most Popular' default.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateShankVariant,
    ) -> Result<Option<ShankVariant>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if input.is_default == Some(true) {
            sqlx::query("UPDATE shank_variants SET is_default = FALSE WHERE is_default = TRUE AND id <> $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
        }

        let query = format!(
            "UPDATE shank_variants SET
                internal_name = COALESCE($2, internal_name),
                display_name = COALESCE($3, display_name),
                model_file = COALESCE($4, model_file),
                matching_band_file1 = COALESCE($5, matching_band_file1),
                matching_band_file2 = COALESCE($6, matching_band_file2),
                image_url = COALESCE($7, image_url),
                category_name = COALESCE($8, 'Most Popular'),
                scale = COALESCE($9, scale),
                pos_z = COALESCE($10, pos_z),
                is_default = COALESCE($11, is_default),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ShankVariant>(&query)
            .bind(id)
            .bind(&input.internal_name)
            .bind(&input.display_name)
            .bind(&input.model_file)
            .bind(&input.matching_band_file1)
            .bind(&input.matching_band_file2)
            .bind(&input.image_url)
            .bind(&input.category_name)
            .bind(input.scale)
            .bind(input.pos_z)
            .bind(input.is_default)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row)
    }

    /// Delete a shank variant by ID. Returns `true` if a row was deleted.
    /// Head variants referencing the shank lose it from their set; in-
    /// flight customer selections holding the id repair on their next
    /// transition.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM shank_variants WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
