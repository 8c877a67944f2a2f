//! Repository for the `head_variants` table and its shank join table.
//!
//! Writes are transactional: the shank set, the canonical set key, the
//! regenerated names, and the single-default invariant all move together
//! or not at all.

use sqlx::{PgConnection, PgPool};

use atelier_core::naming;
use atelier_core::types::DbId;

use crate::models::head_variant::{CreateHeadVariant, HeadVariant, UpdateHeadVariant};

/// Select list for head_variants queries, aggregating the shank set from
/// the join table in operator-supplied position order.
const SELECT: &str = "SELECT h.id, h.internal_name, h.display_name, h.model_file, \
                      h.scale, h.pos_z, h.is_default, h.shank_set_key, \
                      COALESCE((SELECT ARRAY_AGG(hs.shank_variant_id ORDER BY hs.position) \
                                FROM head_variant_shanks hs \
                                WHERE hs.head_variant_id = h.id), ARRAY[]::BIGINT[]) AS shank_ids, \
                      h.diamond_shape_id, h.setting_style_id, h.carat_weight_id, \
                      h.created_at, h.updated_at \
                      FROM head_variants h";

/// Provides CRUD operations for head variants.
pub struct HeadVariantRepo;

impl HeadVariantRepo {
    /// List all head variants in creation order. Creation order is the
    /// catalog iteration order the resolver's first-match rule uses.
    pub async fn list(pool: &PgPool) -> Result<Vec<HeadVariant>, sqlx::Error> {
        let query = format!("{SELECT} ORDER BY h.id ASC");
        sqlx::query_as::<_, HeadVariant>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a head variant by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<HeadVariant>, sqlx::Error> {
        let query = format!("{SELECT} WHERE h.id = $1");
        sqlx::query_as::<_, HeadVariant>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new head variant, returning the created row.
    ///
    /// The caller validates that `shank_ids` is non-empty; here the set is
    /// deduplicated preserving first occurrence, the canonical set key is
    /// computed, and both names are generated from the referenced
    /// components. A duplicate combination surfaces as a unique violation
    /// on `uq_head_variants_combination`.
    pub async fn create(pool: &PgPool, input: &CreateHeadVariant) -> Result<HeadVariant, sqlx::Error> {
        let shank_ids = dedup_preserving(&input.shank_ids);

        let mut tx = pool.begin().await?;

        if input.is_default == Some(true) {
            sqlx::query("UPDATE head_variants SET is_default = FALSE WHERE is_default = TRUE")
                .execute(&mut *tx)
                .await?;
        }

        let parts = fetch_name_parts(
            &mut tx,
            &shank_ids,
            input.diamond_shape_id,
            input.setting_style_id,
            input.carat_weight_id,
        )
        .await?;

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO head_variants (internal_name, display_name, model_file,
                                        scale, pos_z, is_default, shank_set_key,
                                        diamond_shape_id, setting_style_id, carat_weight_id)
             VALUES ($1, $2, $3, COALESCE($4, 0.14), COALESCE($5, 0), COALESCE($6, FALSE),
                     $7, $8, $9, $10)
             RETURNING id",
        )
        .bind(&parts.internal_name)
        .bind(&parts.display_name)
        .bind(&input.model_file)
        .bind(input.scale)
        .bind(input.pos_z)
        .bind(input.is_default)
        .bind(shank_set_key(&shank_ids))
        .bind(input.diamond_shape_id)
        .bind(input.setting_style_id)
        .bind(input.carat_weight_id)
        .fetch_one(&mut *tx)
        .await?;

        replace_shank_set(&mut tx, id, &shank_ids).await?;

        let query = format!("{SELECT} WHERE h.id = $1");
        let row = sqlx::query_as::<_, HeadVariant>(&query)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row)
    }

    /// Update a head variant by ID, returning the updated row.
    ///
    /// Attribute and shank-set changes regenerate both names and the set
    /// key from the merged state, whether or not the caller touched them.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHeadVariant,
    ) -> Result<Option<HeadVariant>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("{SELECT} WHERE h.id = $1");
        let Some(existing) = sqlx::query_as::<_, HeadVariant>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        if input.is_default == Some(true) {
            sqlx::query(
                "UPDATE head_variants SET is_default = FALSE WHERE is_default = TRUE AND id <> $1",
            )
            .bind(id)
            .execute(&mut *tx)
            .await?;
        }

        let shank_ids = match &input.shank_ids {
            Some(ids) => dedup_preserving(ids),
            None => existing.shank_ids.clone(),
        };
        let diamond_shape_id = input.diamond_shape_id.unwrap_or(existing.diamond_shape_id);
        let setting_style_id = input.setting_style_id.unwrap_or(existing.setting_style_id);
        let carat_weight_id = input.carat_weight_id.unwrap_or(existing.carat_weight_id);

        let parts = fetch_name_parts(
            &mut tx,
            &shank_ids,
            diamond_shape_id,
            setting_style_id,
            carat_weight_id,
        )
        .await?;

        if input.shank_ids.is_some() {
            sqlx::query("DELETE FROM head_variant_shanks WHERE head_variant_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            replace_shank_set(&mut tx, id, &shank_ids).await?;
        }

        sqlx::query(
            "UPDATE head_variants SET
                internal_name = $2,
                display_name = $3,
                model_file = COALESCE($4, model_file),
                scale = COALESCE($5, scale),
                pos_z = COALESCE($6, pos_z),
                is_default = COALESCE($7, is_default),
                shank_set_key = $8,
                diamond_shape_id = $9,
                setting_style_id = $10,
                carat_weight_id = $11,
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(&parts.internal_name)
        .bind(&parts.display_name)
        .bind(&input.model_file)
        .bind(input.scale)
        .bind(input.pos_z)
        .bind(input.is_default)
        .bind(shank_set_key(&shank_ids))
        .bind(diamond_shape_id)
        .bind(setting_style_id)
        .bind(carat_weight_id)
        .execute(&mut *tx)
        .await?;

        let row = sqlx::query_as::<_, HeadVariant>(&query)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(row))
    }

    /// Delete a head variant by ID. Returns `true` if a row was deleted.
    /// Join rows cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM head_variants WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Generated names for a head variant, derived from its referenced
/// components.
struct GeneratedNames {
    internal_name: String,
    display_name: String,
}

/// Load the component names backing a head variant's generated names.
/// A missing reference surfaces as `RowNotFound`.
async fn fetch_name_parts(
    conn: &mut PgConnection,
    shank_ids: &[DbId],
    diamond_shape_id: DbId,
    setting_style_id: DbId,
    carat_weight_id: DbId,
) -> Result<GeneratedNames, sqlx::Error> {
    let shank_rows: Vec<(DbId, String, String)> = sqlx::query_as(
        "SELECT id, internal_name, display_name FROM shank_variants WHERE id = ANY($1)",
    )
    .bind(shank_ids)
    .fetch_all(&mut *conn)
    .await?;
    if shank_rows.len() != shank_ids.len() {
        return Err(sqlx::Error::RowNotFound);
    }
    // ANY() returns rows in table order; restore the caller's order.
    let ordered: Vec<&(DbId, String, String)> = shank_ids
        .iter()
        .filter_map(|id| shank_rows.iter().find(|(row_id, _, _)| row_id == id))
        .collect();

    let (shape_internal, shape_display): (String, String) =
        sqlx::query_as("SELECT internal_name, display_name FROM diamond_shapes WHERE id = $1")
            .bind(diamond_shape_id)
            .fetch_one(&mut *conn)
            .await?;
    let (style_internal, style_display): (String, String) =
        sqlx::query_as("SELECT internal_name, display_name FROM setting_styles WHERE id = $1")
            .bind(setting_style_id)
            .fetch_one(&mut *conn)
            .await?;
    let (carat_internal, carat_display): (String, String) =
        sqlx::query_as("SELECT internal_name, display_name FROM carat_weights WHERE id = $1")
            .bind(carat_weight_id)
            .fetch_one(&mut *conn)
            .await?;

    let shank_internals: Vec<&str> = ordered.iter().map(|(_, i, _)| i.as_str()).collect();
    let shank_displays: Vec<&str> = ordered.iter().map(|(_, _, d)| d.as_str()).collect();

    Ok(GeneratedNames {
        internal_name: naming::head_internal_name(
            &shank_internals,
            &style_internal,
            &shape_internal,
            &carat_internal,
        ),
        display_name: naming::head_display_name(
            &shank_displays,
            &style_display,
            &shape_display,
            &carat_display,
        ),
    })
}

/// Insert join rows for a head's shank set, positions matching the
/// caller-supplied order.
async fn replace_shank_set(
    conn: &mut PgConnection,
    head_variant_id: DbId,
    shank_ids: &[DbId],
) -> Result<(), sqlx::Error> {
    for (position, shank_id) in shank_ids.iter().enumerate() {
        sqlx::query(
            "INSERT INTO head_variant_shanks (head_variant_id, shank_variant_id, position)
             VALUES ($1, $2, $3)",
        )
        .bind(head_variant_id)
        .bind(shank_id)
        .bind(position as i32)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}

/// Deduplicate ids preserving first occurrence.
fn dedup_preserving(ids: &[DbId]) -> Vec<DbId> {
    let mut seen = Vec::with_capacity(ids.len());
    for &id in ids {
        if !seen.contains(&id) {
            seen.push(id);
        }
    }
    seen
}

/// Canonical identity of a shank set: sorted, deduplicated ids joined
/// with `_`. Order-independent, so `[3, 1]` and `[1, 3]` collide on the
/// combination uniqueness constraint.
fn shank_set_key(ids: &[DbId]) -> String {
    let mut sorted = ids.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    sorted
        .iter()
        .map(DbId::to_string)
        .collect::<Vec<_>>()
        .join("_")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- shank_set_key --

    #[test]
    fn set_key_is_order_independent() {
        assert_eq!(shank_set_key(&[3, 1]), "1_3");
        assert_eq!(shank_set_key(&[1, 3]), "1_3");
    }

    #[test]
    fn set_key_deduplicates() {
        assert_eq!(shank_set_key(&[5, 5, 2]), "2_5");
    }

    #[test]
    fn set_key_single_and_empty() {
        assert_eq!(shank_set_key(&[7]), "7");
        assert_eq!(shank_set_key(&[]), "");
    }

    // -- dedup_preserving --

    #[test]
    fn dedup_keeps_first_occurrence_order() {
        assert_eq!(dedup_preserving(&[4, 2, 4, 9, 2]), vec![4, 2, 9]);
    }
}
