//! Repository for the `ring_pricing` singleton.

use sqlx::PgPool;

use crate::models::pricing::{ModifierKind, RingPricing, UpdateRingPricing};

/// Column list for ring_pricing queries.
const COLUMNS: &str = "id, base_price, min_price, max_price, \
                       shank_modifiers, carat_modifiers, \
                       matching_band_modifiers, metal_color_modifiers, \
                       created_at, updated_at";

/// Provides access to the singleton pricing record.
pub struct PricingRepo;

impl PricingRepo {
    /// Fetch the pricing row, creating it with defaults on first access.
    pub async fn get_or_create(pool: &PgPool) -> Result<RingPricing, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ring_pricing LIMIT 1");
        if let Some(row) = sqlx::query_as::<_, RingPricing>(&query)
            .fetch_optional(pool)
            .await?
        {
            return Ok(row);
        }

        // Concurrent first reads race to insert; ON CONFLICT makes the
        // loser adopt the winner's row.
        let insert = format!(
            "INSERT INTO ring_pricing (singleton) VALUES (TRUE)
             ON CONFLICT ON CONSTRAINT uq_ring_pricing_singleton
             DO UPDATE SET singleton = TRUE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RingPricing>(&insert)
            .fetch_one(pool)
            .await
    }

    /// Update the pricing record, returning the updated row. Absent
    /// fields keep their current values; a supplied modifier map replaces
    /// the stored one wholesale.
    pub async fn update(pool: &PgPool, input: &UpdateRingPricing) -> Result<RingPricing, sqlx::Error> {
        Self::get_or_create(pool).await?;
        let query = format!(
            "UPDATE ring_pricing SET
                base_price = COALESCE($1, base_price),
                min_price = COALESCE($2, min_price),
                max_price = COALESCE($3, max_price),
                shank_modifiers = COALESCE($4, shank_modifiers),
                carat_modifiers = COALESCE($5, carat_modifiers),
                matching_band_modifiers = COALESCE($6, matching_band_modifiers),
                metal_color_modifiers = COALESCE($7, metal_color_modifiers),
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RingPricing>(&query)
            .bind(input.base_price)
            .bind(input.min_price)
            .bind(input.max_price)
            .bind(&input.shank_modifiers)
            .bind(&input.carat_modifiers)
            .bind(&input.matching_band_modifiers)
            .bind(&input.metal_color_modifiers)
            .fetch_one(pool)
            .await
    }

    /// Set one modifier entry in the map selected by `kind`, returning
    /// the updated row. Overwrites an existing entry for the key.
    pub async fn set_modifier(
        pool: &PgPool,
        kind: ModifierKind,
        key: &str,
        value: f64,
    ) -> Result<RingPricing, sqlx::Error> {
        Self::get_or_create(pool).await?;
        let column = kind.column();
        let query = format!(
            "UPDATE ring_pricing SET
                {column} = {column} || jsonb_build_object($1::text, $2::double precision),
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RingPricing>(&query)
            .bind(key)
            .bind(value)
            .fetch_one(pool)
            .await
    }

    /// Remove one modifier entry, returning the updated row. Removing an
    /// absent key is a no-op.
    pub async fn remove_modifier(
        pool: &PgPool,
        kind: ModifierKind,
        key: &str,
    ) -> Result<RingPricing, sqlx::Error> {
        Self::get_or_create(pool).await?;
        let column = kind.column();
        let query = format!(
            "UPDATE ring_pricing SET
                {column} = {column} - $1::text,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RingPricing>(&query)
            .bind(key)
            .fetch_one(pool)
            .await
    }
}
