//! Catalog snapshot loading.

use sqlx::PgPool;

use atelier_core::catalog::CatalogSnapshot;

use crate::repositories::{
    CaratWeightRepo, DiamondShapeRepo, HeadVariantRepo, MetalColorRepo, PricingRepo,
    SettingStyleRepo, ShankCategoryRepo, ShankVariantRepo,
};

/// Assembles the immutable snapshot a configurator session operates on.
pub struct CatalogRepo;

impl CatalogRepo {
    /// Load the whole catalog in creation order (carat weights by
    /// ascending value), inactive metal colors and categories filtered
    /// out. Fetched once per configurator session; admin edits
    /// mid-session stay invisible until the client reloads.
    pub async fn load_snapshot(pool: &PgPool) -> Result<CatalogSnapshot, sqlx::Error> {
        let head_variants = HeadVariantRepo::list(pool).await?;
        let shank_variants = ShankVariantRepo::list(pool).await?;
        let diamond_shapes = DiamondShapeRepo::list(pool).await?;
        let setting_styles = SettingStyleRepo::list(pool).await?;
        let carat_weights = CaratWeightRepo::list(pool).await?;
        let shank_categories = ShankCategoryRepo::list_active(pool).await?;
        let metal_colors = MetalColorRepo::list_active(pool).await?;
        let pricing = PricingRepo::get_or_create(pool).await?;

        Ok(CatalogSnapshot {
            head_variants: head_variants
                .into_iter()
                .map(|row| row.into_catalog())
                .collect(),
            shank_variants: shank_variants
                .into_iter()
                .map(|row| row.into_catalog())
                .collect(),
            diamond_shapes: diamond_shapes
                .into_iter()
                .map(|row| row.into_catalog())
                .collect(),
            setting_styles: setting_styles
                .into_iter()
                .map(|row| row.into_catalog())
                .collect(),
            carat_weights: carat_weights
                .into_iter()
                .map(|row| row.into_catalog())
                .collect(),
            shank_categories: shank_categories
                .into_iter()
                .map(|row| row.into_catalog())
                .collect(),
            metal_colors: metal_colors
                .into_iter()
                .map(|row| row.into_catalog())
                .collect(),
            pricing: pricing.into_catalog(),
        })
    }
}
