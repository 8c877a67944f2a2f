//! First-run catalog seeding.
//!
//! Inserts a small starter catalog when the database has never held one,
//! so a fresh deployment renders something before an operator touches the
//! admin surface.

use sqlx::PgPool;

use crate::models::carat_weight::CreateCaratWeight;
use crate::models::diamond_shape::CreateDiamondShape;
use crate::models::head_variant::CreateHeadVariant;
use crate::models::metal_color::CreateMetalColor;
use crate::models::setting_style::CreateSettingStyle;
use crate::models::shank_variant::CreateShankVariant;
use crate::repositories::{
    CaratWeightRepo, DiamondShapeRepo, HeadVariantRepo, MetalColorRepo, PricingRepo,
    SettingStyleRepo, ShankVariantRepo,
};

/// Seed the starter catalog if no diamond shapes exist yet. Returns
/// whether anything was inserted.
pub async fn seed_if_empty(pool: &PgPool) -> Result<bool, sqlx::Error> {
    let shape_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM diamond_shapes")
        .fetch_one(pool)
        .await?;
    if shape_count > 0 {
        return Ok(false);
    }

    let round = DiamondShapeRepo::create(
        pool,
        &CreateDiamondShape {
            internal_name: Some("round".into()),
            display_name: "Round".into(),
            image_url: None,
        },
    )
    .await?;
    let oval = DiamondShapeRepo::create(
        pool,
        &CreateDiamondShape {
            internal_name: Some("oval".into()),
            display_name: "Oval".into(),
            image_url: None,
        },
    )
    .await?;

    let prong = SettingStyleRepo::create(
        pool,
        &CreateSettingStyle {
            internal_name: Some("prong".into()),
            display_name: "Prong".into(),
            image_url: None,
            per_shape_images: None,
        },
    )
    .await?;
    let bezel = SettingStyleRepo::create(
        pool,
        &CreateSettingStyle {
            internal_name: Some("bezel".into()),
            display_name: "Bezel".into(),
            image_url: None,
            per_shape_images: None,
        },
    )
    .await?;

    let one_carat = CaratWeightRepo::create(
        pool,
        &CreateCaratWeight {
            internal_name: Some("1_0_ct".into()),
            display_name: "1.0 ct".into(),
            value: 1.0,
        },
    )
    .await?;
    let one_half_carat = CaratWeightRepo::create(
        pool,
        &CreateCaratWeight {
            internal_name: Some("1_5_ct".into()),
            display_name: "1.5 ct".into(),
            value: 1.5,
        },
    )
    .await?;
    CaratWeightRepo::create(
        pool,
        &CreateCaratWeight {
            internal_name: Some("2_0_ct".into()),
            display_name: "2.0 ct".into(),
            value: 2.0,
        },
    )
    .await?;

    let shank = ShankVariantRepo::create(
        pool,
        &starter_shank(
            "shank",
            "Shank",
            "./shank.glb",
            Some("./shank_band_1.glb"),
            Some("./shank_band_2.glb"),
        ),
    )
    .await?;
    let shank_3 = ShankVariantRepo::create(
        pool,
        &starter_shank(
            "shank_3",
            "Shank 3",
            "./shank_3.glb",
            Some("./shank_3_band_1.glb"),
            None,
        ),
    )
    .await?;
    let shank_4 =
        ShankVariantRepo::create(pool, &starter_shank("shank_4", "Shank 4", "./shank_4.glb", None, None))
            .await?;

    for (internal_name, display_name, hex_color) in [
        ("yellow_gold", "Yellow Gold", "#e5b377"),
        ("white_gold", "White Gold", "#c2c2c3"),
        ("rose_gold", "Rose Gold", "#f2af83"),
    ] {
        MetalColorRepo::create(
            pool,
            &CreateMetalColor {
                internal_name: Some(internal_name.into()),
                display_name: display_name.into(),
                hex_color: hex_color.into(),
                active: Some(true),
            },
        )
        .await?;
    }

    HeadVariantRepo::create(
        pool,
        &CreateHeadVariant {
            model_file: "./head.glb".into(),
            scale: None,
            pos_z: None,
            is_default: None,
            shank_ids: vec![shank.id, shank_3.id, shank_4.id],
            diamond_shape_id: round.id,
            setting_style_id: prong.id,
            carat_weight_id: one_carat.id,
        },
    )
    .await?;
    HeadVariantRepo::create(
        pool,
        &CreateHeadVariant {
            model_file: "./head_2.glb".into(),
            scale: None,
            pos_z: None,
            is_default: None,
            shank_ids: vec![shank.id],
            diamond_shape_id: oval.id,
            setting_style_id: bezel.id,
            carat_weight_id: one_half_carat.id,
        },
    )
    .await?;

    // Bounds and base come from the table defaults.
    PricingRepo::get_or_create(pool).await?;

    tracing::info!("Seeded starter catalog");
    Ok(true)
}

fn starter_shank(
    internal_name: &str,
    display_name: &str,
    model_file: &str,
    band_file1: Option<&str>,
    band_file2: Option<&str>,
) -> CreateShankVariant {
    CreateShankVariant {
        internal_name: Some(internal_name.into()),
        display_name: display_name.into(),
        model_file: model_file.into(),
        matching_band_file1: band_file1.map(String::from),
        matching_band_file2: band_file2.map(String::from),
        image_url: None,
        category_name: None,
        scale: None,
        pos_z: None,
        is_default: None,
    }
}
