//! Integration tests for catalog CRUD and the head-combination rules.
//!
//! Exercises the repository layer against a real database:
//! - Name and set-key regeneration on head variant writes
//! - Combination uniqueness independent of shank order
//! - Single-default promotion
//! - JSONB pricing modifier writes
//!
//! These need a running Postgres; run with `cargo test -- --ignored` and
//! a `DATABASE_URL` pointing at a disposable server.

use sqlx::PgPool;

use atelier_core::types::DbId;
use atelier_db::models::carat_weight::CreateCaratWeight;
use atelier_db::models::diamond_shape::CreateDiamondShape;
use atelier_db::models::head_variant::{CreateHeadVariant, UpdateHeadVariant};
use atelier_db::models::pricing::{ModifierKind, UpdateRingPricing};
use atelier_db::models::setting_style::CreateSettingStyle;
use atelier_db::models::shank_variant::CreateShankVariant;
use atelier_db::repositories::{
    CaratWeightRepo, DiamondShapeRepo, HeadVariantRepo, PricingRepo, SettingStyleRepo,
    ShankVariantRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct Fixture {
    round: DbId,
    prong: DbId,
    bezel: DbId,
    one_ct: DbId,
    shank_a: DbId,
    shank_b: DbId,
}

fn new_shank(internal: &str, display: &str) -> CreateShankVariant {
    CreateShankVariant {
        internal_name: Some(internal.to_string()),
        display_name: display.to_string(),
        model_file: format!("./{internal}.glb"),
        matching_band_file1: None,
        matching_band_file2: None,
        image_url: None,
        category_name: None,
        scale: None,
        pos_z: None,
        is_default: None,
    }
}

fn new_head(f: &Fixture, shank_ids: Vec<DbId>) -> CreateHeadVariant {
    CreateHeadVariant {
        model_file: "./head.glb".to_string(),
        scale: None,
        pos_z: None,
        is_default: None,
        shank_ids,
        diamond_shape_id: f.round,
        setting_style_id: f.prong,
        carat_weight_id: f.one_ct,
    }
}

async fn fixture(pool: &PgPool) -> Fixture {
    let round = DiamondShapeRepo::create(
        pool,
        &CreateDiamondShape {
            internal_name: Some("round".into()),
            display_name: "Round".into(),
            image_url: None,
        },
    )
    .await
    .unwrap();
    let prong = SettingStyleRepo::create(
        pool,
        &CreateSettingStyle {
            internal_name: Some("prong".into()),
            display_name: "Prong".into(),
            image_url: None,
            per_shape_images: None,
        },
    )
    .await
    .unwrap();
    let bezel = SettingStyleRepo::create(
        pool,
        &CreateSettingStyle {
            internal_name: Some("bezel".into()),
            display_name: "Bezel".into(),
            image_url: None,
            per_shape_images: None,
        },
    )
    .await
    .unwrap();
    let one_ct = CaratWeightRepo::create(
        pool,
        &CreateCaratWeight {
            internal_name: Some("1_0_ct".into()),
            display_name: "1.0 ct".into(),
            value: 1.0,
        },
    )
    .await
    .unwrap();
    let shank_a = ShankVariantRepo::create(pool, &new_shank("classic", "Classic"))
        .await
        .unwrap();
    let shank_b = ShankVariantRepo::create(pool, &new_shank("twisted", "Twisted"))
        .await
        .unwrap();

    Fixture {
        round: round.id,
        prong: prong.id,
        bezel: bezel.id,
        one_ct: one_ct.id,
        shank_a: shank_a.id,
        shank_b: shank_b.id,
    }
}

// ---------------------------------------------------------------------------
// Head variants
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn head_create_generates_names_and_set_key(pool: PgPool) {
    let f = fixture(&pool).await;

    let single = HeadVariantRepo::create(&pool, &new_head(&f, vec![f.shank_a]))
        .await
        .unwrap();
    assert_eq!(single.internal_name, "classic_prong_round_1_0_ct");
    assert_eq!(single.display_name, "Classic / Prong / Round / 1.0 ct");
    assert_eq!(single.shank_set_key, f.shank_a.to_string());
    assert_eq!(single.shank_ids, vec![f.shank_a]);

    let mut multi_input = new_head(&f, vec![f.shank_b, f.shank_a]);
    multi_input.setting_style_id = f.bezel;
    let multi = HeadVariantRepo::create(&pool, &multi_input).await.unwrap();
    assert_eq!(multi.internal_name, "multi_bezel_round_1_0_ct");
    assert_eq!(multi.display_name, "Twisted + Classic / Bezel / Round / 1.0 ct");
    // Caller order is preserved in the set, the key is canonical.
    assert_eq!(multi.shank_ids, vec![f.shank_b, f.shank_a]);
    assert_eq!(multi.shank_set_key, format!("{}_{}", f.shank_a, f.shank_b));
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn duplicate_combination_conflicts_regardless_of_shank_order(pool: PgPool) {
    let f = fixture(&pool).await;

    HeadVariantRepo::create(&pool, &new_head(&f, vec![f.shank_a, f.shank_b]))
        .await
        .unwrap();
    let result = HeadVariantRepo::create(&pool, &new_head(&f, vec![f.shank_b, f.shank_a])).await;
    assert!(result.is_err(), "same set in another order should conflict");
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn head_create_with_unknown_reference_fails(pool: PgPool) {
    let f = fixture(&pool).await;
    let result = HeadVariantRepo::create(&pool, &new_head(&f, vec![99_999])).await;
    assert!(matches!(result, Err(sqlx::Error::RowNotFound)));
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn default_promotion_clears_previous_default(pool: PgPool) {
    let f = fixture(&pool).await;

    let mut first_input = new_head(&f, vec![f.shank_a]);
    first_input.is_default = Some(true);
    let first = HeadVariantRepo::create(&pool, &first_input).await.unwrap();
    assert!(first.is_default);

    let mut second_input = new_head(&f, vec![f.shank_b]);
    second_input.is_default = Some(true);
    let second = HeadVariantRepo::create(&pool, &second_input).await.unwrap();
    assert!(second.is_default);

    let first = HeadVariantRepo::find_by_id(&pool, first.id)
        .await
        .unwrap()
        .unwrap();
    assert!(!first.is_default, "promotion should clear the old default");
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn head_update_regenerates_names_and_replaces_set(pool: PgPool) {
    let f = fixture(&pool).await;
    let head = HeadVariantRepo::create(&pool, &new_head(&f, vec![f.shank_a]))
        .await
        .unwrap();

    let updated = HeadVariantRepo::update(
        &pool,
        head.id,
        &UpdateHeadVariant {
            model_file: None,
            scale: None,
            pos_z: None,
            is_default: None,
            shank_ids: Some(vec![f.shank_b]),
            diamond_shape_id: None,
            setting_style_id: Some(f.bezel),
            carat_weight_id: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.internal_name, "twisted_bezel_round_1_0_ct");
    assert_eq!(updated.display_name, "Twisted / Bezel / Round / 1.0 ct");
    assert_eq!(updated.shank_ids, vec![f.shank_b]);
    assert_eq!(updated.shank_set_key, f.shank_b.to_string());
    // Untouched fields survive.
    assert_eq!(updated.model_file, head.model_file);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn head_update_of_missing_row_returns_none(pool: PgPool) {
    let result = HeadVariantRepo::update(
        &pool,
        99_999,
        &UpdateHeadVariant {
            model_file: Some("./other.glb".into()),
            scale: None,
            pos_z: None,
            is_default: None,
            shank_ids: None,
            diamond_shape_id: None,
            setting_style_id: None,
            carat_weight_id: None,
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn deleting_a_shank_shrinks_head_sets(pool: PgPool) {
    let f = fixture(&pool).await;
    let head = HeadVariantRepo::create(&pool, &new_head(&f, vec![f.shank_a, f.shank_b]))
        .await
        .unwrap();

    assert!(ShankVariantRepo::delete(&pool, f.shank_b).await.unwrap());

    let head = HeadVariantRepo::find_by_id(&pool, head.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(head.shank_ids, vec![f.shank_a]);
}

// ---------------------------------------------------------------------------
// Component slugs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn component_create_slugifies_missing_internal_name(pool: PgPool) {
    let shape = DiamondShapeRepo::create(
        &pool,
        &CreateDiamondShape {
            internal_name: None,
            display_name: "Emerald Cut".into(),
            image_url: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(shape.internal_name, "emerald-cut");

    // An explicit slug wins over derivation.
    let mut shank = new_shank("pave_2", "Pave 2");
    shank.internal_name = Some("pave_2".into());
    let shank = ShankVariantRepo::create(&pool, &shank).await.unwrap();
    assert_eq!(shank.internal_name, "pave_2");
}

// ---------------------------------------------------------------------------
// Pricing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn pricing_modifiers_set_overwrite_and_remove(pool: PgPool) {
    let f = fixture(&pool).await;
    let key = f.shank_a.to_string();

    let row = PricingRepo::set_modifier(&pool, ModifierKind::Shank, &key, 200.0)
        .await
        .unwrap();
    assert_eq!(row.into_catalog().shank_modifiers.get(&key), Some(&200.0));

    let row = PricingRepo::set_modifier(&pool, ModifierKind::Shank, &key, 250.0)
        .await
        .unwrap();
    assert_eq!(row.into_catalog().shank_modifiers.get(&key), Some(&250.0));

    let band_key = format!("{}_band", f.shank_a);
    let row = PricingRepo::set_modifier(&pool, ModifierKind::MatchingBand, &band_key, 150.0)
        .await
        .unwrap();
    assert_eq!(
        row.into_catalog().matching_band_modifiers.get(&band_key),
        Some(&150.0)
    );

    let row = PricingRepo::remove_modifier(&pool, ModifierKind::Shank, &key)
        .await
        .unwrap();
    let catalog = row.into_catalog();
    assert!(catalog.shank_modifiers.get(&key).is_none());
    // Other maps are untouched.
    assert_eq!(catalog.matching_band_modifiers.get(&band_key), Some(&150.0));
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn pricing_update_merges_bounds_and_replaces_maps(pool: PgPool) {
    let f = fixture(&pool).await;
    PricingRepo::set_modifier(&pool, ModifierKind::Carat, &f.one_ct.to_string(), 100.0)
        .await
        .unwrap();

    let row = PricingRepo::update(
        &pool,
        &UpdateRingPricing {
            base_price: Some(3499.0),
            min_price: None,
            max_price: Some(5000.0),
            shank_modifiers: Some(serde_json::json!({ f.shank_a.to_string(): 250.0 })),
            carat_modifiers: None,
            matching_band_modifiers: None,
            metal_color_modifiers: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(row.base_price, 3499.0);
    assert_eq!(row.min_price, 1500.0);
    assert_eq!(row.max_price, 5000.0);

    let catalog = row.into_catalog();
    // The supplied map replaced the stored one; the untouched map survives.
    assert_eq!(
        catalog.shank_modifiers.get(&f.shank_a.to_string()),
        Some(&250.0)
    );
    assert_eq!(catalog.carat_modifiers.get(&f.one_ct.to_string()), Some(&100.0));
}
