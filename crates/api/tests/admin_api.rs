//! Integration tests for the `/api/v1/admin` catalog endpoints.
//!
//! Component CRUD, head-combination rules, and pricing writes over real
//! HTTP requests. DB-backed tests need a running Postgres; run with
//! `cargo test -- --ignored` and a `DATABASE_URL` pointing at a
//! disposable server. The handful of validation tests at the bottom run
//! without a database.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// POST a create body and return the new row's id.
async fn post_created(pool: &PgPool, uri: &str, body: serde_json::Value) -> i64 {
    let response = post_json(common::build_test_app(pool.clone()), uri, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

struct Components {
    round: i64,
    prong: i64,
    one_ct: i64,
    shank_a: i64,
    shank_b: i64,
}

/// Create the components a head variant needs, all over HTTP.
async fn seed_components(pool: &PgPool) -> Components {
    let round = post_created(
        pool,
        "/api/v1/admin/diamond-shapes",
        json!({"internal_name": "round", "display_name": "Round"}),
    )
    .await;
    let prong = post_created(
        pool,
        "/api/v1/admin/setting-styles",
        json!({"internal_name": "prong", "display_name": "Prong"}),
    )
    .await;
    let one_ct = post_created(
        pool,
        "/api/v1/admin/carat-weights",
        json!({"internal_name": "1_0_ct", "display_name": "1.0 ct", "value": 1.0}),
    )
    .await;
    let shank_a = post_created(
        pool,
        "/api/v1/admin/shank-variants",
        json!({"internal_name": "classic", "display_name": "Classic", "model_file": "./classic.glb"}),
    )
    .await;
    let shank_b = post_created(
        pool,
        "/api/v1/admin/shank-variants",
        json!({"internal_name": "twisted", "display_name": "Twisted", "model_file": "./twisted.glb"}),
    )
    .await;

    Components {
        round,
        prong,
        one_ct,
        shank_a,
        shank_b,
    }
}

fn head_body(c: &Components, shank_ids: Vec<i64>) -> serde_json::Value {
    json!({
        "model_file": "./head.glb",
        "shank_ids": shank_ids,
        "diamond_shape_id": c.round,
        "setting_style_id": c.prong,
        "carat_weight_id": c.one_ct,
    })
}

// ---------------------------------------------------------------------------
// Component CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn diamond_shape_crud_roundtrip(pool: PgPool) {
    // Create.
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/diamond-shapes",
        json!({"internal_name": "oval", "display_name": "Oval"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["data"]["internal_name"], "oval");
    let id = created["data"]["id"].as_i64().unwrap();

    // List.
    let response = get(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/diamond-shapes",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);

    // Get by id.
    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/diamond-shapes/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["display_name"], "Oval");

    // Update.
    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/diamond-shapes/{id}"),
        json!({"display_name": "Oval Brilliant"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["data"]["display_name"], "Oval Brilliant");
    // Unsupplied fields keep their values.
    assert_eq!(updated["data"]["internal_name"], "oval");

    // Delete.
    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/diamond-shapes/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Gone.
    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/diamond-shapes/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error = body_json(response).await;
    assert_eq!(error["code"], "NOT_FOUND");
    assert!(error["error"].as_str().unwrap().contains("DiamondShape"));
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn component_create_slugifies_display_name(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/setting-styles",
        json!({"display_name": "Hidden Halo"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await["data"]["internal_name"],
        "hidden-halo"
    );
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn duplicate_internal_name_returns_409(pool: PgPool) {
    let body = json!({"internal_name": "round", "display_name": "Round"});
    post_created(&pool, "/api/v1/admin/diamond-shapes", body.clone()).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/diamond-shapes",
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn shank_update_without_category_resets_to_default(pool: PgPool) {
    let id = post_created(
        &pool,
        "/api/v1/admin/shank-variants",
        json!({
            "internal_name": "braided",
            "display_name": "Braided",
            "model_file": "./braided.glb",
            "category_name": "Vintage",
        }),
    )
    .await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/shank-variants/{id}"),
        json!({"display_name": "Braided Gold"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["data"]["display_name"], "Braided Gold");
    assert_eq!(updated["data"]["category_name"], "Most Popular");
}

// ---------------------------------------------------------------------------
// Head variants
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn head_create_derives_names_over_http(pool: PgPool) {
    let c = seed_components(&pool).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/head-variants",
        head_body(&c, vec![c.shank_a]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let head = body_json(response).await;
    assert_eq!(head["data"]["internal_name"], "classic_prong_round_1_0_ct");
    assert_eq!(
        head["data"]["display_name"],
        "Classic / Prong / Round / 1.0 ct"
    );
    assert_eq!(head["data"]["shank_set_key"], c.shank_a.to_string());
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn duplicate_head_combination_returns_409(pool: PgPool) {
    let c = seed_components(&pool).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/head-variants",
        head_body(&c, vec![c.shank_a, c.shank_b]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Same combination, opposite shank order: the set key is canonical.
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/head-variants",
        head_body(&c, vec![c.shank_b, c.shank_a]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn head_create_with_unknown_reference_returns_404(pool: PgPool) {
    let c = seed_components(&pool).await;

    let mut body = head_body(&c, vec![c.shank_a]);
    body["diamond_shape_id"] = json!(999_999);

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/head-variants",
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Pricing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn pricing_get_creates_defaults(pool: PgPool) {
    let response = get(common::build_test_app(pool.clone()), "/api/v1/admin/pricing").await;
    assert_eq!(response.status(), StatusCode::OK);

    let pricing = body_json(response).await;
    assert_eq!(pricing["data"]["base_price"], 2999.0);
    assert_eq!(pricing["data"]["min_price"], 1500.0);
    assert_eq!(pricing["data"]["max_price"], 4500.0);
    assert_eq!(pricing["data"]["shank_modifiers"], json!({}));
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn pricing_update_validates_merged_bounds(pool: PgPool) {
    // min above the current max.
    let response = put_json(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/pricing",
        json!({"min_price": 5000.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    // base below the current min.
    let response = put_json(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/pricing",
        json!({"base_price": 99.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Modifier maps must be objects of numbers.
    let response = put_json(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/pricing",
        json!({"shank_modifiers": {"1": "not-a-number"}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // A consistent update goes through.
    let response = put_json(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/pricing",
        json!({"base_price": 3200.0, "max_price": 6000.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["data"]["base_price"], 3200.0);
    assert_eq!(updated["data"]["max_price"], 6000.0);
    assert_eq!(updated["data"]["min_price"], 1500.0);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn pricing_modifier_endpoints_roundtrip(pool: PgPool) {
    // Set a per-shank modifier.
    let response = put_json(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/pricing/shank-modifiers/7",
        json!({"value": 150.5}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["data"]["shank_modifiers"]["7"],
        150.5
    );

    // Matching band modifiers are keyed per shank as "{id}_band".
    let response = put_json(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/pricing/matching-band-modifiers/7",
        json!({"value": 99.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["data"]["matching_band_modifiers"]["7_band"],
        99.0
    );

    // Remove the shank modifier again; the band entry stays.
    let response = delete(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/pricing/shank-modifiers/7",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let pricing = body_json(response).await;
    assert_eq!(pricing["data"]["shank_modifiers"], json!({}));
    assert_eq!(pricing["data"]["matching_band_modifiers"]["7_band"], 99.0);
}

// ---------------------------------------------------------------------------
// Validation (no database required)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn head_create_with_empty_shank_ids_returns_400() {
    let response = post_json(
        common::build_test_app(common::unreachable_pool()),
        "/api/v1/admin/head-variants",
        json!({
            "model_file": "./head.glb",
            "shank_ids": [],
            "diamond_shape_id": 1,
            "setting_style_id": 1,
            "carat_weight_id": 1,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error = body_json(response).await;
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert_eq!(error["error"], "shank_ids must not be empty");
}

#[tokio::test]
async fn malformed_create_body_returns_422() {
    // display_name is required; the JSON extractor rejects the body
    // before any handler logic runs.
    let response = post_json(
        common::build_test_app(common::unreachable_pool()),
        "/api/v1/admin/diamond-shapes",
        json!({"internal_name": "round"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
