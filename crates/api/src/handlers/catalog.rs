//! Handlers for the unauthenticated `/public` catalog reads.
//!
//! `/config` serves the same snapshot the configurator endpoints resolve
//! against, so the storefront and the session endpoints can never
//! disagree about what exists.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use atelier_db::repositories::{
    CatalogRepo, HeadVariantRepo, MetalColorRepo, PricingRepo, ShankVariantRepo,
};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/public/config
pub async fn full_config(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let snapshot = CatalogRepo::load_snapshot(&state.pool).await?;
    Ok(Json(DataResponse { data: snapshot }))
}

/// GET /api/v1/public/head-variants
pub async fn list_head_variants(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let heads = HeadVariantRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: heads }))
}

/// GET /api/v1/public/shank-variants
pub async fn list_shank_variants(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let shanks = ShankVariantRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: shanks }))
}

/// GET /api/v1/public/metal-colors
///
/// Inactive colors are admin-only; the storefront never sees them.
pub async fn list_metal_colors(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let colors = MetalColorRepo::list_active(&state.pool).await?;
    Ok(Json(DataResponse { data: colors }))
}

/// GET /api/v1/public/pricing
pub async fn get_pricing(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pricing = PricingRepo::get_or_create(&state.pool).await?.into_catalog();
    Ok(Json(DataResponse { data: pricing }))
}
