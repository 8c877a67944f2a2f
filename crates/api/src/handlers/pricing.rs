//! Handlers for the `/admin/pricing` singleton resource.
//!
//! The pricing record is created lazily on first read. Whole-record
//! updates merge the scalar fields and replace supplied modifier maps
//! wholesale; the per-map endpoints edit one entry at a time, keyed by
//! the id of the component the modifier applies to.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use atelier_core::error::CoreError;
use atelier_core::pricing::matching_band_key;
use atelier_core::types::DbId;
use atelier_db::models::pricing::{ModifierKind, SetPriceModifier, UpdateRingPricing};
use atelier_db::repositories::PricingRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Whole-record endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/pricing
pub async fn get_pricing(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pricing = PricingRepo::get_or_create(&state.pool).await?;
    Ok(Json(DataResponse { data: pricing }))
}

/// PUT /api/v1/admin/pricing
///
/// Validates the bounds that would result from the merge, so a partial
/// update can never leave the base price outside `[min, max]`.
pub async fn update_pricing(
    State(state): State<AppState>,
    Json(input): Json<UpdateRingPricing>,
) -> AppResult<impl IntoResponse> {
    let current = PricingRepo::get_or_create(&state.pool).await?;

    let base = input.base_price.unwrap_or(current.base_price);
    let min = input.min_price.unwrap_or(current.min_price);
    let max = input.max_price.unwrap_or(current.max_price);

    if min > max {
        return Err(AppError::Core(CoreError::Validation(format!(
            "min_price {min} must not exceed max_price {max}"
        ))));
    }
    if base < min || base > max {
        return Err(AppError::Core(CoreError::Validation(format!(
            "base_price {base} must lie within [{min}, {max}]"
        ))));
    }

    validate_modifier_map("shank_modifiers", input.shank_modifiers.as_ref())?;
    validate_modifier_map("carat_modifiers", input.carat_modifiers.as_ref())?;
    validate_modifier_map(
        "matching_band_modifiers",
        input.matching_band_modifiers.as_ref(),
    )?;
    validate_modifier_map(
        "metal_color_modifiers",
        input.metal_color_modifiers.as_ref(),
    )?;

    let pricing = PricingRepo::update(&state.pool, &input).await?;

    tracing::info!(base_price = pricing.base_price, "Pricing updated");

    Ok(Json(DataResponse { data: pricing }))
}

/// Reject modifier maps that are not JSON objects of numbers; anything
/// else would be silently dropped when the catalog deserializes them.
fn validate_modifier_map(field: &str, map: Option<&serde_json::Value>) -> Result<(), AppError> {
    let Some(value) = map else { return Ok(()) };

    let Some(object) = value.as_object() else {
        return Err(AppError::Core(CoreError::Validation(format!(
            "{field} must be a JSON object"
        ))));
    };
    for (key, entry) in object {
        if !entry.is_number() {
            return Err(AppError::Core(CoreError::Validation(format!(
                "{field}[{key}] must be a number"
            ))));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Per-map modifier endpoints
// ---------------------------------------------------------------------------

/// PUT /api/v1/admin/pricing/shank-modifiers/{id}
pub async fn set_shank_modifier(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetPriceModifier>,
) -> AppResult<impl IntoResponse> {
    let pricing =
        PricingRepo::set_modifier(&state.pool, ModifierKind::Shank, &id.to_string(), input.value)
            .await?;

    tracing::info!(id, value = input.value, "Shank price modifier set");

    Ok(Json(DataResponse { data: pricing }))
}

/// DELETE /api/v1/admin/pricing/shank-modifiers/{id}
pub async fn remove_shank_modifier(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let pricing =
        PricingRepo::remove_modifier(&state.pool, ModifierKind::Shank, &id.to_string()).await?;

    tracing::info!(id, "Shank price modifier removed");

    Ok(Json(DataResponse { data: pricing }))
}

/// PUT /api/v1/admin/pricing/carat-modifiers/{id}
pub async fn set_carat_modifier(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetPriceModifier>,
) -> AppResult<impl IntoResponse> {
    let pricing =
        PricingRepo::set_modifier(&state.pool, ModifierKind::Carat, &id.to_string(), input.value)
            .await?;

    tracing::info!(id, value = input.value, "Carat price modifier set");

    Ok(Json(DataResponse { data: pricing }))
}

/// DELETE /api/v1/admin/pricing/carat-modifiers/{id}
pub async fn remove_carat_modifier(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let pricing =
        PricingRepo::remove_modifier(&state.pool, ModifierKind::Carat, &id.to_string()).await?;

    tracing::info!(id, "Carat price modifier removed");

    Ok(Json(DataResponse { data: pricing }))
}

/// PUT /api/v1/admin/pricing/matching-band-modifiers/{id}
///
/// Band modifiers are keyed per shank as `"{shank_id}_band"`; the path
/// takes the plain shank id and the key is derived here.
pub async fn set_matching_band_modifier(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetPriceModifier>,
) -> AppResult<impl IntoResponse> {
    let pricing = PricingRepo::set_modifier(
        &state.pool,
        ModifierKind::MatchingBand,
        &matching_band_key(id),
        input.value,
    )
    .await?;

    tracing::info!(id, value = input.value, "Matching band price modifier set");

    Ok(Json(DataResponse { data: pricing }))
}

/// DELETE /api/v1/admin/pricing/matching-band-modifiers/{id}
pub async fn remove_matching_band_modifier(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let pricing = PricingRepo::remove_modifier(
        &state.pool,
        ModifierKind::MatchingBand,
        &matching_band_key(id),
    )
    .await?;

    tracing::info!(id, "Matching band price modifier removed");

    Ok(Json(DataResponse { data: pricing }))
}

/// PUT /api/v1/admin/pricing/metal-color-modifiers/{id}
pub async fn set_metal_color_modifier(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetPriceModifier>,
) -> AppResult<impl IntoResponse> {
    let pricing = PricingRepo::set_modifier(
        &state.pool,
        ModifierKind::MetalColor,
        &id.to_string(),
        input.value,
    )
    .await?;

    tracing::info!(id, value = input.value, "Metal color price modifier set");

    Ok(Json(DataResponse { data: pricing }))
}

/// DELETE /api/v1/admin/pricing/metal-color-modifiers/{id}
pub async fn remove_metal_color_modifier(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let pricing =
        PricingRepo::remove_modifier(&state.pool, ModifierKind::MetalColor, &id.to_string())
            .await?;

    tracing::info!(id, "Metal color price modifier removed");

    Ok(Json(DataResponse { data: pricing }))
}
