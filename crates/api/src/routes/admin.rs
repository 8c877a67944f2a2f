//! Route definitions for the catalog administration endpoints.
//!
//! Every catalog component gets the same CRUD surface (`/` for list +
//! create, `/{id}` for get + update + delete). Pricing is a singleton
//! resource with per-map modifier endpoints keyed by component id.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{
    carat_weight, diamond_shape, head_variant, metal_color, pricing, setting_style,
    shank_category, shank_variant,
};
use crate::state::AppState;

/// Routes mounted at `/admin`.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/diamond-shapes", diamond_shapes())
        .nest("/setting-styles", setting_styles())
        .nest("/carat-weights", carat_weights())
        .nest("/shank-categories", shank_categories())
        .nest("/shank-variants", shank_variants())
        .nest("/metal-colors", metal_colors())
        .nest("/head-variants", head_variants())
        .nest("/pricing", pricing_routes())
}

fn diamond_shapes() -> Router<AppState> {
    Router::new()
        .route("/", get(diamond_shape::list).post(diamond_shape::create))
        .route(
            "/{id}",
            get(diamond_shape::get_by_id)
                .put(diamond_shape::update)
                .delete(diamond_shape::delete),
        )
}

fn setting_styles() -> Router<AppState> {
    Router::new()
        .route("/", get(setting_style::list).post(setting_style::create))
        .route(
            "/{id}",
            get(setting_style::get_by_id)
                .put(setting_style::update)
                .delete(setting_style::delete),
        )
}

fn carat_weights() -> Router<AppState> {
    Router::new()
        .route("/", get(carat_weight::list).post(carat_weight::create))
        .route(
            "/{id}",
            get(carat_weight::get_by_id)
                .put(carat_weight::update)
                .delete(carat_weight::delete),
        )
}

fn shank_categories() -> Router<AppState> {
    Router::new()
        .route("/", get(shank_category::list).post(shank_category::create))
        .route(
            "/{id}",
            get(shank_category::get_by_id)
                .put(shank_category::update)
                .delete(shank_category::delete),
        )
}

fn shank_variants() -> Router<AppState> {
    Router::new()
        .route("/", get(shank_variant::list).post(shank_variant::create))
        .route(
            "/{id}",
            get(shank_variant::get_by_id)
                .put(shank_variant::update)
                .delete(shank_variant::delete),
        )
}

fn metal_colors() -> Router<AppState> {
    Router::new()
        .route("/", get(metal_color::list).post(metal_color::create))
        .route(
            "/{id}",
            get(metal_color::get_by_id)
                .put(metal_color::update)
                .delete(metal_color::delete),
        )
}

fn head_variants() -> Router<AppState> {
    Router::new()
        .route("/", get(head_variant::list).post(head_variant::create))
        .route(
            "/{id}",
            get(head_variant::get_by_id)
                .put(head_variant::update)
                .delete(head_variant::delete),
        )
}

/// Routes mounted at `/admin/pricing`.
///
/// ```text
/// GET    /                              -> get_pricing (creates defaults)
/// PUT    /                              -> update_pricing
/// PUT    /shank-modifiers/{id}          -> set_shank_modifier
/// DELETE /shank-modifiers/{id}          -> remove_shank_modifier
/// PUT    /carat-modifiers/{id}          -> set_carat_modifier
/// DELETE /carat-modifiers/{id}          -> remove_carat_modifier
/// PUT    /matching-band-modifiers/{id}  -> set_matching_band_modifier
/// DELETE /matching-band-modifiers/{id}  -> remove_matching_band_modifier
/// PUT    /metal-color-modifiers/{id}    -> set_metal_color_modifier
/// DELETE /metal-color-modifiers/{id}    -> remove_metal_color_modifier
/// ```
fn pricing_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pricing::get_pricing).put(pricing::update_pricing))
        .route(
            "/shank-modifiers/{id}",
            put(pricing::set_shank_modifier).delete(pricing::remove_shank_modifier),
        )
        .route(
            "/carat-modifiers/{id}",
            put(pricing::set_carat_modifier).delete(pricing::remove_carat_modifier),
        )
        .route(
            "/matching-band-modifiers/{id}",
            put(pricing::set_matching_band_modifier)
                .delete(pricing::remove_matching_band_modifier),
        )
        .route(
            "/metal-color-modifiers/{id}",
            put(pricing::set_metal_color_modifier).delete(pricing::remove_metal_color_modifier),
        )
}
