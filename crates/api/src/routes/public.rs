//! Route definitions for the unauthenticated storefront reads.
//!
//! Everything here is consumed by the customizer frontend to draw the
//! catalog; nothing mutates state.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes mounted at `/public`.
///
/// ```text
/// GET    /config          -> full_config
/// GET    /head-variants   -> list_head_variants
/// GET    /shank-variants  -> list_shank_variants
/// GET    /metal-colors    -> list_metal_colors
/// GET    /pricing         -> get_pricing
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/config", get(catalog::full_config))
        .route("/head-variants", get(catalog::list_head_variants))
        .route("/shank-variants", get(catalog::list_shank_variants))
        .route("/metal-colors", get(catalog::list_metal_colors))
        .route("/pricing", get(catalog::get_pricing))
}
