//! Route definitions for the configurator session endpoints.
//!
//! All three endpoints are POST: the client always sends its current
//! selection (if any) and receives a freshly resolved view back.

use axum::routing::post;
use axum::Router;

use crate::handlers::configurator;
use crate::state::AppState;

/// Routes mounted at `/public/configurator`.
///
/// ```text
/// POST   /session      -> start_session
/// POST   /transition   -> apply_transition
/// POST   /quote        -> quote_selection
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/session", post(configurator::start_session))
        .route("/transition", post(configurator::apply_transition))
        .route("/quote", post(configurator::quote_selection))
}
