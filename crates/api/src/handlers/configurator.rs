//! Handlers for the `/public/configurator` session endpoints.
//!
//! The state machine runs server-side but statelessly: the client holds
//! its selection and sends it back with every call, and each call
//! resolves against a freshly loaded catalog snapshot.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use atelier_core::pricing;
use atelier_core::selection::{Configurator, Selection, TransitionAction};
use atelier_db::repositories::CatalogRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body for `POST /transition`.
#[derive(Debug, Deserialize)]
pub struct TransitionRequest {
    pub selection: Selection,
    pub action: TransitionAction,
}

/// Body for `POST /quote`.
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub selection: Selection,
}

/// POST /api/v1/public/configurator/session
///
/// Starts a fresh selection from the current catalog defaults. Responds
/// 409 when the catalog is empty, the only way a session can fail.
pub async fn start_session(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let catalog = CatalogRepo::load_snapshot(&state.pool).await?;
    let configurator = Configurator::start(&catalog)?;
    let view = configurator.view()?;

    Ok(Json(DataResponse { data: view }))
}

/// POST /api/v1/public/configurator/transition
///
/// Re-validates the client's selection against the current catalog, then
/// applies one action. Unknown ids inside the action no-op rather than
/// fail, so the response is always a coherent view.
pub async fn apply_transition(
    State(state): State<AppState>,
    Json(input): Json<TransitionRequest>,
) -> AppResult<impl IntoResponse> {
    let catalog = CatalogRepo::load_snapshot(&state.pool).await?;
    let mut configurator = Configurator::resume(&catalog, input.selection)?;
    configurator.apply(input.action);
    let view = configurator.view()?;

    Ok(Json(DataResponse { data: view }))
}

/// POST /api/v1/public/configurator/quote
///
/// Prices the client's selection without building the full view.
pub async fn quote_selection(
    State(state): State<AppState>,
    Json(input): Json<QuoteRequest>,
) -> AppResult<impl IntoResponse> {
    let catalog = CatalogRepo::load_snapshot(&state.pool).await?;
    let configurator = Configurator::resume(&catalog, input.selection)?;
    let quote = pricing::quote(&configurator.selection(), &catalog.pricing);

    Ok(Json(DataResponse { data: quote }))
}
