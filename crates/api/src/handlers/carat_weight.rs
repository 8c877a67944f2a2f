//! Handlers for the `/admin/carat-weights` resource.
//!
//! Lists are ordered by ascending carat value, not creation order.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::models::carat_weight::{CreateCaratWeight, UpdateCaratWeight};
use atelier_db::repositories::CaratWeightRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/carat-weights
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let weights = CaratWeightRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: weights }))
}

/// POST /api/v1/admin/carat-weights
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCaratWeight>,
) -> AppResult<impl IntoResponse> {
    let weight = CaratWeightRepo::create(&state.pool, &input).await?;

    tracing::info!(id = weight.id, value = weight.value, "Carat weight created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: weight })))
}

/// GET /api/v1/admin/carat-weights/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let weight = CaratWeightRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CaratWeight",
            id,
        }))?;

    Ok(Json(DataResponse { data: weight }))
}

/// PUT /api/v1/admin/carat-weights/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCaratWeight>,
) -> AppResult<impl IntoResponse> {
    let weight = CaratWeightRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CaratWeight",
            id,
        }))?;

    tracing::info!(id, "Carat weight updated");

    Ok(Json(DataResponse { data: weight }))
}

/// DELETE /api/v1/admin/carat-weights/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CaratWeightRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "CaratWeight",
            id,
        }));
    }

    tracing::info!(id, "Carat weight deleted");

    Ok(StatusCode::NO_CONTENT)
}
