//! Handlers for the `/admin/diamond-shapes` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::models::diamond_shape::{CreateDiamondShape, UpdateDiamondShape};
use atelier_db::repositories::DiamondShapeRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/diamond-shapes
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let shapes = DiamondShapeRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: shapes }))
}

/// POST /api/v1/admin/diamond-shapes
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDiamondShape>,
) -> AppResult<impl IntoResponse> {
    let shape = DiamondShapeRepo::create(&state.pool, &input).await?;

    tracing::info!(id = shape.id, name = %shape.internal_name, "Diamond shape created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: shape })))
}

/// GET /api/v1/admin/diamond-shapes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let shape = DiamondShapeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "DiamondShape",
            id,
        }))?;

    Ok(Json(DataResponse { data: shape }))
}

/// PUT /api/v1/admin/diamond-shapes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDiamondShape>,
) -> AppResult<impl IntoResponse> {
    let shape = DiamondShapeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "DiamondShape",
            id,
        }))?;

    tracing::info!(id, "Diamond shape updated");

    Ok(Json(DataResponse { data: shape }))
}

/// DELETE /api/v1/admin/diamond-shapes/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = DiamondShapeRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "DiamondShape",
            id,
        }));
    }

    tracing::info!(id, "Diamond shape deleted");

    Ok(StatusCode::NO_CONTENT)
}
