//! Handlers for the `/admin/metal-colors` resource.
//!
//! Colors are soft-hidden via the `active` flag rather than deleted, so
//! saved configurations keep resolving; hard delete stays available for
//! admin cleanup.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::models::metal_color::{CreateMetalColor, UpdateMetalColor};
use atelier_db::repositories::MetalColorRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/metal-colors
///
/// Lists all colors including inactive ones; the public endpoint filters.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let colors = MetalColorRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: colors }))
}

/// POST /api/v1/admin/metal-colors
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMetalColor>,
) -> AppResult<impl IntoResponse> {
    let color = MetalColorRepo::create(&state.pool, &input).await?;

    tracing::info!(id = color.id, name = %color.internal_name, "Metal color created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: color })))
}

/// GET /api/v1/admin/metal-colors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let color = MetalColorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MetalColor",
            id,
        }))?;

    Ok(Json(DataResponse { data: color }))
}

/// PUT /api/v1/admin/metal-colors/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMetalColor>,
) -> AppResult<impl IntoResponse> {
    let color = MetalColorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MetalColor",
            id,
        }))?;

    tracing::info!(id, "Metal color updated");

    Ok(Json(DataResponse { data: color }))
}

/// DELETE /api/v1/admin/metal-colors/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = MetalColorRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "MetalColor",
            id,
        }));
    }

    tracing::info!(id, "Metal color deleted");

    Ok(StatusCode::NO_CONTENT)
}
