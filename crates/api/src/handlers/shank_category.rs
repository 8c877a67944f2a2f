//! Handlers for the `/admin/shank-categories` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::models::shank_category::{CreateShankCategory, UpdateShankCategory};
use atelier_db::repositories::ShankCategoryRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/shank-categories
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = ShankCategoryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/v1/admin/shank-categories
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateShankCategory>,
) -> AppResult<impl IntoResponse> {
    let category = ShankCategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(id = category.id, name = %category.internal_name, "Shank category created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// GET /api/v1/admin/shank-categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let category = ShankCategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ShankCategory",
            id,
        }))?;

    Ok(Json(DataResponse { data: category }))
}

/// PUT /api/v1/admin/shank-categories/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateShankCategory>,
) -> AppResult<impl IntoResponse> {
    let category = ShankCategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ShankCategory",
            id,
        }))?;

    tracing::info!(id, "Shank category updated");

    Ok(Json(DataResponse { data: category }))
}

/// DELETE /api/v1/admin/shank-categories/{id}
///
/// Shanks reference categories by display name, so deleting a category
/// never cascades into the shank table.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ShankCategoryRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "ShankCategory",
            id,
        }));
    }

    tracing::info!(id, "Shank category deleted");

    Ok(StatusCode::NO_CONTENT)
}
