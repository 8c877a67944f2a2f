//! Handlers for the `/admin/head-variants` resource.
//!
//! A head variant is one (diamond shape, setting style, carat weight)
//! combination attached to a set of compatible shanks. Its internal and
//! display names are derived from the referenced components inside the
//! repository, so the DTOs never carry name fields.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::models::head_variant::{CreateHeadVariant, UpdateHeadVariant};
use atelier_db::repositories::HeadVariantRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/head-variants
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let heads = HeadVariantRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: heads }))
}

/// POST /api/v1/admin/head-variants
///
/// A head without at least one shank would be unreachable by the
/// resolver, so an empty `shank_ids` is rejected up front.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateHeadVariant>,
) -> AppResult<impl IntoResponse> {
    if input.shank_ids.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "shank_ids must not be empty".into(),
        )));
    }

    let head = HeadVariantRepo::create(&state.pool, &input).await?;

    tracing::info!(id = head.id, name = %head.internal_name, "Head variant created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: head })))
}

/// GET /api/v1/admin/head-variants/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let head = HeadVariantRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "HeadVariant",
            id,
        }))?;

    Ok(Json(DataResponse { data: head }))
}

/// PUT /api/v1/admin/head-variants/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateHeadVariant>,
) -> AppResult<impl IntoResponse> {
    if matches!(&input.shank_ids, Some(ids) if ids.is_empty()) {
        return Err(AppError::Core(CoreError::Validation(
            "shank_ids must not be empty".into(),
        )));
    }

    let head = HeadVariantRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "HeadVariant",
            id,
        }))?;

    tracing::info!(id, "Head variant updated");

    Ok(Json(DataResponse { data: head }))
}

/// DELETE /api/v1/admin/head-variants/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = HeadVariantRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "HeadVariant",
            id,
        }));
    }

    tracing::info!(id, "Head variant deleted");

    Ok(StatusCode::NO_CONTENT)
}
