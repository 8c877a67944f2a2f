//! Handlers for the `/admin/shank-variants` resource.
//!
//! A shank carries up to two matching-band model files; the number of
//! non-null files caps how many bands the configurator will offer.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::models::shank_variant::{CreateShankVariant, UpdateShankVariant};
use atelier_db::repositories::ShankVariantRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/shank-variants
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let shanks = ShankVariantRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: shanks }))
}

/// POST /api/v1/admin/shank-variants
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateShankVariant>,
) -> AppResult<impl IntoResponse> {
    let shank = ShankVariantRepo::create(&state.pool, &input).await?;

    tracing::info!(id = shank.id, name = %shank.internal_name, "Shank variant created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: shank })))
}

/// GET /api/v1/admin/shank-variants/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let shank = ShankVariantRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ShankVariant",
            id,
        }))?;

    Ok(Json(DataResponse { data: shank }))
}

/// PUT /api/v1/admin/shank-variants/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateShankVariant>,
) -> AppResult<impl IntoResponse> {
    let shank = ShankVariantRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ShankVariant",
            id,
        }))?;

    tracing::info!(id, "Shank variant updated");

    Ok(Json(DataResponse { data: shank }))
}

/// DELETE /api/v1/admin/shank-variants/{id}
///
/// Head variants that referenced the shank lose it from their set; a
/// head left with no shanks stops matching any combination.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ShankVariantRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "ShankVariant",
            id,
        }));
    }

    tracing::info!(id, "Shank variant deleted");

    Ok(StatusCode::NO_CONTENT)
}
