//! Handlers for the `/admin/setting-styles` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::models::setting_style::{CreateSettingStyle, UpdateSettingStyle};
use atelier_db::repositories::SettingStyleRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/setting-styles
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let styles = SettingStyleRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: styles }))
}

/// POST /api/v1/admin/setting-styles
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSettingStyle>,
) -> AppResult<impl IntoResponse> {
    let style = SettingStyleRepo::create(&state.pool, &input).await?;

    tracing::info!(id = style.id, name = %style.internal_name, "Setting style created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: style })))
}

/// GET /api/v1/admin/setting-styles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let style = SettingStyleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SettingStyle",
            id,
        }))?;

    Ok(Json(DataResponse { data: style }))
}

/// PUT /api/v1/admin/setting-styles/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSettingStyle>,
) -> AppResult<impl IntoResponse> {
    let style = SettingStyleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SettingStyle",
            id,
        }))?;

    tracing::info!(id, "Setting style updated");

    Ok(Json(DataResponse { data: style }))
}

/// DELETE /api/v1/admin/setting-styles/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = SettingStyleRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "SettingStyle",
            id,
        }));
    }

    tracing::info!(id, "Setting style deleted");

    Ok(StatusCode::NO_CONTENT)
}
