//! Company values route handlers.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, put},
};

use logiflow_core::ValueId;

use crate::db::ValueRepository;
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::models::content::{NewValue, Value, ValueChanges};
use crate::state::AppState;

/// Build the values router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/values", get(index).post(create))
        .route("/api/values/{id}", put(update).delete(destroy))
}

/// List values sorted for display.
///
/// GET /api/values (public)
async fn index(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let values = ValueRepository::new(state.pool()).list().await?;
    Ok(Json(values))
}

/// Create a value.
///
/// POST /api/values (admin)
async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    payload: Result<Json<NewValue>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Json(payload) =
        payload.map_err(|_| AppError::BadRequest("Invalid value data".to_owned()))?;
    let input = payload.validate()?;

    let value = ValueRepository::new(state.pool()).create(&input).await?;
    Ok((StatusCode::CREATED, Json(value)))
}

/// Merge supplied fields into a value.
///
/// PUT /api/values/{id} (admin)
async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i32>,
    payload: Result<Json<ValueChanges>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(payload) =
        payload.map_err(|_| AppError::BadRequest("Invalid value data".to_owned()))?;
    let changes = payload.validate()?;

    ValueRepository::new(state.pool())
        .update(ValueId::new(id), &changes)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Value not found".to_owned()))
}

/// Delete a value.
///
/// DELETE /api/values/{id} (admin)
async fn destroy(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let deleted = ValueRepository::new(state.pool())
        .delete(ValueId::new(id))
        .await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Value not found".to_owned()))
    }
}
