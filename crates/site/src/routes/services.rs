//! Service offerings route handlers.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, put},
};

use logiflow_core::ServiceId;

use crate::db::ServiceRepository;
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::models::content::{NewService, Service, ServiceChanges};
use crate::state::AppState;

/// Build the services router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/services", get(index).post(create))
        .route("/api/services/{id}", put(update).delete(destroy))
}

/// List services sorted for display.
///
/// GET /api/services (public)
async fn index(State(state): State<AppState>) -> Result<Json<Vec<Service>>, AppError> {
    let services = ServiceRepository::new(state.pool()).list().await?;
    Ok(Json(services))
}

/// Create a service.
///
/// POST /api/services (admin)
async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    payload: Result<Json<NewService>, JsonRejection>,
) -> Result<(StatusCode, Json<Service>), AppError> {
    let Json(payload) =
        payload.map_err(|_| AppError::BadRequest("Invalid service data".to_owned()))?;
    let input = payload.validate()?;

    let service = ServiceRepository::new(state.pool()).create(&input).await?;
    Ok((StatusCode::CREATED, Json(service)))
}

/// Merge supplied fields into a service.
///
/// PUT /api/services/{id} (admin)
async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i32>,
    payload: Result<Json<ServiceChanges>, JsonRejection>,
) -> Result<Json<Service>, AppError> {
    let Json(payload) =
        payload.map_err(|_| AppError::BadRequest("Invalid service data".to_owned()))?;
    let changes = payload.validate()?;

    ServiceRepository::new(state.pool())
        .update(ServiceId::new(id), &changes)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Service not found".to_owned()))
}

/// Delete a service.
///
/// DELETE /api/services/{id} (admin)
async fn destroy(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let deleted = ServiceRepository::new(state.pool())
        .delete(ServiceId::new(id))
        .await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Service not found".to_owned()))
    }
}
