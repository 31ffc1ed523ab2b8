//! Overview singleton route handlers.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::get,
};

use crate::db::OverviewRepository;
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::models::content::{NewOverview, Overview};
use crate::state::AppState;

/// Build the overview router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/overview", get(show).put(upsert))
}

/// Fetch the overview, `null` until one is published.
///
/// GET /api/overview (public)
async fn show(State(state): State<AppState>) -> Result<Json<Option<Overview>>, AppError> {
    let overview = OverviewRepository::new(state.pool()).get().await?;
    Ok(Json(overview))
}

/// Create-or-replace the overview singleton.
///
/// PUT /api/overview (admin)
async fn upsert(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    payload: Result<Json<NewOverview>, JsonRejection>,
) -> Result<Json<Overview>, AppError> {
    let Json(payload) =
        payload.map_err(|_| AppError::BadRequest("Invalid overview data".to_owned()))?;
    let input = payload.validate()?;

    let overview = OverviewRepository::new(state.pool()).upsert(&input).await?;
    Ok(Json(overview))
}
