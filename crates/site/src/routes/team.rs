//! Team members route handlers.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, put},
};

use logiflow_core::TeamMemberId;

use crate::db::TeamMemberRepository;
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::models::content::{NewTeamMember, TeamMember, TeamMemberChanges};
use crate::state::AppState;

/// Build the team router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/team", get(index).post(create))
        .route("/api/team/{id}", put(update).delete(destroy))
}

/// List team members sorted for display.
///
/// GET /api/team (public)
async fn index(State(state): State<AppState>) -> Result<Json<Vec<TeamMember>>, AppError> {
    let members = TeamMemberRepository::new(state.pool()).list().await?;
    Ok(Json(members))
}

/// Create a team member.
///
/// POST /api/team (admin)
async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    payload: Result<Json<NewTeamMember>, JsonRejection>,
) -> Result<(StatusCode, Json<TeamMember>), AppError> {
    let Json(payload) =
        payload.map_err(|_| AppError::BadRequest("Invalid team member data".to_owned()))?;
    let input = payload.validate()?;

    let member = TeamMemberRepository::new(state.pool()).create(&input).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// Merge supplied fields into a team member.
///
/// PUT /api/team/{id} (admin)
async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i32>,
    payload: Result<Json<TeamMemberChanges>, JsonRejection>,
) -> Result<Json<TeamMember>, AppError> {
    let Json(payload) =
        payload.map_err(|_| AppError::BadRequest("Invalid team member data".to_owned()))?;
    let changes = payload.validate()?;

    TeamMemberRepository::new(state.pool())
        .update(TeamMemberId::new(id), &changes)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Team member not found".to_owned()))
}

/// Delete a team member.
///
/// DELETE /api/team/{id} (admin)
async fn destroy(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let deleted = TeamMemberRepository::new(state.pool())
        .delete(TeamMemberId::new(id))
        .await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Team member not found".to_owned()))
    }
}
