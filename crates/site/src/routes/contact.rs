//! Contact form route handlers.
//!
//! Submission is the one public write in the system; reading the inbox is
//! admin-only.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use tracing::instrument;

use crate::db::ContactSubmissionRepository;
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::models::content::{ContactSubmission, NewContactSubmission};
use crate::state::AppState;

/// Build the contact router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/contact", get(index).post(create))
}

/// Submit the contact form.
///
/// POST /api/contact (public)
#[instrument(skip(state, payload))]
async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewContactSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<ContactSubmission>), AppError> {
    let Json(payload) =
        payload.map_err(|_| AppError::BadRequest("Invalid contact form data".to_owned()))?;
    let input = payload.validate()?;

    let submission = ContactSubmissionRepository::new(state.pool())
        .create(&input)
        .await?;

    tracing::info!(id = %submission.id, "contact submission received");

    Ok((StatusCode::CREATED, Json(submission)))
}

/// List all submissions.
///
/// GET /api/contact (admin)
async fn index(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<Json<Vec<ContactSubmission>>, AppError> {
    let submissions = ContactSubmissionRepository::new(state.pool()).list().await?;
    Ok(Json(submissions))
}
