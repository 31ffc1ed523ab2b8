//! Authentication route handlers.
//!
//! Login and logout manage the session lifecycle; the check endpoint lets
//! the client render its admin chrome without ever erroring.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::AppError;
use crate::middleware::{OptionalAdmin, clear_current_admin, set_current_admin};
use crate::models::CurrentAdmin;
use crate::services::AuthService;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub admin: CurrentAdmin,
}

/// Plain message response (logout).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Auth check response.
#[derive(Debug, Serialize)]
pub struct AuthCheckResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<CurrentAdmin>,
}

/// Build the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/login", post(login))
        .route("/api/logout", post(logout))
        .route("/api/auth/check", get(check))
}

/// Verify credentials and open a session.
///
/// POST /api/login
async fn login(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    let Json(payload) =
        payload.map_err(|_| AppError::BadRequest("Invalid login data".to_owned()))?;

    let admin = AuthService::new(state.pool())
        .login_with_password(&payload.email, &payload.password)
        .await?;

    let current = CurrentAdmin {
        id: admin.id,
        email: admin.email,
    };
    set_current_admin(&session, &current).await?;

    tracing::info!(admin_id = %current.id, "admin logged in");

    Ok(Json(LoginResponse {
        message: "Login successful",
        admin: current,
    }))
}

/// Destroy the session and clear the cookie.
///
/// POST /api/logout
///
/// Idempotent: logging out without a session is a successful no-op. A
/// failing store delete surfaces as a 500.
async fn logout(session: Session) -> Result<Json<MessageResponse>, AppError> {
    clear_current_admin(&session).await?;

    Ok(Json(MessageResponse {
        message: "Logout successful",
    }))
}

/// Report whether the request carries a valid admin session.
///
/// GET /api/auth/check
///
/// Never errors - an unreadable or absent session is simply unauthenticated.
async fn check(OptionalAdmin(admin): OptionalAdmin) -> Json<AuthCheckResponse> {
    Json(AuthCheckResponse {
        authenticated: admin.is_some(),
        admin,
    })
}
