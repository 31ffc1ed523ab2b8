//! HTTP route handlers for the site API.
//!
//! # Route Structure
//!
//! ```text
//! # Auth
//! POST /api/login              - Login, sets session cookie
//! POST /api/logout             - Logout, destroys session
//! GET  /api/auth/check         - Session status (never errors)
//!
//! # Content (read: public, write: admin)
//! GET  /api/overview           - Overview singleton (or null)
//! PUT  /api/overview           - Upsert overview singleton
//! GET  /api/values             - List values (ordered)
//! POST /api/values             - Create value
//! PUT  /api/values/{id}        - Partial update
//! DELETE /api/values/{id}      - Delete
//! GET/POST /api/services, PUT/DELETE /api/services/{id}
//! GET/POST /api/team,     PUT/DELETE /api/team/{id}
//!
//! # Contact
//! POST /api/contact            - Submit contact form (public)
//! GET  /api/contact            - List submissions (admin)
//! ```

pub mod auth;
pub mod contact;
pub mod overview;
pub mod services;
pub mod team;
pub mod values;

use axum::Router;

use crate::state::AppState;

/// Build the complete API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(overview::router())
        .merge(values::router())
        .merge(services::router())
        .merge(team::router())
        .merge(contact::router())
}
