//! HTTP middleware for the site.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, outermost)
//! 2. `TraceLayer` (request tracing)
//! 3. Session layer (tower-sessions with `PostgreSQL` store)
//!
//! Authentication is enforced per-handler via the extractors in
//! [`auth`], not as a blanket layer: read routes are public.

pub mod auth;
pub mod session;

pub use auth::{OptionalAdmin, RequireAdmin, clear_current_admin, set_current_admin};
pub use session::{SESSION_COOKIE_NAME, create_session_layer, create_session_store};
