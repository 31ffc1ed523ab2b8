//! Session middleware configuration.
//!
//! Sets up `PostgreSQL`-backed sessions using tower-sessions, persisted in
//! the `sessions` table with a one-week expiry.

use sqlx::PgPool;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;

use crate::config::SiteConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "logiflow_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Create the `PostgreSQL` session store.
///
/// The caller is responsible for running `store.migrate()` once at startup
/// and may hand a clone to `ExpiredDeletion::continuously_delete_expired`
/// for the background sweep.
///
/// # Panics
///
/// Panics if the schema or table name is rejected (never happens with the
/// hardcoded "public"/"sessions" values).
#[must_use]
pub fn create_session_store(pool: &PgPool) -> PostgresStore {
    PostgresStore::new(pool.clone())
        .with_schema_name("public")
        .expect("valid schema name")
        .with_table_name("sessions")
        .expect("valid table name")
}

/// Create the session layer over a store.
///
/// Expiry is inactivity-based: the clock resets when the session is
/// written (which only happens at login), never on plain reads.
#[must_use]
pub fn create_session_layer(
    store: PostgresStore,
    config: &SiteConfig,
) -> SessionManagerLayer<PostgresStore> {
    // Determine if we're in production (HTTPS)
    let is_secure = config.base_url.starts_with("https://");

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(is_secure)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
