//! Database operations for the LogiFlow site.
//!
//! ## Tables
//!
//! - `overview` - singleton overview block (id fixed at 1)
//! - `"values"` - company values
//! - `services` - service offerings
//! - `team_members` - team section entries
//! - `contact_submissions` - contact form submissions (append-only)
//! - `admins` - admin accounts (unique email)
//! - `sessions` - session storage, owned by tower-sessions-sqlx-store
//!
//! # Migrations
//!
//! Schema migrations live in `crates/site/migrations/` and are embedded via
//! [`MIGRATOR`]. They run at server startup and via:
//! ```bash
//! cargo run -p logiflow-cli -- migrate
//! ```

pub mod admins;
pub mod contact;
pub mod overview;
pub mod services;
pub mod team;
pub mod values;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use admins::AdminRepository;
pub use contact::ContactSubmissionRepository;
pub use overview::OverviewRepository;
pub use services::ServiceRepository;
pub use team::TeamMemberRepository;
pub use values::ValueRepository;

/// Embedded schema migrations (`crates/site/migrations/`).
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
