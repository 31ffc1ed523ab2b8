//! Database migration command.
//!
//! Applies the embedded schema migrations and creates the session table.
//! Both steps are idempotent; the server also runs them at startup, so this
//! command exists for provisioning a database ahead of a deploy.

use super::{CommandError, connect};

/// Run all migrations.
///
/// # Errors
///
/// Returns `CommandError` if the database is unreachable or a migration
/// fails.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;

    tracing::info!("Running schema migrations...");
    logiflow_site::db::MIGRATOR.run(&pool).await?;

    tracing::info!("Creating session table...");
    logiflow_site::middleware::create_session_store(&pool)
        .migrate()
        .await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
