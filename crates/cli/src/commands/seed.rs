//! Content seeding command.

use super::{CommandError, connect};

/// Seed starter content into every empty content table.
///
/// # Errors
///
/// Returns `CommandError` if the database is unreachable or an insert
/// fails.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;

    logiflow_site::seed::seed_content(&pool).await?;

    tracing::info!("Seeding complete!");
    Ok(())
}
