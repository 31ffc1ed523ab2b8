//! Admin account management commands.

use logiflow_core::Email;
use logiflow_site::db::AdminRepository;
use logiflow_site::services::auth::hash_password;

use super::{CommandError, connect};

/// Create a new admin account with a hashed password.
///
/// # Errors
///
/// Returns `CommandError::Invalid` if the email or password is unusable,
/// or if the email is already taken.
pub async fn create_account(email: &str, password: &str) -> Result<(), CommandError> {
    let email =
        Email::parse(email).map_err(|e| CommandError::Invalid(format!("invalid email: {e}")))?;

    if password.trim().is_empty() {
        return Err(CommandError::Invalid(
            "password must not be empty".to_owned(),
        ));
    }

    let password_hash = hash_password(password)
        .map_err(|e| CommandError::Invalid(format!("failed to hash password: {e}")))?;

    let pool = connect().await?;
    let admin = AdminRepository::new(&pool)
        .create(&email, &password_hash)
        .await?;

    tracing::info!(admin_id = %admin.id, email = %admin.email, "admin account created");
    Ok(())
}
