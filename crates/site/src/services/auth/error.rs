//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format in the login payload.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] logiflow_core::EmailError),

    /// Invalid credentials (wrong password or no such admin - the two are
    /// indistinguishable on purpose).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}
