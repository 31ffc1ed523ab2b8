//! Authentication service.
//!
//! Password verification for admin accounts, plus the startup seeding of
//! the first admin.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;

use logiflow_core::Email;

use crate::db::{AdminRepository, RepositoryError};
use crate::models::Admin;

/// Authentication service over the admins table.
pub struct AuthService<'a> {
    admins: AdminRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            admins: AdminRepository::new(pool),
        }
    }

    /// Verify an email/password pair and return the matching admin.
    ///
    /// Read-only. An unknown email and a wrong password fail identically:
    /// both collapse to [`AuthError::InvalidCredentials`], so the response
    /// never reveals whether the account exists.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email is malformed,
    /// `AuthError::InvalidCredentials` if verification fails.
    pub async fn login_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Admin, AuthError> {
        let email = Email::parse(email)?;

        let admin = self
            .admins
            .get_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &admin.password_hash)?;

        Ok(admin)
    }

    /// Seed the configured admin account if none exists yet.
    ///
    /// Idempotent: an existing account (including one created by a
    /// concurrent process between our lookup and insert) is left untouched.
    /// Returns the created admin, or `None` if one was already present.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the database is unreachable -
    /// callers at startup treat this as fatal, since a deployment that
    /// cannot seed has no admin access at all.
    pub async fn ensure_seed_admin(
        &self,
        email: &Email,
        password: &SecretString,
    ) -> Result<Option<Admin>, AuthError> {
        if self.admins.get_by_email(email).await?.is_some() {
            return Ok(None);
        }

        let password_hash = hash_password(password.expose_secret())?;

        match self.admins.create(email, &password_hash).await {
            Ok(admin) => Ok(Some(admin)),
            // Lost a seeding race to another process; the account exists.
            Err(RepositoryError::Conflict(_)) => Ok(None),
            Err(other) => Err(AuthError::Repository(other)),
        }
    }
}

/// Hash a password using Argon2id.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored PHC-format hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_verify_round_trip() {
        let hash = hash_password("trailer-routes-2024").unwrap();
        assert!(verify_password("trailer-routes-2024", &hash).is_ok());
    }

    #[test]
    fn test_wrong_password_rejected() {
        let hash = hash_password("correct horse").unwrap();
        assert!(matches!(
            verify_password("wrong horse", &hash),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("same input").unwrap();
        let b = hash_password("same input").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_garbage_hash_fails_closed() {
        assert!(matches!(
            verify_password("anything", "not-a-phc-hash"),
            Err(AuthError::InvalidCredentials)
        ));
    }
}
