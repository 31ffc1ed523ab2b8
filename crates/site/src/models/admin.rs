//! Admin account domain type.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use logiflow_core::{AdminId, Email};

/// An admin account that can edit site content.
///
/// Never serialized to the wire; responses expose at most
/// [`super::CurrentAdmin`].
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    /// Unique admin ID.
    pub id: AdminId,
    /// Login email, globally unique.
    pub email: Email,
    /// Argon2id hash of the password, PHC string format.
    pub password_hash: String,
    /// When the admin was created.
    pub created_at: DateTime<Utc>,
    /// When the admin was last updated.
    pub updated_at: DateTime<Utc>,
}
