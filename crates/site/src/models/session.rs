//! Session-related types for admin authentication.
//!
//! The session payload is a small fixed struct, not an open-ended map:
//! everything the request pipeline needs to know about a logged-in admin
//! is the id and email below.

use serde::{Deserialize, Serialize};

use logiflow_core::{AdminId, Email};

/// Session-stored admin identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// Admin's database ID.
    pub id: AdminId,
    /// Admin's email address.
    pub email: Email,
}

/// Session keys for admin authentication data.
pub mod keys {
    /// Key for storing the current logged-in admin.
    pub const CURRENT_ADMIN: &str = "current_admin";
}
