//! Business-logic services for the site.

pub mod auth;

pub use auth::{AuthError, AuthService};
