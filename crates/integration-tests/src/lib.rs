//! Shared helpers for LogiFlow integration tests.
//!
//! Live tests talk to a running site server over HTTP. They are
//! `#[ignore]`d by default and expect:
//! - a running `PostgreSQL` database (migrated and seeded)
//! - the site server (`cargo run -p logiflow-site`)
//! - `ADMIN_EMAIL` / `ADMIN_PASSWORD` matching the seeded admin
//!
//! Run with: `cargo test -p logiflow-integration-tests -- --ignored`

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::missing_panics_doc)]

use reqwest::Client;
use serde_json::json;

/// Base URL for the site API (configurable via environment).
#[must_use]
pub fn site_base_url() -> String {
    std::env::var("SITE_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned())
}

/// Create an anonymous HTTP client with a cookie store.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// Create a client and log it in with the seeded admin credentials.
///
/// # Panics
///
/// Panics if the login request fails - every caller needs the session.
pub async fn authenticated_client() -> Client {
    let client = client();
    let base_url = site_base_url();

    let email = std::env::var("ADMIN_EMAIL").expect("ADMIN_EMAIL must be set for live tests");
    let password =
        std::env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set for live tests");

    let resp = client
        .post(format!("{base_url}/api/login"))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("Failed to send login request");
    assert!(resp.status().is_success(), "admin login failed");

    client
}
