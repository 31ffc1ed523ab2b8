//! Integration tests for the content CRUD API.
//!
//! These tests require:
//! - A running `PostgreSQL` database (migrated)
//! - The site server running (cargo run -p logiflow-site)
//! - `ADMIN_EMAIL` / `ADMIN_PASSWORD` matching the seeded admin
//!
//! Run with: cargo test -p logiflow-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};

use logiflow_integration_tests::{authenticated_client, site_base_url};

/// Create a value via the API and return its JSON.
async fn create_value(client: &reqwest::Client, title: &str, order: i32) -> Value {
    let resp = client
        .post(format!("{}/api/values", site_base_url()))
        .json(&json!({
            "title": title,
            "description": "integration test value",
            "icon": "fas fa-vial",
            "order": order,
        }))
        .send()
        .await
        .expect("Failed to create value");

    assert_eq!(resp.status(), StatusCode::CREATED);
    resp.json().await.expect("Failed to parse created value")
}

/// Delete a value by id, returning the response status.
async fn delete_value(client: &reqwest::Client, id: i64) -> StatusCode {
    client
        .delete(format!("{}/api/values/{id}", site_base_url()))
        .send()
        .await
        .expect("Failed to send delete")
        .status()
}

// =============================================================================
// Ordering & create/list
// =============================================================================

#[tokio::test]
#[ignore = "Requires running site server and PostgreSQL"]
async fn test_values_listed_sorted_by_order() {
    let client = authenticated_client().await;
    let base_url = site_base_url();

    // Insert out of order; the list must come back sorted.
    let high = create_value(&client, "zz-high", 90).await;
    let low = create_value(&client, "zz-low", 89).await;

    let values: Vec<Value> = client
        .get(format!("{base_url}/api/values"))
        .send()
        .await
        .expect("Failed to list values")
        .json()
        .await
        .expect("Failed to parse values");

    let orders: Vec<i64> = values
        .iter()
        .map(|v| v["order"].as_i64().expect("order field"))
        .collect();
    let mut sorted = orders.clone();
    sorted.sort_unstable();
    assert_eq!(orders, sorted, "values must be sorted ascending by order");

    // Ties preserve insertion order (ascending ids).
    let tie_a = create_value(&client, "zz-tie-a", 91).await;
    let tie_b = create_value(&client, "zz-tie-b", 91).await;
    let values: Vec<Value> = client
        .get(format!("{base_url}/api/values"))
        .send()
        .await
        .expect("Failed to list values")
        .json()
        .await
        .expect("Failed to parse values");
    let pos_a = values
        .iter()
        .position(|v| v["id"] == tie_a["id"])
        .expect("first tied value listed");
    let pos_b = values
        .iter()
        .position(|v| v["id"] == tie_b["id"])
        .expect("second tied value listed");
    assert!(pos_a < pos_b, "ties must preserve insertion order");

    for v in [&high, &low, &tie_a, &tie_b] {
        delete_value(&client, v["id"].as_i64().expect("id")).await;
    }
}

#[tokio::test]
#[ignore = "Requires running site server and PostgreSQL"]
async fn test_create_then_list_contains_new_entity() {
    let client = authenticated_client().await;
    let base_url = site_base_url();

    let before: Vec<Value> = client
        .get(format!("{base_url}/api/values"))
        .send()
        .await
        .expect("Failed to list")
        .json()
        .await
        .expect("Failed to parse");

    let created = create_value(&client, "zz-created", 50).await;
    let id = created["id"].as_i64().expect("assigned id");

    // Fresh identity, no collision with anything that already existed.
    assert!(before.iter().all(|v| v["id"].as_i64() != Some(id)));

    let after: Vec<Value> = client
        .get(format!("{base_url}/api/values"))
        .send()
        .await
        .expect("Failed to list")
        .json()
        .await
        .expect("Failed to parse");
    assert!(after.iter().any(|v| v["id"].as_i64() == Some(id)));

    delete_value(&client, id).await;
}

// =============================================================================
// Delete idempotence
// =============================================================================

#[tokio::test]
#[ignore = "Requires running site server and PostgreSQL"]
async fn test_delete_twice_then_not_found() {
    let client = authenticated_client().await;

    let created = create_value(&client, "zz-doomed", 60).await;
    let id = created["id"].as_i64().expect("id");

    assert_eq!(delete_value(&client, id).await, StatusCode::NO_CONTENT);
    assert_eq!(delete_value(&client, id).await, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running site server and PostgreSQL"]
async fn test_delete_unknown_id_leaves_list_alone() {
    let client = authenticated_client().await;
    let base_url = site_base_url();

    let before: Vec<Value> = client
        .get(format!("{base_url}/api/values"))
        .send()
        .await
        .expect("Failed to list")
        .json()
        .await
        .expect("Failed to parse");

    assert_eq!(delete_value(&client, 999_999).await, StatusCode::NOT_FOUND);

    let after: Vec<Value> = client
        .get(format!("{base_url}/api/values"))
        .send()
        .await
        .expect("Failed to list")
        .json()
        .await
        .expect("Failed to parse");
    assert_eq!(before.len(), after.len());
}

// =============================================================================
// Partial updates
// =============================================================================

#[tokio::test]
#[ignore = "Requires running site server and PostgreSQL"]
async fn test_update_with_empty_body_changes_nothing() {
    let client = authenticated_client().await;
    let base_url = site_base_url();

    let created = create_value(&client, "zz-untouched", 70).await;
    let id = created["id"].as_i64().expect("id");

    let updated: Value = client
        .put(format!("{base_url}/api/values/{id}"))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to update")
        .json()
        .await
        .expect("Failed to parse");

    assert_eq!(updated, created);

    delete_value(&client, id).await;
}

#[tokio::test]
#[ignore = "Requires running site server and PostgreSQL"]
async fn test_update_merges_only_supplied_fields() {
    let client = authenticated_client().await;
    let base_url = site_base_url();

    let created = create_value(&client, "zz-before", 71).await;
    let id = created["id"].as_i64().expect("id");

    let updated: Value = client
        .put(format!("{base_url}/api/values/{id}"))
        .json(&json!({ "title": "zz-after" }))
        .send()
        .await
        .expect("Failed to update")
        .json()
        .await
        .expect("Failed to parse");

    assert_eq!(updated["title"], "zz-after");
    assert_eq!(updated["description"], created["description"]);
    assert_eq!(updated["icon"], created["icon"]);
    assert_eq!(updated["order"], created["order"]);

    delete_value(&client, id).await;
}

#[tokio::test]
#[ignore = "Requires running site server and PostgreSQL"]
async fn test_update_unknown_id_is_not_found() {
    let client = authenticated_client().await;

    let resp = client
        .put(format!("{}/api/values/999999", site_base_url()))
        .json(&json!({ "title": "ghost" }))
        .send()
        .await
        .expect("Failed to send update");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Overview singleton
// =============================================================================

#[tokio::test]
#[ignore = "Requires running site server and PostgreSQL"]
async fn test_overview_upsert_keeps_single_row() {
    let client = authenticated_client().await;
    let base_url = site_base_url();

    let first: Value = client
        .put(format!("{base_url}/api/overview"))
        .json(&json!({ "title": "New Title", "description": "New Desc" }))
        .send()
        .await
        .expect("Failed to put overview")
        .json()
        .await
        .expect("Failed to parse overview");
    assert_eq!(first["title"], "New Title");

    let second: Value = client
        .put(format!("{base_url}/api/overview"))
        .json(&json!({ "title": "Second Title", "description": "Second Desc" }))
        .send()
        .await
        .expect("Failed to put overview")
        .json()
        .await
        .expect("Failed to parse overview");

    // Same fixed singleton identity, new payload.
    assert_eq!(second["id"], first["id"]);
    assert_eq!(second["title"], "Second Title");

    let fetched: Value = client
        .get(format!("{base_url}/api/overview"))
        .send()
        .await
        .expect("Failed to get overview")
        .json()
        .await
        .expect("Failed to parse overview");
    assert_eq!(fetched, second);
}

// =============================================================================
// Contact submissions
// =============================================================================

#[tokio::test]
#[ignore = "Requires running site server and PostgreSQL"]
async fn test_contact_submission_round_trip() {
    let base_url = site_base_url();
    let anonymous = logiflow_integration_tests::client();

    // Unique message so the assertion below can find this exact submission.
    let marker = format!("integration-{}", uuid::Uuid::new_v4());

    let resp = anonymous
        .post(format!("{base_url}/api/contact"))
        .json(&json!({
            "firstName": "John",
            "lastName": "Doe",
            "email": "j@x.com",
            "serviceInterest": "tracking",
            "message": marker,
        }))
        .send()
        .await
        .expect("Failed to submit contact form");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = resp.json().await.expect("Failed to parse submission");
    assert!(created["id"].as_i64().is_some());

    // Listing requires an admin session.
    let admin = authenticated_client().await;
    let submissions: Vec<Value> = admin
        .get(format!("{base_url}/api/contact"))
        .send()
        .await
        .expect("Failed to list submissions")
        .json()
        .await
        .expect("Failed to parse submissions");

    let found = submissions
        .iter()
        .find(|s| s["message"] == marker.as_str())
        .expect("submission must appear in the admin list");
    assert_eq!(found, &created);
}

#[tokio::test]
#[ignore = "Requires running site server and PostgreSQL"]
async fn test_contact_submission_validates_input() {
    let resp = logiflow_integration_tests::client()
        .post(format!("{}/api/contact", site_base_url()))
        .json(&json!({
            "firstName": "",
            "lastName": "Doe",
            "email": "j@x.com",
            "serviceInterest": "tracking",
            "message": "hi",
        }))
        .send()
        .await
        .expect("Failed to send contact form");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
