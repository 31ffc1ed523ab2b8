//! Wire-shape and validation tests that run without a server.
//!
//! These pin the JSON contract the web client depends on: camelCase field
//! names, the auth-check shape, and the boundary validation rules.

use serde_json::json;

use logiflow_core::{AdminId, Email, ServiceId};
use logiflow_site::models::content::{
    NewContactSubmission, NewService, NewTeamMember, Service, ServiceChanges, TeamMemberChanges,
};
use logiflow_site::models::{CurrentAdmin, ValidationError};
use logiflow_site::routes::auth::AuthCheckResponse;

// =============================================================================
// Wire shapes
// =============================================================================

#[test]
fn test_service_wire_shape_is_camel_case() {
    let service = Service {
        id: ServiceId::new(3),
        title: "Tracking Services".to_owned(),
        description: "Real-time GPS tracking".to_owned(),
        image_url: Some("https://img.example/gps.jpg".to_owned()),
        icon: "fas fa-map-marker-alt".to_owned(),
        order: 3,
    };

    let value = serde_json::to_value(&service).expect("serialize");
    assert_eq!(
        value,
        json!({
            "id": 3,
            "title": "Tracking Services",
            "description": "Real-time GPS tracking",
            "imageUrl": "https://img.example/gps.jpg",
            "icon": "fas fa-map-marker-alt",
            "order": 3,
        })
    );
}

#[test]
fn test_auth_check_omits_admin_when_unauthenticated() {
    let unauthenticated = AuthCheckResponse {
        authenticated: false,
        admin: None,
    };
    assert_eq!(
        serde_json::to_value(&unauthenticated).expect("serialize"),
        json!({ "authenticated": false })
    );

    let authenticated = AuthCheckResponse {
        authenticated: true,
        admin: Some(CurrentAdmin {
            id: AdminId::new(1),
            email: Email::parse("ops@logiflow.eu").expect("valid email"),
        }),
    };
    let value = serde_json::to_value(&authenticated).expect("serialize");
    assert_eq!(value["admin"]["id"], 1);
    assert_eq!(value["admin"]["email"], "ops@logiflow.eu");
}

// =============================================================================
// Boundary validation
// =============================================================================

#[test]
fn test_new_service_requires_icon() {
    let service: NewService = serde_json::from_value(json!({
        "title": "Fleet IT",
        "description": "d",
        "icon": "  ",
    }))
    .expect("deserialize");

    assert!(matches!(
        service.validate(),
        Err(ValidationError::Required("icon"))
    ));
}

#[test]
fn test_new_team_member_blank_image_collapses_to_none() {
    let member: NewTeamMember = serde_json::from_value(json!({
        "name": "David Chen",
        "role": "CTO",
        "description": "Technology & Innovation Lead",
        "imageUrl": "   ",
    }))
    .expect("deserialize");

    let member = member.validate().expect("valid");
    assert_eq!(member.image_url, None);
}

#[test]
fn test_contact_submission_optional_company() {
    let submission: NewContactSubmission = serde_json::from_value(json!({
        "firstName": "John",
        "lastName": "Doe",
        "email": "j@x.com",
        "company": "Acme Freight",
        "serviceInterest": "tracking",
        "message": "hi",
    }))
    .expect("deserialize");

    let submission = submission.validate().expect("valid");
    assert_eq!(submission.company.as_deref(), Some("Acme Freight"));
}

#[test]
fn test_changes_distinguish_clear_from_keep() {
    let keep: ServiceChanges = serde_json::from_value(json!({ "title": "t" })).expect("de");
    assert_eq!(keep.image_url, None);

    let clear: ServiceChanges = serde_json::from_value(json!({ "imageUrl": null })).expect("de");
    assert_eq!(clear.image_url, Some(None));

    let set: TeamMemberChanges =
        serde_json::from_value(json!({ "imageUrl": "https://img.example/new.jpg" })).expect("de");
    assert_eq!(
        set.image_url,
        Some(Some("https://img.example/new.jpg".to_owned()))
    );
}

#[test]
fn test_changes_validate_supplied_fields_only() {
    let blank_title: ServiceChanges =
        serde_json::from_value(json!({ "title": "" })).expect("de");
    assert!(blank_title.validate().is_err());

    let untouched: ServiceChanges = serde_json::from_value(json!({})).expect("de");
    assert!(untouched.validate().is_ok());
}
