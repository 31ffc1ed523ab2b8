//! Content entities for the marketing site.
//!
//! Each entity has three shapes: the stored row (`Value`), the validated
//! creation input (`NewValue`), and the partial update (`ValueChanges`).
//! Creation inputs own required fields; change sets wrap every field in
//! `Option` so that only supplied fields are merged.

use logiflow_core::{ContactSubmissionId, Email, ServiceId, TeamMemberId, ValueId};
use serde::{Deserialize, Deserializer, Serialize};

use super::validation::{ValidationError, optional, require, require_if_present};

/// Fixed identity of the overview singleton row.
pub const OVERVIEW_ID: i32 = 1;

/// Deserialize a field that distinguishes "absent" from "explicitly null".
///
/// Missing field -> `None` (leave unchanged); `null` -> `Some(None)` (clear);
/// value -> `Some(Some(v))`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

// =============================================================================
// Overview (singleton)
// =============================================================================

/// The company overview block shown at the top of the site.
///
/// Exactly one row exists, with id fixed at [`OVERVIEW_ID`].
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub id: i32,
    pub title: String,
    pub description: String,
}

/// Input for upserting the overview singleton.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOverview {
    pub title: String,
    pub description: String,
}

impl NewOverview {
    /// Validate and clean the input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a required field is blank.
    pub fn validate(self) -> Result<Self, ValidationError> {
        Ok(Self {
            title: require("title", self.title)?,
            description: require("description", self.description)?,
        })
    }
}

// =============================================================================
// Values
// =============================================================================

/// A company value displayed in the "our values" section.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Value {
    pub id: ValueId,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub order: i32,
}

/// Input for creating a company value.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewValue {
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub order: i32,
}

impl NewValue {
    /// Validate and clean the input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a required field is blank.
    pub fn validate(self) -> Result<Self, ValidationError> {
        Ok(Self {
            title: require("title", self.title)?,
            description: require("description", self.description)?,
            icon: require("icon", self.icon)?,
            order: self.order,
        })
    }
}

/// Partial update for a company value. Only supplied fields are merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub order: Option<i32>,
}

impl ValueChanges {
    /// Validate the supplied fields.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a supplied required field is blank.
    pub fn validate(self) -> Result<Self, ValidationError> {
        Ok(Self {
            title: require_if_present("title", self.title)?,
            description: require_if_present("description", self.description)?,
            icon: require_if_present("icon", self.icon)?,
            order: self.order,
        })
    }
}

// =============================================================================
// Services
// =============================================================================

/// A service offering (trailer transport, fleet IT, tracking, ...).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: ServiceId,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub icon: String,
    pub order: i32,
}

/// Input for creating a service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewService {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub icon: String,
    #[serde(default)]
    pub order: i32,
}

impl NewService {
    /// Validate and clean the input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a required field is blank.
    pub fn validate(self) -> Result<Self, ValidationError> {
        Ok(Self {
            title: require("title", self.title)?,
            description: require("description", self.description)?,
            image_url: optional(self.image_url),
            icon: require("icon", self.icon)?,
            order: self.order,
        })
    }
}

/// Partial update for a service.
///
/// `image_url` uses the absent/null/value triple: omitting the field keeps
/// the current image, `null` clears it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,
    pub icon: Option<String>,
    pub order: Option<i32>,
}

impl ServiceChanges {
    /// Validate the supplied fields.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a supplied required field is blank.
    pub fn validate(self) -> Result<Self, ValidationError> {
        Ok(Self {
            title: require_if_present("title", self.title)?,
            description: require_if_present("description", self.description)?,
            image_url: self.image_url.map(optional),
            icon: require_if_present("icon", self.icon)?,
            order: self.order,
        })
    }
}

// =============================================================================
// Team members
// =============================================================================

/// A team member shown in the "meet the team" section.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: TeamMemberId,
    pub name: String,
    pub role: String,
    pub description: String,
    pub image_url: Option<String>,
    pub order: i32,
}

/// Input for creating a team member.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeamMember {
    pub name: String,
    pub role: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub order: i32,
}

impl NewTeamMember {
    /// Validate and clean the input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a required field is blank.
    pub fn validate(self) -> Result<Self, ValidationError> {
        Ok(Self {
            name: require("name", self.name)?,
            role: require("role", self.role)?,
            description: require("description", self.description)?,
            image_url: optional(self.image_url),
            order: self.order,
        })
    }
}

/// Partial update for a team member.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberChanges {
    pub name: Option<String>,
    pub role: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,
    pub order: Option<i32>,
}

impl TeamMemberChanges {
    /// Validate the supplied fields.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a supplied required field is blank.
    pub fn validate(self) -> Result<Self, ValidationError> {
        Ok(Self {
            name: require_if_present("name", self.name)?,
            role: require_if_present("role", self.role)?,
            description: require_if_present("description", self.description)?,
            image_url: self.image_url.map(optional),
            order: self.order,
        })
    }
}

// =============================================================================
// Contact submissions
// =============================================================================

/// A contact form submission. Append-only; never updated or deleted.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: ContactSubmissionId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: Option<String>,
    pub service_interest: String,
    pub message: String,
}

/// Input for submitting the contact form (public, unauthenticated).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    pub service_interest: String,
    pub message: String,
}

impl NewContactSubmission {
    /// Validate and clean the input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a required field is blank or the email
    /// address is malformed.
    pub fn validate(self) -> Result<Self, ValidationError> {
        let email = Email::parse(require("email", self.email)?.as_str())?;

        Ok(Self {
            first_name: require("firstName", self.first_name)?,
            last_name: require("lastName", self.last_name)?,
            email: email.into_inner(),
            company: optional(self.company),
            service_interest: require("serviceInterest", self.service_interest)?,
            message: require("message", self.message)?,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_value_defaults_order() {
        let value: NewValue =
            serde_json::from_str(r#"{"title":"Safe","description":"d","icon":"fas fa-shield-alt"}"#)
                .unwrap();
        assert_eq!(value.order, 0);
    }

    #[test]
    fn test_new_value_rejects_blank_title() {
        let value = NewValue {
            title: "   ".into(),
            description: "d".into(),
            icon: "i".into(),
            order: 1,
        };
        assert!(matches!(
            value.validate(),
            Err(ValidationError::Required("title"))
        ));
    }

    #[test]
    fn test_changes_accept_empty_body() {
        let changes: ValueChanges = serde_json::from_str("{}").unwrap();
        let changes = changes.validate().unwrap();
        assert!(changes.title.is_none());
        assert!(changes.order.is_none());
    }

    #[test]
    fn test_changes_reject_blank_supplied_field() {
        let changes: ValueChanges = serde_json::from_str(r#"{"title":""}"#).unwrap();
        assert!(changes.validate().is_err());
    }

    #[test]
    fn test_service_image_url_absent_vs_null() {
        let absent: ServiceChanges = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.image_url, None);

        let cleared: ServiceChanges = serde_json::from_str(r#"{"imageUrl":null}"#).unwrap();
        assert_eq!(cleared.image_url, Some(None));

        let replaced: ServiceChanges =
            serde_json::from_str(r#"{"imageUrl":"https://img.example/truck.jpg"}"#).unwrap();
        assert_eq!(
            replaced.image_url,
            Some(Some("https://img.example/truck.jpg".into()))
        );
    }

    #[test]
    fn test_contact_submission_requires_valid_email() {
        let submission = NewContactSubmission {
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "not-an-email".into(),
            company: None,
            service_interest: "tracking".into(),
            message: "hi".into(),
        };
        assert!(matches!(
            submission.validate(),
            Err(ValidationError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_contact_submission_wire_shape() {
        let submission: NewContactSubmission = serde_json::from_str(
            r#"{"firstName":"John","lastName":"Doe","email":"j@x.com","serviceInterest":"tracking","message":"hi"}"#,
        )
        .unwrap();
        let submission = submission.validate().unwrap();
        assert_eq!(submission.first_name, "John");
        assert_eq!(submission.company, None);
    }

    #[test]
    fn test_team_member_serializes_camel_case() {
        let member = TeamMember {
            id: TeamMemberId::new(1),
            name: "Michael Rodriguez".into(),
            role: "Co-founder".into(),
            description: "15+ years in European logistics".into(),
            image_url: None,
            order: 1,
        };
        let json = serde_json::to_value(&member).unwrap();
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("image_url").is_none());
    }
}
