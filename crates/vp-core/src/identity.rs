use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// An authenticated portal user, as issued by the credential directory.
///
/// Produced by `vp-auth`, consumed by `vp-router` and `vp-cli`. Contains
/// only data fields — no auth logic. A role is fixed at issue time; the
/// session manager replaces identities wholesale and never edits one.
///
/// This struct is also the persisted session layout: a single flat JSON
/// record, no version field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Identity {
    /// Opaque unique identifier.
    pub id: String,
    /// Unique lookup key. Matched exactly — case-sensitive, no trimming.
    pub email: String,
    /// Human-readable name.
    pub display_name: String,
    /// Closed role set; drives dashboard routing.
    pub role: Role,
    /// The organization this identity represents. `None` for individual
    /// roles (admin, student, recruiter).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn student() -> Identity {
        Identity {
            id: "2".into(),
            email: "student@example.com".into(),
            display_name: "John Smith".into(),
            role: Role::Student,
            organization: None,
        }
    }

    #[test]
    fn serde_round_trip_preserves_all_fields() {
        let identity = Identity {
            id: "3".into(),
            email: "institution@example.com".into(),
            display_name: "University Admin".into(),
            role: Role::Institution,
            organization: Some("Harvard University".into()),
        };
        let json = serde_json::to_string(&identity).expect("serialize");
        let back: Identity = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, identity);
    }

    #[test]
    fn missing_organization_deserializes_as_none() {
        let json = r#"{"id":"2","email":"student@example.com","display_name":"John Smith","role":"student"}"#;
        let identity: Identity = serde_json::from_str(json).expect("deserialize");
        assert_eq!(identity, student());
    }

    #[test]
    fn organization_omitted_from_json_when_absent() {
        let json = serde_json::to_string(&student()).expect("serialize");
        assert!(!json.contains("organization"));
    }

    #[test]
    fn unknown_role_fails_deserialization() {
        let json = r#"{"id":"9","email":"x@example.com","display_name":"X","role":"superuser"}"#;
        assert!(serde_json::from_str::<Identity>(json).is_err());
    }
}
