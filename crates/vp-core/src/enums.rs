//! Role and dashboard enums for Veriport.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! The role set is closed: adding a role is a compile-time-visible change
//! that forces every match over `Role` to be revisited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Role of a portal identity, fixed when the credential directory issues it.
///
/// ```text
/// admin       → admin dashboard
/// student     → student dashboard
/// institution → institution dashboard
/// employer    → employer dashboard
/// recruiter   → employer dashboard (alias)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Student,
    Institution,
    Employer,
    Recruiter,
}

impl Role {
    /// The dashboard this role lands on after sign-in.
    ///
    /// One-to-one except for recruiters, who share the employer experience.
    #[must_use]
    pub const fn dashboard(self) -> Dashboard {
        match self {
            Self::Admin => Dashboard::Admin,
            Self::Student => Dashboard::Student,
            Self::Institution => Dashboard::Institution,
            Self::Employer | Self::Recruiter => Dashboard::Employer,
        }
    }

    /// Whether identities of this role carry an organization name.
    #[must_use]
    pub const fn is_organizational(self) -> bool {
        matches!(self, Self::Institution | Self::Employer)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Student => "student",
            Self::Institution => "institution",
            Self::Employer => "employer",
            Self::Recruiter => "recruiter",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// A role-specific portal view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Dashboard {
    Admin,
    Student,
    Institution,
    Employer,
}

impl Dashboard {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Student => "student",
            Self::Institution => "institution",
            Self::Employer => "employer",
        }
    }

    /// Human-readable view title, as shown in the dashboard header.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Admin => "Admin Dashboard",
            Self::Student => "My Certificates",
            Self::Institution => "Institution Dashboard",
            Self::Employer => "Verification Center",
        }
    }
}

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Role::Admin, Dashboard::Admin)]
    #[case(Role::Student, Dashboard::Student)]
    #[case(Role::Institution, Dashboard::Institution)]
    #[case(Role::Employer, Dashboard::Employer)]
    #[case(Role::Recruiter, Dashboard::Employer)]
    fn dashboard_mapping_is_fixed(#[case] role: Role, #[case] expected: Dashboard) {
        assert_eq!(role.dashboard(), expected);
    }

    #[test]
    fn roles_serialize_snake_case() {
        let json = serde_json::to_string(&Role::Institution).expect("serialize");
        assert_eq!(json, "\"institution\"");
        let back: Role = serde_json::from_str("\"recruiter\"").expect("deserialize");
        assert_eq!(back, Role::Recruiter);
    }

    #[test]
    fn only_institution_and_employer_are_organizational() {
        assert!(Role::Institution.is_organizational());
        assert!(Role::Employer.is_organizational());
        assert!(!Role::Admin.is_organizational());
        assert!(!Role::Student.is_organizational());
        assert!(!Role::Recruiter.is_organizational());
    }

    #[test]
    fn display_matches_as_str() {
        for role in [
            Role::Admin,
            Role::Student,
            Role::Institution,
            Role::Employer,
            Role::Recruiter,
        ] {
            assert_eq!(role.to_string(), role.as_str());
        }
    }
}
