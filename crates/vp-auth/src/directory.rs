//! Credential resolution and verification.
//!
//! `CredentialStore` is the production swap point: the portal core only
//! ever asks "who is this email" and "does this secret check out". The
//! bundled `DemoDirectory` answers from a fixed table with one shared
//! passphrase; a real deployment implements the same trait against an
//! identity service with per-identity salted credentials.

use vp_core::{Identity, Role};

/// Lookup/verification authority for email+secret pairs.
///
/// Pure lookup: implementations must have no side effects. Lookups are
/// exact-match — case-sensitive, no trimming.
#[allow(async_fn_in_trait)]
pub trait CredentialStore {
    /// Resolve an email to its identity, if one exists.
    async fn find_by_email(&self, email: &str) -> Option<Identity>;

    /// True only if an identity exists for `email` AND `secret` is valid
    /// for it. Callers get no signal distinguishing "unknown email" from
    /// "wrong secret".
    async fn verify(&self, email: &str, secret: &str) -> bool;
}

/// Fixed in-memory directory covering every portal role.
///
/// Stand-in for a real identity provider; the records and shared
/// passphrase exist to exercise the session layer, not to ship.
#[derive(Debug, Clone)]
pub struct DemoDirectory {
    passphrase: String,
    records: Vec<Identity>,
}

impl DemoDirectory {
    #[must_use]
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: passphrase.into(),
            records: seed_records(),
        }
    }

    /// The demo accounts, for the sign-in screen's account panel.
    #[must_use]
    pub fn accounts(&self) -> &[Identity] {
        &self.records
    }
}

impl Default for DemoDirectory {
    fn default() -> Self {
        Self::new("password")
    }
}

impl CredentialStore for DemoDirectory {
    async fn find_by_email(&self, email: &str) -> Option<Identity> {
        self.records.iter().find(|r| r.email == email).cloned()
    }

    async fn verify(&self, email: &str, secret: &str) -> bool {
        self.records.iter().any(|r| r.email == email) && secret == self.passphrase
    }
}

fn seed_records() -> Vec<Identity> {
    vec![
        Identity {
            id: "1".into(),
            email: "priyankalochan27@gmail.com".into(),
            display_name: "Priyanka Lochan".into(),
            role: Role::Admin,
            organization: None,
        },
        Identity {
            id: "2".into(),
            email: "student@example.com".into(),
            display_name: "John Smith".into(),
            role: Role::Student,
            organization: None,
        },
        Identity {
            id: "3".into(),
            email: "institution@example.com".into(),
            display_name: "University Admin".into(),
            role: Role::Institution,
            organization: Some("Harvard University".into()),
        },
        Identity {
            id: "4".into(),
            email: "employer@example.com".into(),
            display_name: "HR Manager".into(),
            role: Role::Employer,
            organization: Some("Tech Corp Inc.".into()),
        },
    ]
}
