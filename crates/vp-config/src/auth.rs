//! Session and credential-directory configuration.

use serde::{Deserialize, Serialize};

fn default_passphrase() -> String {
    // Shared demo passphrase; a production directory verifies per-identity
    // salted credentials behind the same interface.
    "password".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Override for the persisted session record path.
    /// Empty = default `~/.veriport/session.json`.
    #[serde(default)]
    pub session_file: String,

    /// Passphrase the demo directory accepts for every account.
    #[serde(default = "default_passphrase")]
    pub passphrase: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_file: String::new(),
            passphrase: default_passphrase(),
        }
    }
}

impl AuthConfig {
    /// The session file override, if one is configured.
    #[must_use]
    pub fn session_file_override(&self) -> Option<&str> {
        if self.session_file.is_empty() {
            None
        } else {
            Some(&self.session_file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_demo_passphrase() {
        let config = AuthConfig::default();
        assert_eq!(config.passphrase, "password");
        assert!(config.session_file_override().is_none());
    }

    #[test]
    fn non_empty_session_file_is_an_override() {
        let config = AuthConfig {
            session_file: "/tmp/session.json".into(),
            ..AuthConfig::default()
        };
        assert_eq!(config.session_file_override(), Some("/tmp/session.json"));
    }
}
