//! Durable session persistence.
//!
//! One JSON record at a well-known path, default
//! `~/.veriport/session.json`. The store is a cache of the session
//! manager's state, never a source of truth: it is read once at startup
//! and written/cleared on login/logout.

use std::fs;
use std::path::{Path, PathBuf};

use vp_core::Identity;

use crate::error::AuthError;

const SESSION_DIR_NAME: &str = ".veriport";
const SESSION_FILE_NAME: &str = "session.json";

/// File-backed store for zero-or-one serialized identity record.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Open the store at the default path, or at `override_path` when set
    /// (config override, used by tests and tooling).
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStoreError` if no home directory can be
    /// resolved and no override was given.
    pub fn open(override_path: Option<&str>) -> Result<Self, AuthError> {
        if let Some(path) = override_path {
            return Ok(Self::at_path(PathBuf::from(path)));
        }
        dirs::home_dir()
            .map(|home| Self::at_path(home.join(SESSION_DIR_NAME).join(SESSION_FILE_NAME)))
            .ok_or_else(|| {
                AuthError::SessionStoreError(
                    "home directory not found — cannot persist session".into(),
                )
            })
    }

    #[must_use]
    pub const fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted identity, if any.
    ///
    /// Fail-open: an unreadable file, malformed JSON, or an unknown role
    /// string all become "no session" with a logged warning, never an
    /// error. Startup must always complete in a valid state.
    #[must_use]
    pub fn load(&self) -> Option<Identity> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(identity) => Some(identity),
            Err(error) => {
                tracing::warn!(%error, path = %self.path.display(), "discarding unreadable session record");
                None
            }
        }
    }

    /// Serialize and overwrite the persisted record.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStoreError` if the record cannot be
    /// serialized or written.
    pub fn save(&self, identity: &Identity) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AuthError::SessionStoreError(format!("mkdir {}: {e}", parent.display()))
            })?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }

        let raw = serde_json::to_string(identity)
            .map_err(|e| AuthError::SessionStoreError(format!("serialize session: {e}")))?;
        fs::write(&self.path, raw)
            .map_err(|e| AuthError::SessionStoreError(format!("write {}: {e}", self.path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                AuthError::SessionStoreError(format!("chmod {}: {e}", self.path.display()))
            })?;
        }

        Ok(())
    }

    /// Remove the persisted record. Absent file is not an error.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStoreError` if an existing record cannot
    /// be removed.
    pub fn clear(&self) -> Result<(), AuthError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| {
                AuthError::SessionStoreError(format!(
                    "failed to delete {}: {e}",
                    self.path.display()
                ))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vp_core::Role;

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

    fn store_in(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::at_path(dir.path().join("session.json"))
    }

    #[test]
    fn save_then_load_round_trips_all_fields() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = store_in(&tmp);

        let identity = Identity {
            id: "4".into(),
            email: "employer@example.com".into(),
            display_name: "HR Manager".into(),
            role: Role::Employer,
            organization: Some("Tech Corp Inc.".into()),
        };
        store.save(&identity).expect("save");
        assert_eq!(store.load(), Some(identity));
    }

    #[test]
    fn load_missing_file_is_absent() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        assert!(store_in(&tmp).load().is_none());
    }

    #[test]
    fn load_corrupted_record_fails_open() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = store_in(&tmp);
        fs::write(store.path(), "{not json").expect("write");
        assert!(store.load().is_none());
    }

    #[test]
    fn load_unknown_role_fails_open() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = store_in(&tmp);
        fs::write(
            store.path(),
            r#"{"id":"9","email":"x@example.com","display_name":"X","role":"superuser"}"#,
        )
        .expect("write");
        assert!(store.load().is_none());
    }

    #[test]
    fn save_overwrites_previous_record() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = store_in(&tmp);

        store.save(&student()).expect("save student");
        let admin = Identity {
            id: "1".into(),
            email: "priyankalochan27@gmail.com".into(),
            display_name: "Priyanka Lochan".into(),
            role: Role::Admin,
            organization: None,
        };
        store.save(&admin).expect("save admin");
        assert_eq!(store.load(), Some(admin));
    }

    #[test]
    fn clear_removes_record_and_is_idempotent() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = store_in(&tmp);

        store.save(&student()).expect("save");
        store.clear().expect("first clear");
        assert!(store.load().is_none());
        store.clear().expect("second clear");
    }

    #[cfg(unix)]
    #[test]
    fn saved_record_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = store_in(&tmp);
        store.save(&student()).expect("save");

        let mode = fs::metadata(store.path())
            .expect("metadata")
            .permissions()
            .mode()
            & 0o777;
        assert_eq!(mode, 0o600, "session record should be 0600");
    }
}
