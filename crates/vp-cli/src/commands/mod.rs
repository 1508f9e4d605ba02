pub mod auth;
pub mod dashboard;

use vp_auth::{DemoDirectory, SessionManager, SessionStore};
use vp_config::PortalConfig;

use crate::cli::GlobalFlags;

/// Build the session manager every command works through: demo directory
/// from config, session store from the flag or config override, persisted
/// session resolved before the handler runs.
pub async fn open_session(
    flags: &GlobalFlags,
    config: &PortalConfig,
) -> anyhow::Result<SessionManager<DemoDirectory>> {
    let override_path = flags
        .session_file
        .as_deref()
        .or_else(|| config.auth.session_file_override());
    let store = SessionStore::open(override_path)?;
    tracing::debug!(path = %store.path().display(), "session store resolved");
    let directory = DemoDirectory::new(config.auth.passphrase.clone());
    Ok(SessionManager::open(directory, store).await)
}
