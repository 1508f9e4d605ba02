//! # vp-config
//!
//! Layered configuration loading for Veriport using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VERIPORT_*` prefix, `__` as separator)
//! 2. Project-level `.veriport/config.toml`
//! 3. User-level `~/.config/veriport/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VERIPORT_AUTH__SESSION_FILE` -> `auth.session_file`,
//! `VERIPORT_GENERAL__DEMO_HINT` -> `general.demo_hint`, etc. The `__`
//! (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use vp_config::PortalConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = PortalConfig::load_with_dotenv().expect("config");
//!
//! // Or without dotenvy (env vars must already be set):
//! let config = PortalConfig::load().expect("config");
//!
//! println!("demo passphrase: {}", config.auth.passphrase);
//! ```

mod auth;
mod error;
mod general;

pub use auth::AuthConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl PortalConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` — use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if extraction fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// This is the typical entry point for the CLI and tests.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or layer additional
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".veriport/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("VERIPORT_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("veriport").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = PortalConfig::default();
        assert_eq!(config.auth.passphrase, "password");
        assert!(config.auth.session_file_override().is_none());
        assert!(config.general.demo_hint);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: PortalConfig = PortalConfig::figment().extract()?;
            assert_eq!(config.auth.passphrase, "password");
            Ok(())
        });
    }

    #[test]
    fn env_overrides_nested_fields() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("VERIPORT_AUTH__PASSPHRASE", "hunter2");
            jail.set_env("VERIPORT_AUTH__SESSION_FILE", "/tmp/vp/session.json");
            let config: PortalConfig = PortalConfig::figment().extract()?;
            assert_eq!(config.auth.passphrase, "hunter2");
            assert_eq!(
                config.auth.session_file_override(),
                Some("/tmp/vp/session.json")
            );
            Ok(())
        });
    }

    #[test]
    fn project_local_toml_is_merged() {
        figment::Jail::expect_with(|jail| {
            jail.create_dir(".veriport")?;
            jail.create_file(
                ".veriport/config.toml",
                r#"
                    [general]
                    demo_hint = false
                "#,
            )?;
            let config: PortalConfig = PortalConfig::figment().extract()?;
            assert!(!config.general.demo_hint);
            Ok(())
        });
    }
}
