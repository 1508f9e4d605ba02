//! General portal configuration.

use serde::{Deserialize, Serialize};

const fn default_demo_hint() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Show the demo-account hint after a failed login.
    #[serde(default = "default_demo_hint")]
    pub demo_hint: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            demo_hint: default_demo_hint(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_hint_defaults_on() {
        assert!(GeneralConfig::default().demo_hint);
    }
}
