use serde::Serialize;
use vp_auth::DemoDirectory;
use vp_config::PortalConfig;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct DemoAccountRow {
    role: String,
    email: String,
    display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    organization: Option<String>,
    password: String,
}

/// The sign-in screen's demo-account panel, as data.
pub fn handle(flags: &GlobalFlags, config: &PortalConfig) -> anyhow::Result<()> {
    let directory = DemoDirectory::new(config.auth.passphrase.clone());
    let rows = directory
        .accounts()
        .iter()
        .map(|record| DemoAccountRow {
            role: record.role.to_string(),
            email: record.email.clone(),
            display_name: record.display_name.clone(),
            organization: record.organization.clone(),
            password: config.auth.passphrase.clone(),
        })
        .collect::<Vec<_>>();

    output(&rows, flags.format)
}
