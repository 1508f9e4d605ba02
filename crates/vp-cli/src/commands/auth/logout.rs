use serde::Serialize;
use vp_config::PortalConfig;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
}

pub async fn handle(flags: &GlobalFlags, config: &PortalConfig) -> anyhow::Result<()> {
    let manager = super::super::open_session(flags, config).await?;
    manager.logout().await?;
    output(&AuthLogoutResponse { cleared: true }, flags.format)
}
