use serde::Serialize;
use vp_config::PortalConfig;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    route: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    organization: Option<String>,
    session_file: String,
}

pub async fn handle(flags: &GlobalFlags, config: &PortalConfig) -> anyhow::Result<()> {
    let manager = super::super::open_session(flags, config).await?;
    let identity = manager.current_identity();
    let route = vp_router::resolve(&manager.state()).to_string();

    let response = match identity {
        Some(identity) => AuthStatusResponse {
            authenticated: true,
            route,
            email: Some(identity.email),
            display_name: Some(identity.display_name),
            role: Some(identity.role.to_string()),
            organization: identity.organization,
            session_file: manager_session_path(flags, config),
        },
        None => AuthStatusResponse {
            authenticated: false,
            route,
            email: None,
            display_name: None,
            role: None,
            organization: None,
            session_file: manager_session_path(flags, config),
        },
    };

    output(&response, flags.format)
}

fn manager_session_path(flags: &GlobalFlags, config: &PortalConfig) -> String {
    flags
        .session_file
        .clone()
        .or_else(|| config.auth.session_file_override().map(str::to_string))
        .unwrap_or_else(|| String::from("~/.veriport/session.json"))
}
