use serde::Serialize;
use vp_config::PortalConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    route: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

pub async fn handle(
    args: &AuthLoginArgs,
    flags: &GlobalFlags,
    config: &PortalConfig,
) -> anyhow::Result<()> {
    let manager = super::super::open_session(flags, config).await?;

    let response = if manager.login(&args.email, &args.password).await? {
        // login just succeeded, so an identity is held
        let identity = manager
            .current_identity()
            .ok_or_else(|| anyhow::anyhow!("session lost between login and read-back"))?;
        AuthLoginResponse {
            authenticated: true,
            email: Some(identity.email),
            display_name: Some(identity.display_name),
            role: Some(identity.role.to_string()),
            organization: identity.organization,
            route: Some(vp_router::resolve(&manager.state()).to_string()),
            message: None,
        }
    } else {
        // Uniform message: unknown email and wrong password are
        // indistinguishable on purpose.
        let mut message = String::from("invalid email or password");
        if config.general.demo_hint {
            message.push_str(" — demo accounts use the passphrase \"password\"");
        }
        AuthLoginResponse {
            authenticated: false,
            email: None,
            display_name: None,
            role: None,
            organization: None,
            route: None,
            message: Some(message),
        }
    };

    output(&response, flags.format)
}
