use clap::Subcommand;

use super::subcommands::AuthCommands;

/// Top-level commands for the `vpt` binary.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Session and credential commands.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Render the dashboard for the signed-in role.
    Dashboard,
}
