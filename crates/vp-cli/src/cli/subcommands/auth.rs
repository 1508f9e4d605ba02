use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Sign in with an email and password.
    Login(AuthLoginArgs),
    /// Clear the current session.
    Logout,
    /// Show the current session and its route.
    Status,
    /// List the demo directory accounts.
    Accounts,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Account email (matched exactly, case-sensitive).
    #[arg(long)]
    pub email: String,
    /// Account password.
    #[arg(long)]
    pub password: String,
}
