use crate::{default_app_commands::DefaultAppCommands, env_commands::EnvCommands};

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum Commands {
    /// Record a logged-in user and store their access token
    Login(LoginArgs),

    /// Remove the local profile and its access token
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Default app operations
    DefaultApp {
        #[command(subcommand)]
        action: DefaultAppCommands,
    },

    /// Environment operations
    Env {
        #[command(subcommand)]
        action: EnvCommands,
    },
}

#[derive(Args, Debug, Clone)]
pub struct LoginArgs {
    /// User ID from the identity provider
    #[arg(long)]
    pub user_id: String,
    /// User name (also the token store key)
    #[arg(long)]
    pub user_name: String,
    #[arg(long, default_value = "")]
    pub display_name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    /// Access token to store
    #[arg(long)]
    pub token: String,
    /// Server-side token ID
    #[arg(long)]
    pub token_id: Option<String>,
    /// Environment name (defaults to environment.default from config)
    #[arg(long)]
    pub env: Option<String>,
}
