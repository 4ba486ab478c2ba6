use clap::Subcommand;

#[derive(Subcommand)]
pub enum DefaultAppCommands {
    /// Set the app commands target by default
    Set {
        /// App in <owner>/<app> form
        app: String,
    },
    /// Clear the default app
    Clear,
    /// Show the default app
    Show,
}
