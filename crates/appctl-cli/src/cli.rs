use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "appctl")]
#[command(about = "Manage the locally logged-in appctl user")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}
