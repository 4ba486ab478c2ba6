//! appctl - local profile management
//!
//! # Examples
//!
//! ```bash
//! # Record a login
//! appctl login --user-id u-1 --user-name alice --token <token>
//!
//! # Pick the app commands target by default
//! appctl default-app set acme/myapp
//!
//! # Who is logged in, and against which endpoint
//! appctl whoami --pretty
//! ```

use appctl_cli::{Cli, CliError, CliResult, Session, logger};
use appctl_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if let Some(hint) = e.recovery_hint() {
                eprintln!();
                eprintln!("{hint}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let config = Config::load()?;

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        config.logging.level.into()
    };
    logger::initialize(level, config.logging.colored)?;

    config.validate()?;
    config.log_summary();

    let mut session = Session::from_config(&config);
    let value = session.execute(cli.command).await?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    println!("{}", output.map_err(CliError::from)?);

    Ok(())
}
