//! appctl-cli library
//!
//! Command definitions and handlers, exported for the binary and for tests.

pub mod cli;
pub mod commands;
pub mod default_app_commands;
pub mod env_commands;
pub(crate) mod error;
pub mod logger;
pub mod session;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use error::{CliError, Result as CliResult};
pub use session::Session;
