use clap::Subcommand;

#[derive(Subcommand)]
pub enum EnvCommands {
    /// List configured environments
    List,
}
