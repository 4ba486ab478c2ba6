use crate::Cli;
use crate::commands::Commands;
use crate::default_app_commands::DefaultAppCommands;

use clap::Parser;

#[test]
fn given_login_flags_when_parsed_then_login_args_populated() {
    let cli = Cli::try_parse_from([
        "appctl",
        "login",
        "--user-id",
        "u-1",
        "--user-name",
        "alice",
        "--token",
        "secret",
        "--env",
        "staging",
    ])
    .unwrap();

    let Commands::Login(args) = cli.command else {
        panic!("expected login command");
    };
    assert_eq!(args.user_id, "u-1");
    assert_eq!(args.user_name, "alice");
    assert_eq!(args.token, "secret");
    assert_eq!(args.env.as_deref(), Some("staging"));
    assert!(args.token_id.is_none());
    assert_eq!(args.display_name, "");
}

#[test]
fn given_login_without_token_when_parsed_then_error() {
    let result = Cli::try_parse_from(["appctl", "login", "--user-id", "u-1", "--user-name", "a"]);

    assert!(result.is_err());
}

#[test]
fn given_global_pretty_after_subcommand_when_parsed_then_set() {
    let cli = Cli::try_parse_from(["appctl", "default-app", "set", "acme/myapp", "--pretty"])
        .unwrap();

    assert!(cli.pretty);
    assert!(matches!(
        cli.command,
        Commands::DefaultApp {
            action: DefaultAppCommands::Set { ref app }
        } if app == "acme/myapp"
    ));
}

#[test]
fn given_cli_definition_when_debug_asserted_then_valid() {
    use clap::CommandFactory;

    Cli::command().debug_assert();
}
