//! CLI command implementations

mod info;
mod inspect;
mod validate;


use crate::cli::{Cli, Command, LogLevel};
use crate::env::EnvCatalog;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.verbose, cli.quiet);

    match cli.command {
        Command::Validate(args) => validate::run_validate(&args, log_level),
        Command::Info(args) => info::run_info(&args, log_level),
        Command::Inspect(args) => inspect::run_inspect(&args, log_level),
    }
}

/// Builtin catalog extended with any `--extra-env` ids
fn build_registry(extra_env: &[String]) -> EnvCatalog {
    let mut catalog = EnvCatalog::builtin();
    for id in extra_env {
        catalog.register(id.clone());
    }
    catalog
}
