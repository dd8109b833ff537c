//! CLI command implementations

mod info;
mod init;
mod resolve;
mod validate;

use crate::cli::args::{Cli, Command};
use crate::cli::logging::LogLevel;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.verbose, cli.quiet);

    match cli.command {
        Command::Validate(args) => validate::run_validate(args, log_level),
        Command::Info(args) => info::run_info(args, log_level),
        Command::Init(args) => init::run_init(args, log_level),
        Command::Resolve(args) => resolve::run_resolve(args, log_level),
    }
}
