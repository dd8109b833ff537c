//! Command-line interface
//!
//! # Usage
//!
//! ```bash
//! facies validate configs/default.yaml --detailed
//! facies info configs/default.yaml --format yaml
//! facies init --template training --output configs/exp/new.yaml
//! facies resolve configs/default.yaml -e configs/exp/base.yaml -s training.g_lr=0.0002
//! ```

mod args;
mod commands;
mod logging;

pub use args::{parse_args, Cli, Command, InfoArgs, InitArgs, OutputFormat, ResolveArgs, ValidateArgs};
pub use commands::run_command;
pub use logging::{log, LogLevel};
