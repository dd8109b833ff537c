//! Facies CLI
//!
//! Configuration entry point for GAN facies training runs.
//!
//! # Usage
//!
//! ```bash
//! # Validate a config
//! facies validate configs/default.yaml
//!
//! # Show config info
//! facies info configs/default.yaml --format json
//!
//! # Write a starter document
//! facies init --template training --output configs/exp/new.yaml
//!
//! # Resolve default + experiment + overrides
//! facies resolve configs/default.yaml -e configs/exp/base.yaml -s training.g_lr=0.0002
//! ```

use clap::Parser;
use facies::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
