//! Resolve command implementation

use crate::cli::args::ResolveArgs;
use crate::cli::logging::{log, LogLevel};
use crate::config::resolve_config;

pub fn run_resolve(args: ResolveArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Resolving {} with {} overlay(s) and {} override(s)",
            args.config.display(),
            args.experiments.len(),
            args.sets.len()
        ),
    );

    let config = resolve_config(&args.config, &args.experiments, &args.sets)
        .map_err(|e| format!("Config error: {e}"))?;

    match &args.output {
        Some(dir) => {
            let path = config
                .save(dir)
                .map_err(|e| format!("Save error: {e}"))?;
            log(
                level,
                LogLevel::Normal,
                &format!("Resolved config saved to {}", path.display()),
            );
        }
        None => {
            let yaml = config.to_yaml().map_err(|e| format!("Config error: {e}"))?;
            print!("{yaml}");
        }
    }

    Ok(())
}
