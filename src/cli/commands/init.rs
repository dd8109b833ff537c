//! Init command implementation

use std::fs;

use crate::cli::args::InitArgs;
use crate::cli::logging::{log, LogLevel};
use crate::config::generate_yaml;

pub fn run_init(args: InitArgs, level: LogLevel) -> Result<(), String> {
    let document = generate_yaml(args.template, &args.name);

    match &args.output {
        Some(path) => {
            if path.exists() {
                return Err(format!(
                    "refusing to overwrite existing file: {}",
                    path.display()
                ));
            }
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .map_err(|e| format!("cannot create {}: {e}", parent.display()))?;
                }
            }
            fs::write(path, &document).map_err(|e| format!("cannot write {}: {e}", path.display()))?;
            log(
                level,
                LogLevel::Normal,
                &format!("Wrote {} template to {}", args.template, path.display()),
            );
        }
        None => print!("{document}"),
    }

    Ok(())
}
