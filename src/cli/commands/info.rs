//! Info command implementation

use crate::cli::args::{InfoArgs, OutputFormat};
use crate::cli::logging::{log, LogLevel};
use crate::config::load_config;

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let config = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Configuration Info:");
            println!();
            println!("Run: {}", config.run_name);
            println!("Dataset: {}", config.dataset_path.display());
            println!(
                "Model: {} ({}x{})",
                config.model.architecture, config.model.data_size, config.model.data_size
            );
            println!(
                "Loss: {} (lambda_gp={})",
                config.training.adv_loss, config.training.lambda_gp
            );
            println!(
                "Optimizers: g={} (lr={}), d={} (lr={})",
                config.training.g_optim,
                config.training.g_lr,
                config.training.d_optim,
                config.training.d_lr
            );
            println!("Total steps: {}", config.training.total_step);

            if config.training.mixed_precision {
                println!("Mixed precision: enabled");
            }
            if config.training.uses_kfac() {
                println!("K-FAC: enabled");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = config
                .to_yaml()
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
    }

    Ok(())
}
