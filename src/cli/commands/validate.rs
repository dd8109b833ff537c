//! Validate command implementation

use crate::cli::args::ValidateArgs;
use crate::cli::logging::{log, LogLevel};
use crate::config::{load_config, GlobalConfig};

/// Format run-level fields as a string
pub fn format_run_info(config: &GlobalConfig) -> String {
    format!(
        "  Run: {}\n  Dataset: {}\n  Save dir: {}\n  Seed: {}",
        config.run_name,
        config.dataset_path.display(),
        config.save_dir().display(),
        config.seed
    )
}

/// Format the model section as a string
pub fn format_model_info(config: &GlobalConfig) -> String {
    format!(
        "  Architecture: {} ({}x{})\n  Latent dim: {}\n  Conv dims: g={}, d={}",
        config.model.architecture,
        config.model.data_size,
        config.model.data_size,
        config.model.z_dim,
        config.model.g_conv_dim,
        config.model.d_conv_dim
    )
}

/// Format the training section as a string
pub fn format_training_info(config: &GlobalConfig) -> String {
    let training = &config.training;
    let mut lines = vec![
        format!("  Loss: {}", training.adv_loss),
        format!(
            "  Optimizers: g={} (lr={}), d={} (lr={})",
            training.g_optim, training.g_lr, training.d_optim, training.d_lr
        ),
        format!("  Batch size: {}", training.batch_size),
        format!("  Total steps: {}", training.total_step),
        format!(
            "  Cadence: log={}, sample={}, save={}, metric={}",
            training.log_step, training.sample_step, training.model_save_step, training.metric_step
        ),
    ];
    if training.mixed_precision {
        lines.push("  Mixed precision: enabled".to_string());
    }
    if let Some(threshold) = training.abort_threshold() {
        lines.push(format!("  Loss abort threshold: {threshold}"));
    }
    if training.uses_kfac() {
        lines.push(format!(
            "  K-FAC: damping={}, T_cov={}, T_inv={}",
            training.kfac_damping, training.t_cov, training.t_inv
        ));
    }
    lines.join("\n")
}

/// Print detailed configuration summary
pub fn print_detailed_summary(config: &GlobalConfig) {
    println!();
    println!("Configuration Summary:");
    println!("{}", format_run_info(config));
    println!();
    println!("{}", format_model_info(config));
    println!();
    println!("{}", format_training_info(config));
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    let config = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;

    log(level, LogLevel::Normal, "Configuration is valid");

    if args.detailed {
        print_detailed_summary(&config);
    }

    Ok(())
}
