//! Configuration validation logic
//!
//! Checks every field of a parsed record against its declared range or
//! allow-list. Unlike the serde layer, nothing here stops at the first fault:
//! all violations accumulate into one `ValidationReport` so a bad document is
//! fixed in a single edit cycle.

use std::str::FromStr;

use super::error::{ConfigError, ValidationReport};
use crate::config::schema::{AdvLoss, Architecture, GlobalConfig, ModelConfig, OptimizerKind, TrainingConfig};

/// Side lengths the sample pipeline supports
const VALID_DATA_SIZES: &[i64] = &[32, 64, 128];

/// Validate a run configuration.
///
/// Checks, per section:
/// 1. Required run-level fields are non-empty
/// 2. Enum-like strings match their allow-lists
/// 3. Numeric fields are finite and inside their declared ranges
/// 4. Cross-field constraints (K-FAC intervals)
pub fn validate_config(config: &GlobalConfig) -> Result<(), ValidationReport> {
    let mut report = ValidationReport::new();

    validate_run_fields(config, &mut report);
    validate_model(&config.model, &mut report);
    validate_training(&config.training, &mut report);

    report.into_result()
}

fn validate_run_fields(config: &GlobalConfig, report: &mut ValidationReport) {
    if config.run_name.trim().is_empty() {
        report.push(ConfigError::MissingField("run_name".to_string()));
    }
    if config.dataset_path.as_os_str().is_empty() {
        report.push(ConfigError::MissingField("dataset_path".to_string()));
    }
    check_min_i64(
        "recover_model_step",
        config.recover_model_step,
        0,
        ">= 0",
        report,
    );
}

fn validate_model(model: &ModelConfig, report: &mut ValidationReport) {
    check_enum::<Architecture>("model.architecture", &model.architecture, Architecture::EXPECTED, report);

    if !VALID_DATA_SIZES.contains(&model.data_size) {
        report.push(ConfigError::OutOfRange {
            field: "model.data_size".to_string(),
            value: model.data_size.to_string(),
            constraint: "one of 32, 64, 128",
        });
    }

    check_min_i64("model.z_dim", model.z_dim, 1, ">= 1", report);
    check_min_i64("model.g_conv_dim", model.g_conv_dim, 1, ">= 1", report);
    check_min_i64("model.d_conv_dim", model.d_conv_dim, 1, ">= 1", report);
}

fn validate_training(training: &TrainingConfig, report: &mut ValidationReport) {
    check_enum::<AdvLoss>("training.adv_loss", &training.adv_loss, AdvLoss::EXPECTED, report);
    check_enum::<OptimizerKind>("training.g_optim", &training.g_optim, OptimizerKind::EXPECTED, report);
    check_enum::<OptimizerKind>("training.d_optim", &training.d_optim, OptimizerKind::EXPECTED, report);

    if training.batch_size == 0 {
        report.push(ConfigError::OutOfRange {
            field: "training.batch_size".to_string(),
            value: "0".to_string(),
            constraint: ">= 1",
        });
    }

    check_min_i64("training.total_step", training.total_step, 1, ">= 1", report);
    check_min_i64("training.log_step", training.log_step, 1, ">= 1", report);
    check_min_i64("training.sample_step", training.sample_step, 1, ">= 1", report);
    check_min_i64(
        "training.model_save_step",
        training.model_save_step,
        1,
        ">= 1",
        report,
    );
    check_min_i64("training.metric_step", training.metric_step, 1, ">= 1", report);
    check_min_i64("training.ema_start_step", training.ema_start_step, 0, ">= 0", report);

    check_positive_f64("training.g_lr", training.g_lr, report);
    check_positive_f64("training.d_lr", training.d_lr, report);
    check_positive_f64("training.kfac_damping", training.kfac_damping, report);

    check_nonneg_f64("training.lambda_gp", training.lambda_gp, report);
    check_nonneg_f64("training.sgd_momentum", training.sgd_momentum, report);
    check_nonneg_f64("training.sgd_dampening", training.sgd_dampening, report);
    check_nonneg_f64("training.weight_decay", training.weight_decay, report);

    check_unit_interval("training.adam_beta1", training.adam_beta1, report);
    check_unit_interval("training.adam_beta2", training.adam_beta2, report);

    // Negative disables these two, so only non-finite values are faults
    check_finite("training.interrupt_threshold", training.interrupt_threshold, report);
    check_finite("training.total_time", training.total_time, report);

    if training.g_ema_decay <= 0.0 || training.g_ema_decay > 1.0 {
        report.push(ConfigError::OutOfRange {
            field: "training.g_ema_decay".to_string(),
            value: training.g_ema_decay.to_string(),
            constraint: "in (0, 1]",
        });
    }

    validate_kfac_intervals(training, report);
}

/// The inverse is recomputed from accumulated covariance statistics, so it
/// can never refresh more often than the covariances themselves.
fn validate_kfac_intervals(training: &TrainingConfig, report: &mut ValidationReport) {
    check_min_i64("training.T_cov", training.t_cov, 1, ">= 1", report);
    check_min_i64("training.T_inv", training.t_inv, 1, ">= 1", report);

    if training.t_cov >= 1 && training.t_inv >= 1 && training.t_inv < training.t_cov {
        report.push(ConfigError::OutOfRange {
            field: "training.T_inv".to_string(),
            value: training.t_inv.to_string(),
            constraint: ">= T_cov",
        });
    }
}

// ---------------------------------------------------------------------------
// Shared range-check helpers
// ---------------------------------------------------------------------------

fn check_enum<T: FromStr>(
    field: &str,
    value: &str,
    expected: &'static str,
    report: &mut ValidationReport,
) {
    if T::from_str(value).is_err() {
        report.push(ConfigError::InvalidEnumValue {
            field: field.to_string(),
            value: value.to_string(),
            expected,
        });
    }
}

fn check_min_i64(
    field: &str,
    value: i64,
    min: i64,
    constraint: &'static str,
    report: &mut ValidationReport,
) {
    if value < min {
        report.push(ConfigError::OutOfRange {
            field: field.to_string(),
            value: value.to_string(),
            constraint,
        });
    }
}

fn check_positive_f64(field: &str, value: f64, report: &mut ValidationReport) {
    if !value.is_finite() || value <= 0.0 {
        report.push(ConfigError::OutOfRange {
            field: field.to_string(),
            value: value.to_string(),
            constraint: "finite and > 0",
        });
    }
}

fn check_nonneg_f64(field: &str, value: f64, report: &mut ValidationReport) {
    if !value.is_finite() || value < 0.0 {
        report.push(ConfigError::OutOfRange {
            field: field.to_string(),
            value: value.to_string(),
            constraint: "finite and >= 0",
        });
    }
}

fn check_unit_interval(field: &str, value: f64, report: &mut ValidationReport) {
    if !value.is_finite() || !(0.0..1.0).contains(&value) {
        report.push(ConfigError::OutOfRange {
            field: field.to_string(),
            value: value.to_string(),
            constraint: "in [0, 1)",
        });
    }
}

fn check_finite(field: &str, value: f64, report: &mut ValidationReport) {
    if !value.is_finite() {
        report.push(ConfigError::OutOfRange {
            field: field.to_string(),
            value: value.to_string(),
            constraint: "finite",
        });
    }
}
