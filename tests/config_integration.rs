//! Integration tests over the shipped configuration documents
//!
//! Every document under `configs/` must load through the public API, and the
//! default document must carry the reference hyperparameters the training
//! driver was tuned with.

use facies::config::{load_config, resolve_config, validate_config};
use facies::Error;
use std::path::{Path, PathBuf};

fn config_path(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("configs")
        .join(relative)
}

#[test]
fn default_document_loads() {
    let config = load_config(config_path("default.yaml"))
        .unwrap_or_else(|e| panic!("failed to load default.yaml: {e}"));
    assert!(validate_config(&config).is_ok());
}

#[test]
fn default_document_carries_reference_values() {
    let config = load_config(config_path("default.yaml")).unwrap();

    assert_eq!(config.training.total_step, 100_000);
    assert_eq!(config.training.g_lr, 0.0001);
    assert_eq!(config.training.d_lr, 0.0004);
    assert_eq!(config.training.adv_loss, "wgan-gp");
    assert!(!config.training.mixed_precision);
    assert_eq!(config.training.model_save_step, 1200);
    assert_eq!(config.training.metric_step, 1200);
}

#[test]
fn default_document_matches_code_defaults() {
    // The shipped document and the Default impls must describe the same run,
    // apart from the dataset path the document pins.
    let loaded = load_config(config_path("default.yaml")).unwrap();
    let coded = facies::GlobalConfig {
        dataset_path: loaded.dataset_path.clone(),
        ..Default::default()
    };
    assert_eq!(loaded, coded);
}

#[test]
fn negative_thresholds_read_as_disabled() {
    let config = load_config(config_path("default.yaml")).unwrap();
    assert_eq!(config.training.abort_threshold(), None);
    assert_eq!(config.training.time_budget(), None);
}

#[test]
fn experiment_overlays_resolve() {
    for overlay in ["exp/base.yaml", "exp/hinge_kfac.yaml"] {
        let config = resolve_config(
            &config_path("default.yaml"),
            &[config_path(overlay)],
            &[],
        )
        .unwrap_or_else(|e| panic!("failed to resolve {overlay}: {e}"));
        assert!(validate_config(&config).is_ok(), "{overlay} must validate");
    }
}

#[test]
fn overlay_overrides_only_named_keys() {
    let config = resolve_config(
        &config_path("default.yaml"),
        &[config_path("exp/hinge_kfac.yaml")],
        &[],
    )
    .unwrap();

    assert_eq!(config.run_name, "hinge_kfac_64");
    assert_eq!(config.training.adv_loss, "hinge");
    assert_eq!(config.training.d_optim, "kfac");
    assert_eq!(config.training.d_lr, 0.0001);
    // Everything the overlay does not name keeps the default value
    assert_eq!(config.training.g_optim, "adam");
    assert_eq!(config.training.g_lr, 0.0001);
    assert_eq!(config.training.total_step, 100_000);
}

#[test]
fn command_line_overrides_win_over_overlays() {
    let config = resolve_config(
        &config_path("default.yaml"),
        &[config_path("exp/base.yaml")],
        &[
            "training.sample_step=600".to_string(),
            "training.mixed_precision=true".to_string(),
        ],
    )
    .unwrap();

    assert_eq!(config.training.sample_step, 600);
    assert!(config.training.mixed_precision);
    assert_eq!(config.run_name, "base_64");
}

#[test]
fn resolved_config_round_trips() {
    let config = resolve_config(
        &config_path("default.yaml"),
        &[config_path("exp/hinge_kfac.yaml")],
        &["seed=17".to_string()],
    )
    .unwrap();

    let dir = tempfile::TempDir::new().unwrap();
    let saved = config.save(dir.path()).unwrap();
    let reloaded = load_config(&saved).unwrap();
    assert_eq!(config, reloaded);
}

#[test]
fn bad_optimizer_fails_with_every_violation_listed() {
    let result = resolve_config(
        &config_path("default.yaml"),
        &[],
        &[
            "training.d_optim=rmsprop".to_string(),
            "training.g_optim=lbfgs".to_string(),
            "training.log_step=0".to_string(),
        ],
    );

    match result {
        Err(Error::Invalid(report)) => {
            assert_eq!(report.len(), 3);
            let text = report.to_string();
            assert!(text.contains("training.d_optim"));
            assert!(text.contains("training.g_optim"));
            assert!(text.contains("training.log_step"));
        }
        other => panic!("expected aggregated validation failure, got {other:?}"),
    }
}

#[test]
fn unknown_override_key_is_rejected() {
    let result = resolve_config(
        &config_path("default.yaml"),
        &[],
        &["training.epochs=10".to_string()],
    );
    match result {
        Err(Error::Invalid(report)) => {
            assert!(report.to_string().contains("training.epochs"));
        }
        other => panic!("expected unknown-field failure, got {other:?}"),
    }
}
