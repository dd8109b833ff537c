//! Property-based tests for configuration validation

use super::error::ConfigError;
use super::validator::validate_config;
use crate::config::schema::{GlobalConfig, TrainingConfig};
use proptest::prelude::*;
use std::path::PathBuf;

fn arb_valid_config() -> impl Strategy<Value = GlobalConfig> {
    (
        1usize..512,                          // batch_size
        (1e-6f64..0.1, 1e-6f64..0.1),         // learning rates
        (1i64..1_000_000, 1i64..10_000),      // total_step, log_step
        0.0f64..0.999,                        // adam_beta1
        prop_oneof!["wgan-gp", "hinge"],      // adv_loss
        (
            prop_oneof!["sgd", "adam", "kfac"],
            prop_oneof!["sgd", "adam", "kfac"],
        ),
        (1i64..100).prop_flat_map(|t_cov| (Just(t_cov), t_cov..10_000)),
    )
        .prop_map(
            |(
                batch_size,
                (g_lr, d_lr),
                (total_step, log_step),
                adam_beta1,
                adv_loss,
                (g_optim, d_optim),
                (t_cov, t_inv),
            )| {
                GlobalConfig {
                    dataset_path: PathBuf::from("datasets/facies.npy"),
                    training: TrainingConfig {
                        batch_size,
                        g_lr,
                        d_lr,
                        total_step,
                        log_step,
                        adam_beta1,
                        adv_loss,
                        g_optim,
                        d_optim,
                        t_cov,
                        t_inv,
                        ..Default::default()
                    },
                    ..Default::default()
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_config_passes(config in arb_valid_config()) {
        prop_assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn prop_nonpositive_g_lr_fails(config in arb_valid_config(), lr in -1.0f64..=0.0) {
        let mut config = config;
        config.training.g_lr = lr;
        let report = validate_config(&config).unwrap_err();
        let found = report.errors().iter().any(|e| matches!(
            e,
            ConfigError::OutOfRange { field, .. } if field == "training.g_lr"
        ));
        prop_assert!(found);
    }

    #[test]
    fn prop_unknown_optimizer_fails(
        config in arb_valid_config(),
        name in "[a-z]{3,10}"
    ) {
        prop_assume!(!["sgd", "adam", "kfac"].contains(&name.as_str()));
        let mut config = config;
        config.training.g_optim = name.clone();
        let report = validate_config(&config).unwrap_err();
        let found = report.errors().iter().any(|e| matches!(
            e,
            ConfigError::InvalidEnumValue { field, value, .. }
                if field == "training.g_optim" && *value == name
        ));
        prop_assert!(found);
    }

    #[test]
    fn prop_nonpositive_cadence_fails(config in arb_valid_config(), step in -10_000i64..=0) {
        let mut config = config;
        config.training.sample_step = step;
        let report = validate_config(&config).unwrap_err();
        let found = report.errors().iter().any(|e| matches!(
            e,
            ConfigError::OutOfRange { field, .. } if field == "training.sample_step"
        ));
        prop_assert!(found);
    }

    #[test]
    fn prop_negative_threshold_always_accepted(
        config in arb_valid_config(),
        threshold in -1e6f64..0.0
    ) {
        let mut config = config;
        config.training.interrupt_threshold = threshold;
        prop_assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn prop_inverse_interval_must_cover_covariance(
        config in arb_valid_config(),
        t_cov in 2i64..1000
    ) {
        let mut config = config;
        config.training.t_cov = t_cov;
        config.training.t_inv = t_cov - 1;
        let report = validate_config(&config).unwrap_err();
        let found = report.errors().iter().any(|e| matches!(
            e,
            ConfigError::OutOfRange { field, .. } if field == "training.T_inv"
        ));
        prop_assert!(found);
    }

    #[test]
    fn prop_violations_accumulate(config in arb_valid_config()) {
        let mut config = config;
        config.training.g_lr = 0.0;
        config.training.d_lr = -1.0;
        config.training.adv_loss = "lsgan".to_string();
        let report = validate_config(&config).unwrap_err();
        prop_assert!(report.len() >= 3);
    }
}
