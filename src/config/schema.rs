//! Configuration record definitions
//!
//! The root `GlobalConfig` mirrors the layout of the YAML documents under
//! `configs/`: a handful of run-level scalars plus the `data`, `model` and
//! `training` sections. Every field carries a default so partial documents
//! (experiment overlays loaded standalone) still produce a complete record.
//!
//! Name-like fields (`adv_loss`, `g_optim`, `d_optim`, `architecture`) are
//! stored as their canonical lowercase strings and checked against the typed
//! enums below during validation, so a single load can report every bad name
//! at once instead of stopping at the first.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Adversarial loss variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvLoss {
    /// Wasserstein loss with gradient penalty
    WganGp,
    /// Hinge loss
    Hinge,
}

impl AdvLoss {
    pub const EXPECTED: &'static str = "wgan-gp, hinge";

    pub fn as_str(self) -> &'static str {
        match self {
            AdvLoss::WganGp => "wgan-gp",
            AdvLoss::Hinge => "hinge",
        }
    }
}

impl FromStr for AdvLoss {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wgan-gp" => Ok(AdvLoss::WganGp),
            "hinge" => Ok(AdvLoss::Hinge),
            _ => Err(format!(
                "unknown adversarial loss: {s}. Valid options: {}",
                Self::EXPECTED
            )),
        }
    }
}

impl std::fmt::Display for AdvLoss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optimizer selection for either network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizerKind {
    Sgd,
    Adam,
    /// Kronecker-factored approximate curvature (second order)
    Kfac,
}

impl OptimizerKind {
    pub const EXPECTED: &'static str = "sgd, adam, kfac";

    pub fn as_str(self) -> &'static str {
        match self {
            OptimizerKind::Sgd => "sgd",
            OptimizerKind::Adam => "adam",
            OptimizerKind::Kfac => "kfac",
        }
    }
}

impl FromStr for OptimizerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sgd" => Ok(OptimizerKind::Sgd),
            "adam" => Ok(OptimizerKind::Adam),
            "kfac" => Ok(OptimizerKind::Kfac),
            _ => Err(format!(
                "unknown optimizer: {s}. Valid options: {}",
                Self::EXPECTED
            )),
        }
    }
}

impl std::fmt::Display for OptimizerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generator/discriminator architecture family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Architecture {
    /// Self-attention GAN, unconditional
    Sagan,
    /// Self-attention GAN conditioned on pixel maps
    CondSagan,
}

impl Architecture {
    pub const EXPECTED: &'static str = "sagan, cond_sagan";

    pub fn as_str(self) -> &'static str {
        match self {
            Architecture::Sagan => "sagan",
            Architecture::CondSagan => "cond_sagan",
        }
    }
}

impl FromStr for Architecture {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sagan" => Ok(Architecture::Sagan),
            "cond_sagan" => Ok(Architecture::CondSagan),
            _ => Err(format!(
                "unknown architecture: {s}. Valid options: {}",
                Self::EXPECTED
            )),
        }
    }
}

impl std::fmt::Display for Architecture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete run configuration (root record)
///
/// Immutable after load: all resolution (overlays, CLI overrides) happens on
/// the raw document before this record is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Experiment identifier; artifacts land under `<output_dir>/<run_name>`
    pub run_name: String,

    /// Root directory for run artifacts
    pub output_dir: PathBuf,

    /// Path to the facies dataset
    pub dataset_path: PathBuf,

    /// Global RNG seed
    pub seed: u64,

    /// Resume from the model saved at this step; 0 starts fresh
    pub recover_model_step: i64,

    /// Data loader section
    pub data: DataConfig,

    /// Architecture section
    pub model: ModelConfig,

    /// Training section
    pub training: TrainingConfig,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            run_name: "base".to_string(),
            output_dir: PathBuf::from("res"),
            dataset_path: PathBuf::new(),
            seed: 0,
            recover_model_step: 0,
            data: DataConfig::default(),
            model: ModelConfig::default(),
            training: TrainingConfig::default(),
        }
    }
}

impl GlobalConfig {
    /// Directory where this run saves its artifacts and resolved config
    pub fn save_dir(&self) -> PathBuf {
        self.output_dir.join(&self.run_name)
    }
}

/// Data loader configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    /// Shuffle the dataset each epoch
    pub shuffle: bool,

    /// Loader worker processes; 0 loads on the main thread
    pub num_workers: usize,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            shuffle: true,
            num_workers: 0,
        }
    }
}

/// Architecture configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    /// Architecture family: "sagan" or "cond_sagan"
    pub architecture: String,

    /// Side length of generated samples (32, 64 or 128)
    pub data_size: i64,

    /// Latent vector dimension
    pub z_dim: i64,

    /// Base channel width of the generator
    pub g_conv_dim: i64,

    /// Base channel width of the discriminator
    pub d_conv_dim: i64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            architecture: "sagan".to_string(),
            data_size: 64,
            z_dim: 128,
            g_conv_dim: 64,
            d_conv_dim: 64,
        }
    }
}

impl ModelConfig {
    /// Typed view of the `architecture` field
    pub fn arch(&self) -> Result<Architecture, String> {
        self.architecture.parse()
    }
}

/// Training hyperparameters
///
/// The step-count fields are signed so that a negative value in a document is
/// a range violation rather than a parse failure, matching how the
/// negative-disables fields (`interrupt_threshold`, `total_time`) read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrainingConfig {
    /// Adversarial loss: "wgan-gp" or "hinge"
    pub adv_loss: String,

    /// Run forward/backward passes in reduced precision
    pub mixed_precision: bool,

    /// Samples per training batch
    pub batch_size: usize,

    /// Total number of training steps
    pub total_step: i64,

    /// Wall-clock budget in seconds; negative disables the cap
    pub total_time: f64,

    /// Abort when the summed absolute losses exceed this; negative disables
    pub interrupt_threshold: f64,

    /// Log losses every N steps
    pub log_step: i64,

    /// Write sample grids every N steps
    pub sample_step: i64,

    /// Save generator/discriminator weights every N steps
    pub model_save_step: i64,

    /// Compute evaluation metrics every N steps
    pub metric_step: i64,

    /// Generator learning rate
    pub g_lr: f64,

    /// Discriminator learning rate
    pub d_lr: f64,

    /// Generator optimizer: "sgd", "adam" or "kfac"
    pub g_optim: String,

    /// Discriminator optimizer: "sgd", "adam" or "kfac"
    pub d_optim: String,

    /// Adam first-moment decay
    pub adam_beta1: f64,

    /// Adam second-moment decay
    pub adam_beta2: f64,

    /// SGD momentum factor
    pub sgd_momentum: f64,

    /// SGD dampening for momentum
    pub sgd_dampening: f64,

    /// L2 weight decay
    pub weight_decay: f64,

    /// Gradient-penalty coefficient (wgan-gp only)
    pub lambda_gp: f64,

    /// K-FAC Tikhonov damping
    pub kfac_damping: f64,

    /// K-FAC covariance update interval, in steps
    #[serde(rename = "T_cov")]
    pub t_cov: i64,

    /// K-FAC inverse recomputation interval, in steps
    #[serde(rename = "T_inv")]
    pub t_inv: i64,

    /// Step at which generator weight averaging starts
    pub ema_start_step: i64,

    /// Decay of the generator weight exponential moving average
    pub g_ema_decay: f64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            adv_loss: "wgan-gp".to_string(),
            mixed_precision: false,
            batch_size: 64,
            total_step: 100_000,
            total_time: -1.0,
            interrupt_threshold: -1.0,
            log_step: 10,
            sample_step: 1200,
            model_save_step: 1200,
            metric_step: 1200,
            g_lr: 0.0001,
            d_lr: 0.0004,
            g_optim: "adam".to_string(),
            d_optim: "adam".to_string(),
            adam_beta1: 0.0,
            adam_beta2: 0.9,
            sgd_momentum: 0.9,
            sgd_dampening: 0.0,
            weight_decay: 0.0,
            lambda_gp: 10.0,
            kfac_damping: 0.001,
            t_cov: 10,
            t_inv: 100,
            ema_start_step: 0,
            g_ema_decay: 0.999,
        }
    }
}

impl TrainingConfig {
    /// Loss-explosion abort threshold; `None` when disabled
    pub fn abort_threshold(&self) -> Option<f64> {
        (self.interrupt_threshold >= 0.0).then_some(self.interrupt_threshold)
    }

    /// Wall-clock budget; `None` when disabled
    pub fn time_budget(&self) -> Option<Duration> {
        (self.total_time >= 0.0).then(|| Duration::from_secs_f64(self.total_time))
    }

    /// Typed view of the `adv_loss` field
    pub fn loss_kind(&self) -> Result<AdvLoss, String> {
        self.adv_loss.parse()
    }

    /// Typed view of the `g_optim` field
    pub fn g_optimizer(&self) -> Result<OptimizerKind, String> {
        self.g_optim.parse()
    }

    /// Typed view of the `d_optim` field
    pub fn d_optimizer(&self) -> Result<OptimizerKind, String> {
        self.d_optim.parse()
    }

    /// Whether either network trains with the second-order optimizer
    pub fn uses_kfac(&self) -> bool {
        [&self.g_optim, &self.d_optim]
            .iter()
            .any(|name| matches!(name.parse(), Ok(OptimizerKind::Kfac)))
    }
}
