//! Declarative run configuration
//!
//! Documents under `configs/` resolve into one immutable `GlobalConfig` per
//! run: default document, experiment overlays, command-line overrides, then
//! validation. The training driver reads the record once at process start.

mod loader;
mod merge;
mod schema;
mod templates;
pub mod validate;

pub use loader::{load_config, parse_str, resolve_config};
pub use merge::{apply_override, merge_overlay, parse_override, Override};
pub use schema::{
    AdvLoss, Architecture, DataConfig, GlobalConfig, ModelConfig, OptimizerKind, TrainingConfig,
};
pub use templates::{generate_yaml, Template};
pub use validate::{validate_config, ConfigError, ValidationReport};
