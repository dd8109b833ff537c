//! Facies: declarative configuration for GAN facies training
//!
//! The training driver reads one immutable [`GlobalConfig`] at process start.
//! This crate owns the document schema, layered resolution (default document,
//! experiment overlays, command-line overrides), validation with aggregated
//! error reporting, and round-trip persistence of the resolved record.
//!
//! # Example
//!
//! ```no_run
//! use facies::config::load_config;
//!
//! let config = load_config("configs/default.yaml")?;
//! println!("training {} steps", config.training.total_step);
//! # Ok::<(), facies::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;

pub use config::{
    load_config, parse_str, resolve_config, validate_config, GlobalConfig, TrainingConfig,
};
pub use error::{Error, Result};
