//! Starter document generation
//!
//! `facies init` writes these so a new experiment starts from the reference
//! hyperparameters instead of a blank file.

use serde::Serialize;

use super::schema::{GlobalConfig, TrainingConfig};

/// Template type for initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Template {
    /// Training section only, for use as an experiment overlay
    #[default]
    Training,
    /// Complete run document with every section
    Full,
}

impl std::str::FromStr for Template {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "training" | "train" => Ok(Template::Training),
            "full" | "complete" => Ok(Template::Full),
            _ => Err(format!(
                "unknown template: {s}. Valid templates: training, full"
            )),
        }
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Template::Training => f.write_str("training"),
            Template::Full => f.write_str("full"),
        }
    }
}

/// Training-only document, the shape experiment overlays use
#[derive(Debug, Serialize)]
struct TrainingDocument {
    training: TrainingConfig,
}

/// Generate a starter document as YAML.
pub fn generate_yaml(template: Template, run_name: &str) -> String {
    let rendered = match template {
        Template::Training => serde_yaml::to_string(&TrainingDocument {
            training: TrainingConfig::default(),
        }),
        Template::Full => serde_yaml::to_string(&generate_full(run_name)),
    };
    rendered.unwrap_or_else(|_err| "# error generating document".to_string())
}

fn generate_full(run_name: &str) -> GlobalConfig {
    GlobalConfig {
        run_name: run_name.to_string(),
        dataset_path: "datasets/facies.npy".into(),
        ..Default::default()
    }
}
