//! Loading and layered resolution of configuration documents
//!
//! A run is configured the same way the training driver builds it at process
//! start: one default document, zero or more experiment overlays merged over
//! it, then `key.path=value` command-line overrides. The typed record is only
//! produced (and validated) after all layers are folded in.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;

use super::merge::{apply_override, merge_overlay, parse_override};
use super::schema::GlobalConfig;
use super::validate::{classify_parse_error, validate_config, ValidationReport};
use crate::error::{Error, Result};

/// Load and validate a single configuration document.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GlobalConfig> {
    let text = read(path.as_ref())?;
    parse_str(&text)
}

/// Parse and validate a configuration document from a string.
pub fn parse_str(text: &str) -> Result<GlobalConfig> {
    let config: GlobalConfig =
        serde_yaml::from_str(text).map_err(|e| Error::Parse(classify_parse_error(&e)))?;
    validate_config(&config)?;
    Ok(config)
}

/// Resolve a configuration from layered documents.
///
/// `overlays` merge over the default document in order; `overrides` apply
/// last. Merge violations (unknown keys, section/scalar conflicts) from every
/// layer are aggregated before the record is typed, so one failed resolve
/// lists them all.
pub fn resolve_config(
    default_path: &Path,
    overlays: &[PathBuf],
    overrides: &[String],
) -> Result<GlobalConfig> {
    let mut document: Value = parse_value(&read(default_path)?)?;
    let mut report = ValidationReport::new();

    for overlay_path in overlays {
        let overlay: Value = parse_value(&read(overlay_path)?)?;
        merge_overlay(&mut document, &overlay, &mut report);
    }

    for spec in overrides {
        let ov = parse_override(spec)?;
        apply_override(&mut document, &ov, &mut report);
    }

    report.into_result()?;

    let config: GlobalConfig =
        serde_yaml::from_value(document).map_err(|e| Error::Parse(classify_parse_error(&e)))?;
    validate_config(&config)?;
    Ok(config)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

fn parse_value(text: &str) -> Result<Value> {
    serde_yaml::from_str(text).map_err(|e| Error::Parse(classify_parse_error(&e)))
}

impl GlobalConfig {
    /// Serialize the record back to a YAML document.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| Error::Serialize(e.to_string()))
    }

    /// Write the resolved record as `config.yaml` under `dir`.
    ///
    /// The training driver calls this once per run so the exact
    /// hyperparameters travel with the artifacts.
    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
        let path = dir.join("config.yaml");
        fs::write(&path, self.to_yaml()?).map_err(|e| Error::io(&path, e))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    const VALID_DOC: &str = r"
run_name: exp_test
dataset_path: datasets/facies.npy
training:
  g_lr: 0.0002
";

    #[test]
    fn test_load_valid_document() {
        let file = write_temp(VALID_DOC);
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.run_name, "exp_test");
        assert_eq!(config.training.g_lr, 0.0002);
        assert_eq!(config.training.d_lr, 0.0004);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = load_config("/nonexistent/path/training.yaml");
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_load_malformed_document() {
        let file = write_temp("training: [unterminated");
        assert!(matches!(
            load_config(file.path()),
            Err(Error::Parse(ConfigError::TypeMismatch { .. }))
        ));
    }

    #[test]
    fn test_load_wrong_scalar_type() {
        let file = write_temp("run_name: r\ndataset_path: d\ntraining:\n  g_lr: fast\n");
        assert!(matches!(
            load_config(file.path()),
            Err(Error::Parse(ConfigError::TypeMismatch { .. }))
        ));
    }

    #[test]
    fn test_load_invalid_document_aggregates() {
        let file = write_temp(
            "run_name: r\ndataset_path: d\ntraining:\n  g_lr: 0.0\n  d_optim: rmsprop\n  log_step: -1\n",
        );
        match load_config(file.path()) {
            Err(Error::Invalid(report)) => assert_eq!(report.len(), 3),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_overlay_order() {
        let default = write_temp(VALID_DOC);
        let first = write_temp("training:\n  g_lr: 0.001\n  batch_size: 32\n");
        let second = write_temp("training:\n  g_lr: 0.005\n");

        let config = resolve_config(
            default.path(),
            &[first.path().to_path_buf(), second.path().to_path_buf()],
            &[],
        )
        .unwrap();

        // Later overlays win; earlier ones still contribute
        assert_eq!(config.training.g_lr, 0.005);
        assert_eq!(config.training.batch_size, 32);
    }

    #[test]
    fn test_resolve_overrides_apply_last() {
        let default = write_temp(VALID_DOC);
        let overlay = write_temp("training:\n  g_lr: 0.001\n");

        let config = resolve_config(
            default.path(),
            &[overlay.path().to_path_buf()],
            &["training.g_lr=0.009".to_string(), "run_name=swept".to_string()],
        )
        .unwrap();

        assert_eq!(config.training.g_lr, 0.009);
        assert_eq!(config.run_name, "swept");
    }

    #[test]
    fn test_resolve_rejects_unknown_overlay_key() {
        let default = write_temp(VALID_DOC);
        let overlay = write_temp("training:\n  warmup: 10\n");

        match resolve_config(default.path(), &[overlay.path().to_path_buf()], &[]) {
            Err(Error::Invalid(report)) => {
                assert_eq!(
                    report.errors(),
                    &[ConfigError::UnknownField("training.warmup".to_string())]
                );
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_rejects_malformed_override() {
        let default = write_temp(VALID_DOC);
        assert!(matches!(
            resolve_config(default.path(), &[], &["training.g_lr".to_string()]),
            Err(Error::Override { .. })
        ));
    }

    #[test]
    fn test_save_round_trip() {
        let file = write_temp(VALID_DOC);
        let config = load_config(file.path()).unwrap();

        let dir = TempDir::new().unwrap();
        let saved = config.save(dir.path()).unwrap();
        assert!(saved.ends_with("config.yaml"));

        let reloaded = load_config(&saved).unwrap();
        assert_eq!(config, reloaded);
    }

    #[test]
    fn test_parse_str_round_trip_identity() {
        let file = write_temp(VALID_DOC);
        let config = load_config(file.path()).unwrap();
        let reloaded = parse_str(&config.to_yaml().unwrap()).unwrap();
        assert_eq!(config, reloaded);
    }
}
