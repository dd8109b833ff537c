//! Layered document merging
//!
//! Experiment documents are merged over the default document before the typed
//! record is produced: mappings merge key by key, scalars and sequences
//! replace. An overlay may only touch keys the base document already has —
//! introducing a new parameter from an experiment file is an `UnknownField`
//! violation. Command-line `key.path=value` overrides go through the same
//! rule, so a typo in a flag fails the load instead of silently training with
//! defaults.

use serde_yaml::Value;

use super::validate::{ConfigError, ValidationReport};
use crate::error::Error;

/// A single `key.path=value` override
#[derive(Debug, Clone, PartialEq)]
pub struct Override {
    /// Dotted path into the document, e.g. `training.g_lr`
    pub path: String,
    /// Replacement value, parsed with YAML scalar syntax
    pub value: Value,
}

/// Parse a `key.path=value` override specification.
pub fn parse_override(spec: &str) -> Result<Override, Error> {
    let Some((path, raw_value)) = spec.split_once('=') else {
        return Err(Error::Override {
            spec: spec.to_string(),
            reason: "expected key.path=value".to_string(),
        });
    };

    let path = path.trim();
    if path.is_empty() {
        return Err(Error::Override {
            spec: spec.to_string(),
            reason: "empty key path".to_string(),
        });
    }

    let value = serde_yaml::from_str(raw_value.trim()).map_err(|e| Error::Override {
        spec: spec.to_string(),
        reason: format!("unparseable value: {e}"),
    })?;

    Ok(Override {
        path: path.to_string(),
        value,
    })
}

/// Merge `overlay` into `base`, recursively for mappings.
///
/// Violations (unknown keys, a section overlaid with a scalar) accumulate in
/// `report`; the merge keeps going so one pass surfaces every problem.
pub fn merge_overlay(base: &mut Value, overlay: &Value, report: &mut ValidationReport) {
    merge_at(base, overlay, "", report);
}

fn merge_at(base: &mut Value, overlay: &Value, path: &str, report: &mut ValidationReport) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let key_name = match key.as_str() {
                    Some(name) => name.to_string(),
                    None => {
                        report.push(ConfigError::TypeMismatch {
                            location: join_path(path, "?"),
                            message: "mapping keys must be strings".to_string(),
                        });
                        continue;
                    }
                };
                let child_path = join_path(path, &key_name);
                match base_map.get_mut(key) {
                    Some(base_value) => {
                        merge_at(base_value, overlay_value, &child_path, report);
                    }
                    None => report.push(ConfigError::UnknownField(child_path)),
                }
            }
        }
        (Value::Mapping(_), _) => {
            report.push(ConfigError::TypeMismatch {
                location: if path.is_empty() {
                    "document root".to_string()
                } else {
                    path.to_string()
                },
                message: "cannot replace a section with a scalar".to_string(),
            });
        }
        (base_slot, overlay_value) => {
            *base_slot = overlay_value.clone();
        }
    }
}

/// Apply one override to `base`.
///
/// Every path segment must already exist; a missing segment is reported as an
/// `UnknownField` with the full dotted path.
pub fn apply_override(base: &mut Value, ov: &Override, report: &mut ValidationReport) {
    let mut slot = base;
    let mut walked = String::new();

    for segment in ov.path.split('.') {
        walked = join_path(&walked, segment);
        let Value::Mapping(map) = slot else {
            report.push(ConfigError::TypeMismatch {
                location: walked,
                message: "path descends into a non-section value".to_string(),
            });
            return;
        };
        let key = Value::String(segment.to_string());
        match map.get_mut(&key) {
            Some(next) => slot = next,
            None => {
                report.push(ConfigError::UnknownField(ov.path.clone()));
                return;
            }
        }
    }

    if matches!(slot, Value::Mapping(_)) && !matches!(ov.value, Value::Mapping(_)) {
        report.push(ConfigError::TypeMismatch {
            location: ov.path.clone(),
            message: "cannot replace a section with a scalar".to_string(),
        });
        return;
    }

    *slot = ov.value.clone();
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}
