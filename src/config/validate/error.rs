//! Validation error taxonomy
//!
//! Every fault a configuration document can carry maps to one `ConfigError`
//! variant. Semantic checks collect into a `ValidationReport` so a single
//! failed load lists every violation at once.

use std::fmt;

/// A single configuration fault
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("type mismatch at {location}: {message}")]
    TypeMismatch { location: String, message: String },

    #[error("invalid value for {field}: '{value}' (expected one of: {expected})")]
    InvalidEnumValue {
        field: String,
        value: String,
        expected: &'static str,
    },

    #[error("{field} out of range: {value} (must be {constraint})")]
    OutOfRange {
        field: String,
        value: String,
        constraint: &'static str,
    },

    #[error("unknown field: {0}")]
    UnknownField(String),
}

/// Aggregated faults for one document
///
/// Collects every violation found during validation or overlay merging.
/// `into_result` turns an empty report into `Ok(())`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationReport {
    errors: Vec<ConfigError>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ConfigError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ConfigError] {
        &self.errors
    }

    pub fn into_result(self) -> Result<(), ValidationReport> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "configuration has {} error{}:",
            self.errors.len(),
            if self.errors.len() == 1 { "" } else { "s" }
        )?;
        for error in &self.errors {
            writeln!(f, "  - {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

/// Classify a serde_yaml parse failure into the taxonomy above.
///
/// The serde layer stops at the first fault, so this always yields exactly
/// one `ConfigError`. Field names are recovered from the error message;
/// everything else keeps the parser's location information.
pub(crate) fn classify_parse_error(err: &serde_yaml::Error) -> ConfigError {
    let message = err.to_string();

    if let Some(field) = backquoted_after(&message, "missing field `") {
        return ConfigError::MissingField(field);
    }
    if let Some(field) = backquoted_after(&message, "unknown field `") {
        return ConfigError::UnknownField(field);
    }

    let location = err
        .location()
        .map(|loc| format!("line {}, column {}", loc.line(), loc.column()))
        .unwrap_or_else(|| "document".to_string());
    ConfigError::TypeMismatch { location, message }
}

fn backquoted_after(message: &str, prefix: &str) -> Option<String> {
    let rest = message.split(prefix).nth(1)?;
    rest.split('`').next().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Probe {
        #[allow(dead_code)]
        needed: u32,
    }

    #[test]
    fn test_report_display_lists_every_error() {
        let mut report = ValidationReport::new();
        report.push(ConfigError::MissingField("run_name".to_string()));
        report.push(ConfigError::OutOfRange {
            field: "training.log_step".to_string(),
            value: "0".to_string(),
            constraint: ">= 1",
        });

        let text = report.to_string();
        assert!(text.contains("2 errors"));
        assert!(text.contains("run_name"));
        assert!(text.contains("training.log_step"));
    }

    #[test]
    fn test_report_singular_header() {
        let mut report = ValidationReport::new();
        report.push(ConfigError::UnknownField("training.warmup".to_string()));
        assert!(report.to_string().contains("1 error:"));
    }

    #[test]
    fn test_empty_report_into_result() {
        assert!(ValidationReport::new().into_result().is_ok());
    }

    #[test]
    fn test_classify_missing_field() {
        let err = serde_yaml::from_str::<Probe>("{}").unwrap_err();
        let classified = classify_parse_error(&err);
        assert_eq!(classified, ConfigError::MissingField("needed".to_string()));
    }

    #[test]
    fn test_classify_type_mismatch() {
        let err = serde_yaml::from_str::<Probe>("needed: [1, 2]").unwrap_err();
        match classify_parse_error(&err) {
            ConfigError::TypeMismatch { message, .. } => {
                assert!(message.contains("invalid type"));
            }
            other => panic!("expected TypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_unknown_field() {
        let err = serde_yaml::from_str::<Probe>("needed: 1\nstray: 2").unwrap_err();
        let classified = classify_parse_error(&err);
        assert_eq!(classified, ConfigError::UnknownField("stray".to_string()));
    }
}
