//! CLI argument types

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Template;

/// Facies: configuration toolkit for GAN facies training
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "facies")]
#[command(version)]
#[command(about = "Load, resolve and validate GAN facies training configurations")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Validate a configuration document without running anything
    Validate(ValidateArgs),

    /// Display information about a configuration
    Info(InfoArgs),

    /// Write a starter configuration document
    Init(InitArgs),

    /// Resolve a layered configuration and print or save the result
    Resolve(ResolveArgs),
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to the configuration document
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Show a detailed configuration summary after validation
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to the configuration document
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the init command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InitArgs {
    /// Template to write
    #[arg(short, long, default_value = "training")]
    pub template: Template,

    /// Output path (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Run name for the generated document
    #[arg(long, default_value = "base")]
    pub name: String,
}

/// Arguments for the resolve command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ResolveArgs {
    /// Path to the default configuration document
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Experiment overlay documents, merged in order
    #[arg(short, long = "experiment", value_name = "OVERLAY")]
    pub experiments: Vec<PathBuf>,

    /// key.path=value overrides, applied after overlays
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE")]
    pub sets: Vec<String>,

    /// Save the resolved document under this run directory instead of
    /// printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Output format for the info command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(format!("unknown format: {s}. Valid formats: text, json, yaml")),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Yaml => f.write_str("yaml"),
        }
    }
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_validate_command() {
        let cli = parse_args(["facies", "validate", "configs/default.yaml"]).unwrap();
        match cli.command {
            Command::Validate(args) => {
                assert_eq!(args.config, PathBuf::from("configs/default.yaml"));
                assert!(!args.detailed);
            }
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_parse_validate_detailed() {
        let cli = parse_args(["facies", "validate", "c.yaml", "--detailed"]).unwrap();
        match cli.command {
            Command::Validate(args) => assert!(args.detailed),
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_parse_info_format() {
        let cli = parse_args(["facies", "info", "c.yaml", "--format", "json"]).unwrap();
        match cli.command {
            Command::Info(args) => assert_eq!(args.format, OutputFormat::Json),
            _ => panic!("Expected Info command"),
        }
    }

    #[test]
    fn test_parse_info_default_format() {
        let cli = parse_args(["facies", "info", "c.yaml"]).unwrap();
        match cli.command {
            Command::Info(args) => assert_eq!(args.format, OutputFormat::Text),
            _ => panic!("Expected Info command"),
        }
    }

    #[test]
    fn test_parse_init_template() {
        let cli = parse_args(["facies", "init", "--template", "full", "--name", "exp1"]).unwrap();
        match cli.command {
            Command::Init(args) => {
                assert_eq!(args.template, Template::Full);
                assert_eq!(args.name, "exp1");
                assert!(args.output.is_none());
            }
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_parse_resolve_layers() {
        let cli = parse_args([
            "facies",
            "resolve",
            "configs/default.yaml",
            "--experiment",
            "configs/exp/base.yaml",
            "--set",
            "training.g_lr=0.0002",
            "--set",
            "run_name=swept",
        ])
        .unwrap();
        match cli.command {
            Command::Resolve(args) => {
                assert_eq!(args.experiments.len(), 1);
                assert_eq!(args.sets.len(), 2);
            }
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = parse_args(["facies", "--quiet", "validate", "c.yaml"]).unwrap();
        assert!(cli.quiet);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(parse_args(["facies", "info", "c.yaml", "--format", "toml"]).is_err());
    }
}
