//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MissingImportsResult;

use super::loader::{self, ConfigWarning, LoadedConfig};

/// How the type checker is invoked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Executable, optionally with leading arguments (`python -m mypy`)
    #[serde(default = "default_command")]
    pub command: String,

    /// Paths handed to the checker
    #[serde(default = "default_targets")]
    pub targets: Vec<String>,

    /// Extra arguments placed before the targets
    #[serde(default)]
    pub extra_args: Vec<String>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            targets: default_targets(),
            extra_args: Vec::new(),
        }
    }
}

fn default_command() -> String {
    "mypy".to_string()
}

fn default_targets() -> Vec<String> {
    vec![".".to_string()]
}

/// When to color console output
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Console output settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub checker: CheckerConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> MissingImportsResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> MissingImportsResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve project config, user config or defaults, then apply env overrides.
    pub fn discover(project_root: &Path) -> MissingImportsResult<LoadedConfig> {
        loader::discover(project_root, loader::user_config_path())
    }
}
