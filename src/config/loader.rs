//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MissingImportsError, MissingImportsResult};

use super::types::{ColorMode, Config};

/// Project config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".mypy-missing-imports.toml";

/// Overrides `checker.command`.
pub const ENV_CHECKER: &str = "MYPY_MISSING_IMPORTS_CHECKER";

/// Overrides `output.color` (`auto`, `always`, `never`).
pub const ENV_COLOR: &str = "MYPY_MISSING_IMPORTS_COLOR";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Resolved configuration plus where it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the settings were read from; `None` for built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> MissingImportsResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MissingImportsError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Location of the per-user config file.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mypy-missing-imports").join("config.toml"))
}

/// First existing config file wins: project, then user, then defaults.
pub(crate) fn discover(
    project_root: &Path,
    user_config: Option<PathBuf>,
) -> MissingImportsResult<LoadedConfig> {
    let candidates = std::iter::once(project_root.join(PROJECT_CONFIG_FILE)).chain(user_config);

    for path in candidates {
        if !path.is_file() {
            continue;
        }
        tracing::debug!(path = %path.display(), "loading config");
        let (config, warnings) = load_with_warnings(&path)?;
        return Ok(LoadedConfig {
            config: with_env_overrides(config, |key| std::env::var(key).ok()),
            source: Some(path),
            warnings,
        });
    }

    Ok(LoadedConfig {
        config: with_env_overrides(Config::default(), |key| std::env::var(key).ok()),
        ..LoadedConfig::default()
    })
}

/// Apply environment variable overrides (`MYPY_MISSING_IMPORTS_*` prefix)
pub fn with_env_overrides(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(command) = get_env(ENV_CHECKER).filter(|c| !c.trim().is_empty()) {
        config.checker.command = command;
    }

    if let Some(color) = get_env(ENV_COLOR).as_deref().and_then(ColorMode::parse) {
        config.output.color = color;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["checker", "command", "targets", "extra_args", "output", "color"];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
