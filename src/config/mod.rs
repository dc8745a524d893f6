//! Tool configuration
//!
//! Settings are resolved in this order (highest priority first):
//! 1. CLI flags
//! 2. Environment variables (`MYPY_MISSING_IMPORTS_*`)
//! 3. Project config (`.mypy-missing-imports.toml` in the working directory)
//! 4. User config (`<config dir>/mypy-missing-imports/config.toml`)
//! 5. Built-in defaults

mod loader;
mod types;

pub use loader::{
    load_with_warnings, user_config_path, with_env_overrides, ConfigWarning, LoadedConfig,
    ENV_CHECKER, ENV_COLOR, PROJECT_CONFIG_FILE,
};
pub use types::{CheckerConfig, ColorMode, Config, OutputConfig};
