//! mypy-missing-imports - keep mypy's missing-import suppressions in sync
//!
//! Runs mypy, scrapes the `[import]` diagnostics it reports, and maintains one
//! `[mypy-<package>.*]` section with `ignore_missing_imports = true` per
//! top-level package in an ini or toml config file. Sections for packages
//! that no longer fail to resolve are cleaned up; everything else in the file
//! is left alone.

pub mod checker;
pub mod config;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod extract;
pub mod fs;
pub mod reconcile;
pub mod sections;

// Re-exports for convenience
pub use checker::{find_missing_imports, Checker, MypyChecker};
pub use config::{ColorMode, Config, ConfigWarning};
pub use diagnostics::{parse_line, parse_output, Category, DiagnosticLine};
pub use document::{ConfigDocument, Dialect, IniDocument, TomlDocument};
pub use error::{MissingImportsError, MissingImportsResult};
pub use extract::{missing_imports, missing_imports_from_output, parse_import_error_module};
pub use reconcile::{reconcile, ReconcilePlan};
pub use sections::{derive_sections, is_managed_section, section_name, SECTION_SETTINGS};
