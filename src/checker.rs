//! Type-checker invocation
//!
//! mypy is run with a throwaway config file that forces the options the
//! diagnostic parser depends on (plain single-line output with error codes)
//! and turns off any `ignore_missing_imports` the project already sets.

use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;
use std::process::Command;

use crate::config::CheckerConfig;
use crate::document::{ConfigDocument, IniDocument};
use crate::error::{MissingImportsError, MissingImportsResult};
use crate::extract::missing_imports_from_output;

/// Options written to the `[mypy]` section of the temporary config.
pub const FORCED_OPTIONS: &[(&str, &str)] = &[
    ("ignore_missing_imports", "false"),
    ("no_color_output", "true"),
    ("no_pretty", "true"),
    ("no_error_summary", "true"),
    ("show_error_codes", "true"),
];

/// mypy's exit status for crashes and usage errors.
///
/// Status 1 only means type errors were found, which is the normal case here.
pub const INTERNAL_ERROR_EXIT_CODE: i32 = 2;

/// Something that produces type-checker stdout.
pub trait Checker {
    fn run(&self) -> MissingImportsResult<String>;
}

/// Runs mypy as a subprocess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MypyChecker {
    command: Vec<String>,
    extra_args: Vec<String>,
    targets: Vec<String>,
}

impl MypyChecker {
    /// `command` may include leading arguments, e.g. `python -m mypy`.
    pub fn new(command: &str) -> Self {
        Self {
            command: command.split_whitespace().map(str::to_string).collect(),
            extra_args: Vec::new(),
            targets: vec![".".to_string()],
        }
    }

    pub fn from_config(config: &CheckerConfig) -> Self {
        Self::new(&config.command)
            .with_extra_args(config.extra_args.clone())
            .with_targets(config.targets.clone())
    }

    pub fn with_extra_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }

    pub fn with_targets(mut self, targets: Vec<String>) -> Self {
        self.targets = targets;
        self
    }

    /// Full argument vector for a run using the config file at `config_path`.
    pub fn command_line(&self, config_path: &Path) -> Vec<String> {
        let mut args = self.command.clone();
        args.push("--config-file".to_string());
        args.push(config_path.display().to_string());
        args.extend(self.extra_args.iter().cloned());
        args.extend(self.targets.iter().cloned());
        args
    }

    fn display_command(&self) -> String {
        self.command.join(" ")
    }

    /// The run as a user would type it, minus the generated `--config-file`.
    pub fn describe(&self) -> String {
        self.command
            .iter()
            .chain(&self.extra_args)
            .chain(&self.targets)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Render the temporary mypy config.
pub fn forced_config() -> MissingImportsResult<String> {
    let mut doc = IniDocument::new();
    doc.add_to_section("mypy", FORCED_OPTIONS)?;
    Ok(doc.render())
}

fn write_forced_config() -> MissingImportsResult<tempfile::NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("mypy_")
        .suffix(".ini")
        .tempfile()?;
    file.write_all(forced_config()?.as_bytes())?;
    file.flush()?;
    Ok(file)
}

impl Checker for MypyChecker {
    fn run(&self) -> MissingImportsResult<String> {
        if self.command.is_empty() {
            return Err(MissingImportsError::CheckerSpawn {
                command: String::new(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty checker command"),
            });
        }

        let config = write_forced_config()?;
        let args = self.command_line(config.path());

        tracing::debug!(command = %args.join(" "), "running type checker");
        let output = Command::new(&args[0])
            .args(&args[1..])
            .output()
            .map_err(|source| MissingImportsError::CheckerSpawn {
                command: self.display_command(),
                source,
            })?;

        let code = output.status.code();
        tracing::debug!(?code, "type checker finished");

        if code == Some(INTERNAL_ERROR_EXIT_CODE) {
            return Err(MissingImportsError::CheckerFailed {
                command: self.display_command(),
                code: INTERNAL_ERROR_EXIT_CODE,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Run the checker and collect the modules it could not resolve.
pub fn find_missing_imports(checker: &dyn Checker) -> MissingImportsResult<BTreeSet<String>> {
    let stdout = checker.run()?;
    Ok(missing_imports_from_output(&stdout))
}
