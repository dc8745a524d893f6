//! Error types for mypy-missing-imports
//!
//! Library code returns `MissingImportsResult`; the binary wraps it in
//! `anyhow` and decides the exit status.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for library operations
pub type MissingImportsResult<T> = Result<T, MissingImportsError>;

/// Main error type for library operations
#[derive(Error, Debug)]
pub enum MissingImportsError {
    /// Target file is neither `.ini` nor `.toml`
    #[error("unsupported file format for {path}, only ini/toml are supported")]
    UnsupportedFormat { path: PathBuf },

    /// Existing ini file could not be parsed
    #[error("invalid ini at line {line}: {message}")]
    IniParse { line: usize, message: String },

    /// Existing toml file could not be parsed
    #[error("invalid toml: {0}")]
    TomlParse(#[from] toml_edit::TomlError),

    /// A managed top-level toml key holds something other than a table
    #[error("section '{section}' is not a table")]
    NotATable { section: String },

    /// The checker reported an internal or usage error
    #[error("{command} failed with exit status {code}\n{stderr}")]
    CheckerFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    /// The checker executable could not be started
    #[error("failed to run '{command}': {source}")]
    CheckerSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Tool configuration file is invalid
    #[error("invalid config in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MissingImportsError {
    /// Process exit status the binary should use for this error.
    ///
    /// Checker failures pass the checker's own status through.
    pub fn exit_code(&self) -> i32 {
        match self {
            MissingImportsError::CheckerFailed { code, .. } => *code,
            _ => 1,
        }
    }
}
