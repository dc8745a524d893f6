use std::path::PathBuf;

use clap::Parser;
use mypy_missing_imports::ColorMode;

/// Generate mypy config sections that silence missing-import errors
#[derive(Parser, Debug)]
#[command(name = "mypy-missing-imports")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Without CONFIG_FILE the generated sections are printed as ini to stdout."
)]
pub struct Cli {
    /// mypy config file to update (.ini or .toml), created if missing
    pub config_file: Option<PathBuf>,

    /// Command used to run mypy (e.g. "python -m mypy")
    #[arg(long, value_name = "CMD")]
    pub checker: Option<String>,

    /// Show the changes without writing the config file
    #[arg(long, requires = "config_file")]
    pub dry_run: bool,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// When to use colors
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Paths passed to mypy (defaults to the configured targets)
    #[arg(last = true, value_name = "TARGETS")]
    pub targets: Vec<String>,
}
