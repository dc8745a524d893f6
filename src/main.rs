//! mypy-missing-imports CLI
//!
//! Usage: mypy-missing-imports [CONFIG_FILE] [-- TARGETS...]
//!
//! Runs mypy, collects the modules it cannot resolve and writes one
//! `[mypy-<package>.*]` section per top-level package into CONFIG_FILE
//! (or prints them when no file is given).

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use mypy_missing_imports::{ColorMode, Config, ConfigWarning, MissingImportsError};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod ui;

use cli::Cli;
use commands::update::{cmd_update, UpdateOptions};
use ui::context::UiContext;
use ui::printer::Printer;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Tool config may itself fail to load, so start from CLI-only settings.
    let early = Printer::new(UiContext::new(cli.json, cli.verbose, cli.color, ColorMode::default()));
    let config = match load_config(&early) {
        Ok(config) => config,
        Err(err) => return fail(&err, &early),
    };

    let printer = Printer::new(UiContext::new(
        cli.json,
        cli.verbose,
        cli.color,
        config.output.color,
    ));
    let options = UpdateOptions {
        config_file: cli.config_file,
        checker: cli.checker,
        targets: cli.targets,
        dry_run: cli.dry_run,
    };

    match cmd_update(&options, &config.checker, &printer) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(&err, &printer),
    }
}

fn fail(err: &anyhow::Error, printer: &Printer) -> ExitCode {
    ui::error::print_error(err, printer);
    ExitCode::from(exit_status(err))
}

fn load_config(printer: &Printer) -> Result<Config> {
    let cwd = std::env::current_dir().context("failed to determine working directory")?;
    let loaded = Config::discover(&cwd)?;

    if let Some(source) = &loaded.source {
        tracing::debug!(path = %source.display(), "using tool config");
    }
    for warning in &loaded.warnings {
        printer.warn(&format_config_warning(warning));
    }

    Ok(loaded.config)
}

fn format_config_warning(warning: &ConfigWarning) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut msg = format!("Warning: unknown config key '{}' in {}", warning.key, location);
    if let Some(suggestion) = &warning.suggestion {
        msg.push_str(&format!(". Did you mean '{suggestion}'?"));
    }
    msg
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn exit_status(err: &anyhow::Error) -> u8 {
    let code = err
        .downcast_ref::<MissingImportsError>()
        .map(MissingImportsError::exit_code)
        .unwrap_or(1);
    u8::try_from(code).ok().filter(|c| *c != 0).unwrap_or(1)
}
