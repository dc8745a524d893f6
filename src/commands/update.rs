use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mypy_missing_imports::checker::{find_missing_imports, Checker, MypyChecker};
use mypy_missing_imports::config::CheckerConfig;
use mypy_missing_imports::document::{self, Dialect};
use mypy_missing_imports::{derive_sections, reconcile, IniDocument, ReconcilePlan};

use crate::ui::diff::render_diff;
use crate::ui::printer::Printer;

/// What the user asked for on the command line.
#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    pub config_file: Option<PathBuf>,
    pub checker: Option<String>,
    pub targets: Vec<String>,
    pub dry_run: bool,
}

/// Build the checker from tool config, letting CLI values win.
pub fn build_checker(options: &UpdateOptions, config: &CheckerConfig) -> MypyChecker {
    let mut checker_config = config.clone();
    if let Some(command) = &options.checker {
        checker_config.command = command.clone();
    }
    if !options.targets.is_empty() {
        checker_config.targets = options.targets.clone();
    }
    MypyChecker::from_config(&checker_config)
}

pub fn cmd_update(options: &UpdateOptions, config: &CheckerConfig, printer: &Printer) -> Result<()> {
    let checker = build_checker(options, config);
    if printer.ui().verbose > 0 {
        printer.info(&format!("> Running {}", checker.describe()));
    }
    run_update(options, &checker, printer)
}

pub fn run_update(options: &UpdateOptions, checker: &dyn Checker, printer: &Printer) -> Result<()> {
    // Reject unsupported targets before spending time in mypy.
    if let Some(path) = &options.config_file {
        Dialect::from_path(path)?;
    }

    let missing = find_missing_imports(checker)?;
    if missing.is_empty() {
        tracing::debug!("no missing imports reported");
        if printer.ui().verbose > 0 {
            printer.info("> No missing imports found");
        }
        if printer.ui().json {
            println!("{}", serde_json::json!({ "event": "no_missing_imports" }));
        }
        return Ok(());
    }

    let modules: Vec<&str> = missing.iter().map(String::as_str).collect();
    printer.info(&format!("> Found missing imports for {}", modules.join(",")));

    let sections = derive_sections(&missing);

    match &options.config_file {
        Some(path) => update_file(path, &sections, &modules, options.dry_run, printer),
        None => print_config(&sections, &modules, printer),
    }
}

fn print_config(sections: &[String], modules: &[&str], printer: &Printer) -> Result<()> {
    let mut doc = IniDocument::new();
    let text = reconcile(&mut doc, sections)?;

    if printer.ui().json {
        let output = serde_json::json!({
            "event": "preview",
            "modules": modules,
            "sections": sections,
            "content": text,
        });
        println!("{output}");
    } else {
        printer.raw(&text);
    }
    Ok(())
}

fn update_file(
    path: &Path,
    sections: &[String],
    modules: &[&str],
    dry_run: bool,
    printer: &Printer,
) -> Result<()> {
    let mut loaded =
        document::load(path).with_context(|| format!("failed to load {}", path.display()))?;
    if loaded.original.is_none() {
        tracing::debug!(path = %path.display(), "creating new config file");
    }

    let plan = mypy_missing_imports::reconcile::apply(&mut *loaded.doc, sections)?;
    let text = loaded.doc.render();
    let old = loaded.original.as_deref().unwrap_or("");

    if dry_run {
        if printer.ui().json {
            print_json_result("dry_run", path, modules, &plan);
        } else {
            let display = path.display().to_string();
            printer.raw(&render_diff(&display, old, &text, printer.ui().color));
        }
        return Ok(());
    }

    if loaded.is_changed(&text) {
        mypy_missing_imports::fs::write_atomic(path, &text)
            .with_context(|| format!("failed to write {}", path.display()))?;
    } else {
        tracing::debug!(path = %path.display(), "config file already up to date");
    }

    if printer.ui().json {
        print_json_result("updated", path, modules, &plan);
        return Ok(());
    }

    printer.success(&format!("> Updated file {}", path.display()));
    for section in &plan.added {
        printer.success(&format!("  + [{section}]"));
    }
    for section in &plan.removed {
        printer.warn(&format!("  - [{section}]"));
    }
    Ok(())
}

fn print_json_result(event: &str, path: &Path, modules: &[&str], plan: &ReconcilePlan) {
    let output = serde_json::json!({
        "event": event,
        "path": path.display().to_string(),
        "modules": modules,
        "plan": plan,
    });
    println!("{output}");
}
