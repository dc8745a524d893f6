use mypy_missing_imports::MissingImportsError;

use crate::ui::printer::{Level, Printer};
use crate::ui::theme;

pub fn format_error(err: &anyhow::Error, printer: &Printer) -> String {
    let (headline, fix) = match err.downcast_ref::<MissingImportsError>() {
        Some(MissingImportsError::UnsupportedFormat { .. }) => (
            err.to_string(),
            Some("Pass a .ini or .toml file, or omit the argument to print the config instead."),
        ),
        Some(MissingImportsError::CheckerSpawn { .. }) => (
            format!("{err:#}"),
            Some("Install mypy, or point --checker / MYPY_MISSING_IMPORTS_CHECKER at it."),
        ),
        Some(MissingImportsError::IniParse { .. } | MissingImportsError::TomlParse(_)) => (
            format!("{err:#}"),
            Some("Fix the config file syntax and try again; nothing was written."),
        ),
        _ => (format!("{err:#}"), None),
    };

    let label = if printer.ui().color {
        printer.styled(Level::Error, &format!("{} ERROR", theme::icons::ERROR))
    } else {
        "[ERROR]".to_string()
    };

    let mut out = format!("{label} {headline}\n");
    if let Some(fix) = fix {
        out.push_str(&format!("  ↳ {fix}\n"));
    }
    out
}

pub fn print_error(err: &anyhow::Error, printer: &Printer) {
    if printer.ui().json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{err:#}"),
        });
        println!("{output}");
        return;
    }

    eprint!("{}", format_error(err, printer));
}
