//! Import-error extraction
//!
//! Narrows parsed diagnostics down to `[import]` errors and pulls the
//! unresolved module path out of the message text.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::diagnostics::{parse_output, DiagnosticLine};

/// Known wordings of an unresolved-import message, tried in order.
///
/// Older mypy releases quote the module with `'`, newer ones with `"`.
static IMPORT_ERROR_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        // Skipping analyzing 'google.cloud': found module but no type hints or library stubs
        Regex::new(
            r#"(?x)
            Skipping\sanalyzing\s
            ['"](?P<module>.*?)['"]
            :\sfound\smodule\sbut\sno\stype\shints\sor\slibrary\sstubs"#,
        )
        .unwrap(),
        // Cannot find implementation or library stub for module named 'fastai2.learner'
        Regex::new(
            r#"(?x)
            Cannot\sfind\simplementation\sor\slibrary\sstub\sfor\smodule\snamed\s
            ['"](?P<module>.*?)['"]"#,
        )
        .unwrap(),
    ]
});

/// Extract the module path from an import-error message.
///
/// Returns `None` for wordings that match neither known pattern.
pub fn parse_import_error_module(message: &str) -> Option<&str> {
    IMPORT_ERROR_PATTERNS
        .iter()
        .find_map(|re| re.captures(message))
        .and_then(|caps| caps.name("module"))
        .map(|m| m.as_str())
}

/// Collect the distinct unresolved modules from a stream of diagnostics.
pub fn missing_imports<I>(lines: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = DiagnosticLine>,
{
    let mut modules = BTreeSet::new();

    for line in lines.into_iter().filter(DiagnosticLine::is_import_error) {
        match parse_import_error_module(&line.message) {
            Some("") => tracing::debug!(message = %line.message, "ignoring empty module name"),
            Some(module) => {
                modules.insert(module.to_string());
            }
            None => tracing::debug!(message = %line.message, "unrecognised import error wording"),
        }
    }

    modules
}

/// Parse raw checker output and collect its unresolved modules.
pub fn missing_imports_from_output(output: &str) -> BTreeSet<String> {
    missing_imports(parse_output(output))
}
