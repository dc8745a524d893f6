//! Suppression section naming
//!
//! One `[mypy-<package>.*]` section per top-level package, each carrying the
//! same fixed settings.

use std::collections::BTreeSet;

/// Prefix shared by every section this tool manages.
pub const SECTION_PREFIX: &str = "mypy-";

/// Settings written to (and removed from) every managed section.
pub const SECTION_SETTINGS: &[(&str, &str)] = &[("ignore_missing_imports", "true")];

/// First dotted segment of a module path.
pub fn top_level_package(module: &str) -> &str {
    module.split('.').next().unwrap_or(module)
}

/// Section name for a top-level package, e.g. `mypy-numpy.*`.
pub fn section_name(package: &str) -> String {
    format!("{SECTION_PREFIX}{package}.*")
}

/// Whether a section follows this tool's naming convention.
pub fn is_managed_section(name: &str) -> bool {
    name.starts_with(SECTION_PREFIX)
}

/// Map module paths to their sorted, deduplicated section names.
///
/// `a`, `a.b` and `a.c` all collapse into a single `mypy-a.*`.
pub fn derive_sections<I, S>(modules: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    modules
        .into_iter()
        .map(|m| section_name(top_level_package(m.as_ref())))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
