//! Whole-file reads and writes for the target config file

use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::error::MissingImportsResult;

/// Read a file, returning `None` if it does not exist.
pub fn read_optional(path: &Path) -> MissingImportsResult<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Write content to a file atomically.
///
/// The content goes to a temp file next to `path` which is then renamed over
/// it, so readers never observe a half-written config.
pub fn write_atomic(path: &Path, content: &str) -> MissingImportsResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
