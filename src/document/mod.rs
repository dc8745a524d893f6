//! Structured config documents
//!
//! Both supported dialects expose the same small surface through
//! [`ConfigDocument`] so the reconciler never needs to know which one it is
//! editing.

mod ini;
mod toml;

use std::path::Path;

use crate::error::{MissingImportsError, MissingImportsResult};

pub use self::ini::IniDocument;
pub use self::toml::TomlDocument;

/// Operations the reconciler needs from a config file.
pub trait ConfigDocument {
    /// Names of all top-level sections, in document order.
    fn sections(&self) -> Vec<String>;

    /// Set `settings` in `section`, creating the section if needed.
    ///
    /// Other keys already in the section are left untouched.
    fn add_to_section(&mut self, section: &str, settings: &[(&str, &str)])
        -> MissingImportsResult<()>;

    /// Remove the keys of `settings` from `section`.
    ///
    /// The section itself is dropped once nothing is left in it. Missing
    /// sections or keys are not an error.
    fn remove_from_section(
        &mut self,
        section: &str,
        settings: &[(&str, &str)],
    ) -> MissingImportsResult<()>;

    /// Serialize the document back to text.
    fn render(&self) -> String;
}

/// Supported config file dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `mypy.ini` / `setup.cfg` style
    Ini,
    /// `pyproject.toml` style
    Toml,
}

impl Dialect {
    /// Pick the dialect from a file extension.
    pub fn from_path(path: &Path) -> MissingImportsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("ini") => Ok(Dialect::Ini),
            Some("toml") => Ok(Dialect::Toml),
            _ => Err(MissingImportsError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Parse existing text in this dialect.
    pub fn parse(self, text: &str) -> MissingImportsResult<Box<dyn ConfigDocument>> {
        Ok(match self {
            Dialect::Ini => Box::new(IniDocument::parse(text)?),
            Dialect::Toml => Box::new(TomlDocument::parse(text)?),
        })
    }

    /// A document with no content.
    pub fn empty(self) -> Box<dyn ConfigDocument> {
        match self {
            Dialect::Ini => Box::new(IniDocument::new()),
            Dialect::Toml => Box::new(TomlDocument::new()),
        }
    }
}

/// A config file as loaded from disk.
pub struct LoadedDocument {
    pub dialect: Dialect,
    /// File text as read, `None` when the file does not exist yet
    pub original: Option<String>,
    pub doc: Box<dyn ConfigDocument>,
}

impl LoadedDocument {
    /// Whether `rendered` differs from what is on disk.
    pub fn is_changed(&self, rendered: &str) -> bool {
        self.original.as_deref() != Some(rendered)
    }
}

/// Load a config file, picking the dialect from its extension.
///
/// A file that does not exist yet loads as an empty document.
pub fn load(path: &Path) -> MissingImportsResult<LoadedDocument> {
    let dialect = Dialect::from_path(path)?;
    let original = crate::fs::read_optional(path)?;
    let doc = match &original {
        Some(text) => dialect.parse(text)?,
        None => {
            tracing::debug!(path = %path.display(), "config file does not exist yet");
            dialect.empty()
        }
    };
    Ok(LoadedDocument {
        dialect,
        original,
        doc,
    })
}
