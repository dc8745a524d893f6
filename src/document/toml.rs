//! Toml dialect (`pyproject.toml`-style files)
//!
//! Backed by `toml_edit` so formatting and comments outside the touched
//! tables survive a rewrite.

use toml_edit::{value, DocumentMut, Item, Table};

use crate::error::{MissingImportsError, MissingImportsResult};

use super::ConfigDocument;

/// In-memory toml file; each section is a top-level table.
#[derive(Debug, Clone, Default)]
pub struct TomlDocument {
    doc: DocumentMut,
}

fn not_a_table(section: &str) -> MissingImportsError {
    MissingImportsError::NotATable {
        section: section.to_string(),
    }
}

impl TomlDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(text: &str) -> MissingImportsResult<Self> {
        Ok(Self {
            doc: text.parse::<DocumentMut>()?,
        })
    }

    /// String value of `key` in the `section` table.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.doc
            .get(section)?
            .as_table_like()?
            .get(key)?
            .as_str()
    }
}

impl ConfigDocument for TomlDocument {
    fn sections(&self) -> Vec<String> {
        self.doc.iter().map(|(key, _)| key.to_string()).collect()
    }

    fn add_to_section(
        &mut self,
        section: &str,
        settings: &[(&str, &str)],
    ) -> MissingImportsResult<()> {
        let table = self
            .doc
            .entry(section)
            .or_insert(Item::Table(Table::new()))
            .as_table_like_mut()
            .ok_or_else(|| not_a_table(section))?;

        for (key, val) in settings {
            // Leave an identical value alone so its formatting is kept.
            if table.get(key).and_then(Item::as_str) == Some(*val) {
                continue;
            }
            table.insert(key, value(*val));
        }
        Ok(())
    }

    fn remove_from_section(
        &mut self,
        section: &str,
        settings: &[(&str, &str)],
    ) -> MissingImportsResult<()> {
        let Some(item) = self.doc.get_mut(section) else {
            return Ok(());
        };
        let table = item
            .as_table_like_mut()
            .ok_or_else(|| not_a_table(section))?;

        for (key, _) in settings {
            table.remove(key);
        }

        if table.is_empty() {
            self.doc.remove(section);
        }
        Ok(())
    }

    fn render(&self) -> String {
        self.doc.to_string()
    }
}
