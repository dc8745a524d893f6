//! Ini dialect (`mypy.ini`)
//!
//! A small line-oriented model rather than a full ini library: comments must
//! survive a rewrite, and lookups are exact and case-sensitive. Text after a
//! header's closing `]` and blank lines inside multi-line values are kept;
//! other blank lines and the spacing around `=` are not.

use std::str::FromStr;

use crate::error::{MissingImportsError, MissingImportsResult};

use super::ConfigDocument;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Comment(String),
    Setting { key: String, value: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Section {
    /// Comments directly above the header; they go away with the section
    leading: Vec<String>,
    name: String,
    /// Whatever followed the closing `]`, e.g. `# main`
    trailer: String,
    entries: Vec<Entry>,
}

impl Section {
    fn new(name: &str) -> Self {
        Self {
            leading: Vec::new(),
            name: name.to_string(),
            trailer: String::new(),
            entries: Vec::new(),
        }
    }

    fn setting_mut(&mut self, key: &str) -> Option<&mut Option<String>> {
        self.entries.iter_mut().find_map(|entry| match entry {
            Entry::Setting { key: k, value } if k.as_str() == key => Some(value),
            _ => None,
        })
    }

    fn has_setting(&self, key: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| matches!(entry, Entry::Setting { key: k, .. } if k == key))
    }
}

/// In-memory ini file.
///
/// Comment lines (`#` or `;`) are kept in place, including any that appear
/// before the first section header. A run of comments sitting right above a
/// header belongs to that header's section, unless it hangs off the previous
/// setting with a blank line before the header. Keys without a value are
/// allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    preamble: Vec<String>,
    sections: Vec<Section>,
}

fn is_comment(line: &str) -> bool {
    line.starts_with('#') || line.starts_with(';')
}

fn parse_error(line: usize, message: impl Into<String>) -> MissingImportsError {
    MissingImportsError::IniParse {
        line,
        message: message.into(),
    }
}

/// Trailing comments of the current section that may move to the next header.
#[derive(Debug, Clone, Copy)]
struct CommentRun {
    start: usize,
    /// Began on the line right after a setting or header
    glued: bool,
}

impl IniDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse ini text.
    ///
    /// Settings outside a section, duplicate sections, duplicate keys within
    /// a section and headers without a closing `]` are rejected. As in
    /// Python's configparser, the section name runs up to the last `]` and
    /// blank lines may sit between a value and its continuation lines.
    pub fn parse(text: &str) -> MissingImportsResult<Self> {
        let mut doc = IniDocument::new();
        // Continuation lines only attach to the setting directly above them.
        let mut continuable = false;
        let mut pending_blanks = 0usize;
        let mut after_blank = false;
        let mut run: Option<CommentRun> = None;

        for (idx, raw) in text.lines().enumerate() {
            let lineno = idx + 1;
            let line = raw.trim();

            if line.is_empty() {
                if continuable {
                    pending_blanks += 1;
                }
                after_blank = true;
                continue;
            }

            if continuable && raw.starts_with(char::is_whitespace) {
                if let Some(Entry::Setting {
                    value: Some(value), ..
                }) = doc.sections.last_mut().and_then(|s| s.entries.last_mut())
                {
                    for _ in 0..pending_blanks {
                        value.push('\n');
                    }
                    value.push('\n');
                    value.push_str(line);
                    pending_blanks = 0;
                    after_blank = false;
                    continue;
                }
            }
            continuable = false;
            pending_blanks = 0;
            let blank_above = std::mem::take(&mut after_blank);

            if is_comment(line) {
                match doc.sections.last_mut() {
                    Some(section) => {
                        let index = section.entries.len();
                        run = match run {
                            None => Some(CommentRun {
                                start: index,
                                glued: !blank_above,
                            }),
                            Some(current) if current.glued && blank_above => Some(CommentRun {
                                start: index,
                                glued: false,
                            }),
                            current => current,
                        };
                        section.entries.push(Entry::Comment(line.to_string()));
                    }
                    None => doc.preamble.push(line.to_string()),
                }
                continue;
            }

            if line.starts_with('[') {
                let close = line
                    .rfind(']')
                    .ok_or_else(|| parse_error(lineno, format!("unterminated section header '{line}'")))?;
                let name = &line[1..close];
                if name.is_empty() {
                    return Err(parse_error(lineno, "empty section name"));
                }
                if doc.section(name).is_some() {
                    return Err(parse_error(lineno, format!("duplicate section '{name}'")));
                }

                let mut section = Section::new(name);
                section.trailer = line[close + 1..].to_string();
                if let (Some(comments), Some(previous)) = (run.take(), doc.sections.last_mut()) {
                    if !(comments.glued && blank_above) {
                        section.leading = previous
                            .entries
                            .split_off(comments.start)
                            .into_iter()
                            .filter_map(|entry| match entry {
                                Entry::Comment(text) => Some(text),
                                Entry::Setting { .. } => None,
                            })
                            .collect();
                    }
                }
                doc.sections.push(section);
                continue;
            }

            let Some(section) = doc.sections.last_mut() else {
                return Err(parse_error(lineno, "setting appears before any section header"));
            };

            let (key, value) = match line.find(['=', ':']) {
                Some(pos) => (line[..pos].trim_end(), Some(line[pos + 1..].trim_start())),
                None => (line, None),
            };
            if key.is_empty() {
                return Err(parse_error(lineno, "setting has no key"));
            }
            if section.has_setting(key) {
                return Err(parse_error(
                    lineno,
                    format!("duplicate key '{key}' in section '{}'", section.name),
                ));
            }

            continuable = value.is_some();
            run = None;
            section.entries.push(Entry::Setting {
                key: key.to_string(),
                value: value.map(str::to_string),
            });
        }

        Ok(doc)
    }

    fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.name == name)
    }

    /// Value of `key` in `section`; `Some(None)` for a key without a value.
    pub fn get(&self, section: &str, key: &str) -> Option<Option<&str>> {
        self.section(section)?
            .entries
            .iter()
            .find_map(|entry| match entry {
                Entry::Setting { key: k, value } if k == key => Some(value.as_deref()),
                _ => None,
            })
    }
}

impl FromStr for IniDocument {
    type Err = MissingImportsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IniDocument::parse(s)
    }
}

impl ConfigDocument for IniDocument {
    fn sections(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.name.clone()).collect()
    }

    fn add_to_section(
        &mut self,
        section: &str,
        settings: &[(&str, &str)],
    ) -> MissingImportsResult<()> {
        if self.section(section).is_none() {
            self.sections.push(Section::new(section));
        }
        let Some(target) = self.section_mut(section) else {
            return Ok(());
        };

        for (key, value) in settings {
            match target.setting_mut(key) {
                Some(existing) => *existing = Some(value.to_string()),
                None => target.entries.push(Entry::Setting {
                    key: key.to_string(),
                    value: Some(value.to_string()),
                }),
            }
        }
        Ok(())
    }

    fn remove_from_section(
        &mut self,
        section: &str,
        settings: &[(&str, &str)],
    ) -> MissingImportsResult<()> {
        let Some(target) = self.section_mut(section) else {
            return Ok(());
        };

        target.entries.retain(|entry| match entry {
            Entry::Setting { key, .. } => !settings.iter().any(|(k, _)| *k == key.as_str()),
            Entry::Comment(_) => true,
        });

        if target.entries.is_empty() {
            self.sections.retain(|s| s.name != section);
        }
        Ok(())
    }

    fn render(&self) -> String {
        let mut out = String::new();

        // Comments above the first header read back as preamble.
        let first_leading = self.sections.first().map(|s| s.leading.as_slice());
        let head: Vec<&String> = self
            .preamble
            .iter()
            .chain(first_leading.unwrap_or_default())
            .collect();
        for comment in &head {
            out.push_str(comment);
            out.push('\n');
        }
        if !head.is_empty() && !self.sections.is_empty() {
            out.push('\n');
        }

        for (idx, section) in self.sections.iter().enumerate() {
            if idx > 0 {
                for comment in &section.leading {
                    out.push_str(comment);
                    out.push('\n');
                }
            }
            out.push('[');
            out.push_str(&section.name);
            out.push(']');
            out.push_str(&section.trailer);
            out.push('\n');
            for entry in &section.entries {
                match entry {
                    Entry::Comment(text) => out.push_str(text),
                    Entry::Setting { key, value: None } => out.push_str(key),
                    Entry::Setting {
                        key,
                        value: Some(value),
                    } => {
                        out.push_str(key);
                        render_value(&mut out, value);
                    }
                }
                out.push('\n');
            }
            out.push('\n');
        }

        out
    }
}

/// Writes ` = value`, indenting continuation lines and leaving blank ones bare.
fn render_value(out: &mut String, value: &str) {
    let mut lines = value.split('\n');
    match lines.next() {
        Some(first) if !first.is_empty() => {
            out.push_str(" = ");
            out.push_str(first);
        }
        _ => out.push_str(" ="),
    }
    for line in lines {
        out.push('\n');
        if !line.is_empty() {
            out.push('\t');
            out.push_str(line);
        }
    }
}
