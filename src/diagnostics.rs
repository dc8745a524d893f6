//! Diagnostic line parser
//!
//! Turns mypy's plain-text output (`--no-pretty --show-error-codes`) into
//! structured records. Anything that does not look like a diagnostic
//! (summaries, continuation lines, blank lines) is skipped.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static DIAGNOSTIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^
        .*?:                                # file name
        \d+:                                # line number
        \s*(?P<category>error|note):\s*     # category
        (?P<message>.*?)                    # message text
        (?:\s+\[(?P<code>.*?)\])?           # optional error code
        $",
    )
    .unwrap()
});

/// Severity of a diagnostic line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Error,
    Note,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Error => "error",
            Category::Note => "note",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticLine {
    pub category: Category,
    pub message: String,
    /// Error code from the trailing `[code]`, if mypy printed one
    pub code: Option<String>,
}

impl DiagnosticLine {
    /// True for `error` lines tagged with the `import` code.
    pub fn is_import_error(&self) -> bool {
        self.category == Category::Error && self.code.as_deref() == Some("import")
    }
}

/// Parse a single trimmed line.
///
/// Returns `None` when the line does not have the
/// `<location>:<line>: <category>: <message> [<code>]` shape.
pub fn parse_line(line: &str) -> Option<DiagnosticLine> {
    let caps = DIAGNOSTIC_RE.captures(line)?;

    let category = match &caps["category"] {
        "error" => Category::Error,
        _ => Category::Note,
    };

    Some(DiagnosticLine {
        category,
        message: caps["message"].to_string(),
        code: caps.name("code").map(|m| m.as_str().to_string()),
    })
}

/// Parse every diagnostic found in a captured stdout blob.
pub fn parse_output(output: &str) -> impl Iterator<Item = DiagnosticLine> + '_ {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let parsed = parse_line(line);
            if parsed.is_none() {
                tracing::trace!(line, "skipping non-diagnostic line");
            }
            parsed
        })
}
