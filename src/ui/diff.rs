use crossterm::style::Stylize;
use similar::{ChangeTag, TextDiff};

use crate::ui::theme;

/// Unified-style diff of a config file, one line per change.
pub fn render_diff(path: &str, old: &str, new: &str, supports_color: bool) -> String {
    let diff = TextDiff::from_lines(old, new);

    let mut out = String::new();
    out.push_str(&color_line(&format!("--- a/{path}"), None, supports_color));
    out.push('\n');
    out.push_str(&color_line(&format!("+++ b/{path}"), None, supports_color));
    out.push('\n');

    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => theme::icons::REMOVED,
            ChangeTag::Insert => theme::icons::ADDED,
            ChangeTag::Equal => " ",
        };
        let value = change.value().trim_end_matches('\n');
        let line = format!("{sign}{value}");
        out.push_str(&color_line(&line, Some(change.tag()), supports_color));
        out.push('\n');
    }

    out
}

fn color_line(s: &str, tag: Option<ChangeTag>, supports_color: bool) -> String {
    if !supports_color {
        return s.to_string();
    }

    let color = match tag {
        None => theme::colors::INFO,
        Some(ChangeTag::Delete) => theme::colors::ERROR,
        Some(ChangeTag::Insert) => theme::colors::SUCCESS,
        Some(ChangeTag::Equal) => theme::colors::DIM,
    };
    format!("{}", s.with(color))
}
