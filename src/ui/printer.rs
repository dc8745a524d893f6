use crossterm::style::Stylize;

use crate::ui::context::UiContext;
use crate::ui::theme;

/// Message level, each with its own color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

/// Leveled console printer.
///
/// Status messages go to stderr so that stdout only ever carries generated
/// config text or JSON.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    ui: UiContext,
}

impl Printer {
    pub fn new(ui: UiContext) -> Self {
        Self { ui }
    }

    pub fn ui(&self) -> &UiContext {
        &self.ui
    }

    pub fn styled(&self, level: Level, msg: &str) -> String {
        if !self.ui.color {
            return msg.to_string();
        }
        let color = match level {
            Level::Info => theme::colors::INFO,
            Level::Success => theme::colors::SUCCESS,
            Level::Warning => theme::colors::WARNING,
            Level::Error => theme::colors::ERROR,
        };
        format!("{}", msg.with(color))
    }

    pub fn print(&self, level: Level, msg: &str) {
        if self.ui.json {
            return;
        }
        eprintln!("{}", self.styled(level, msg));
    }

    pub fn info(&self, msg: &str) {
        self.print(Level::Info, msg);
    }

    pub fn success(&self, msg: &str) {
        self.print(Level::Success, msg);
    }

    pub fn warn(&self, msg: &str) {
        self.print(Level::Warning, msg);
    }

    /// Uncolored text on stdout.
    pub fn raw(&self, text: &str) {
        print!("{text}");
    }
}
