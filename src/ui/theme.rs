use crossterm::style::Color;

/// Design tokens for console output.
///
/// Every colored message goes through one of these semantic colors.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Blue;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const ERROR: &str = "✗";
    pub const ADDED: &str = "+";
    pub const REMOVED: &str = "-";
}
