//! Output styles using owo-colors stylesheet pattern

use owo_colors::Style;

/// Centralized stylesheet for CLI output colors.
#[derive(Default, Clone)]
pub struct Styles {
    /// Passed checks (green)
    pub success: Style,
    /// Failed checks (red)
    pub error: Style,
    /// Warnings (yellow)
    pub warning: Style,
    /// Dimmed/secondary text
    pub dim: Style,
    /// Host names
    pub host: Style,
}

impl Styles {
    /// Apply colors to the stylesheet.
    pub fn colorize(&mut self) {
        self.success = Style::new().green();
        self.error = Style::new().red();
        self.warning = Style::new().yellow();
        self.dim = Style::new().dimmed();
        self.host = Style::new().bold().cyan();
    }
}
