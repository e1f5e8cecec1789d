//! Visual theme and styling.

use console::Style;

/// pyem's visual theme.
#[derive(Debug, Clone)]
pub struct PyemTheme {
    /// Success messages (green).
    pub success: Style,
    /// Error messages (red bold).
    pub error: Style,
    /// The active environment in listings (cyan bold).
    pub active: Style,
    /// Follow-up suggestions.
    pub hint: Style,
}

impl Default for PyemTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl PyemTheme {
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
            active: Style::new().cyan().bold(),
            hint: Style::new().cyan().dim(),
        }
    }

    /// A theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            active: Style::new(),
            hint: Style::new(),
        }
    }

    /// Theme matching the current terminal.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    pub fn format_hint(&self, msg: &str) -> String {
        format!("{}", self.hint.apply_to(msg))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_adds_icons_only() {
        let theme = PyemTheme::plain();
        assert_eq!(theme.format_success("Created"), "✓ Created");
        assert_eq!(theme.format_error("Failed"), "✗ Failed");
        assert_eq!(theme.format_hint("Run it"), "Run it");
    }

    #[test]
    fn colored_theme_keeps_text() {
        let theme = PyemTheme::new();
        assert!(theme.format_success("Created").contains("Created"));
    }
}
