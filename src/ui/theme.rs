//! Log colors.

use console::Style;

/// Styles for the labelled log written to stderr.
///
/// The palette matches the rest of the distribution's scripts so Alien
/// output blends in with theirs.
#[derive(Debug, Clone)]
pub struct LogTheme {
    /// Style for the `label:` prefix (gray).
    pub label: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for normal messages (cyan).
    pub normal: Style,
    /// Style for terse messages and questions (cyan bold).
    pub terse: Style,
    /// Style for verbose messages (uncolored).
    pub verbose: Style,
    /// Style for debug messages (white on red).
    pub debug: Style,
}

impl Default for LogTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl LogTheme {
    /// Colored theme; colors appear only when stderr supports them.
    pub fn new() -> Self {
        Self {
            label: Style::new().black().bold().for_stderr(),
            error: Style::new().red().bold().for_stderr(),
            normal: Style::new().cyan().for_stderr(),
            terse: Style::new().cyan().bold().for_stderr(),
            verbose: Style::new().for_stderr(),
            debug: Style::new().white().on_red().for_stderr(),
        }
    }

    /// Colored theme that always emits escape codes.
    pub fn forced() -> Self {
        let theme = Self::new();
        Self {
            label: theme.label.force_styling(true),
            error: theme.error.force_styling(true),
            normal: theme.normal.force_styling(true),
            terse: theme.terse.force_styling(true),
            verbose: theme.verbose.force_styling(true),
            debug: theme.debug.force_styling(true),
        }
    }

    /// Create a theme without colors (for non-TTY or `NO_COLOR`).
    pub fn plain() -> Self {
        Self {
            label: Style::new(),
            error: Style::new(),
            normal: Style::new(),
            terse: Style::new(),
            verbose: Style::new(),
            debug: Style::new(),
        }
    }

    /// Pick [`LogTheme::new`] or [`LogTheme::plain`] for the current stderr.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }
}

/// Check if colors should be enabled on stderr.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stderr().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_adds_no_escapes() {
        let theme = LogTheme::plain();
        assert_eq!(theme.error.apply_to("boom").to_string(), "boom");
        assert_eq!(theme.label.apply_to("Alien:").to_string(), "Alien:");
    }

    #[test]
    fn forced_theme_emits_escapes() {
        let theme = LogTheme::forced();
        let rendered = theme.error.apply_to("boom").to_string();
        assert!(rendered.contains("\u{1b}["));
        assert!(rendered.contains("boom"));
    }

    #[test]
    fn verbose_style_has_no_color() {
        let theme = LogTheme::forced();
        assert!(!theme.verbose.apply_to("plain").to_string().contains("31m"));
    }
}
