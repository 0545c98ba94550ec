//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Styling configuration handed to every widget that draws something.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // ── list ───────────────────────────────────────────────────
    pub group: Style,
    pub connection: Style,
    pub placeholder: Style,
    /// Overlay patched onto the base style of the selected row.
    pub selected: Style,
    /// Columns per indent level.
    pub indent_width: usize,

    // ── chrome ─────────────────────────────────────────────────
    pub title: Style,
    pub help_key: Style,
    pub help_desc: Style,
    pub status: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            group: Style::default().add_modifier(Modifier::BOLD),
            connection: Style::default(),
            placeholder: Style::default().fg(Color::DarkGray),
            selected: Style::default().add_modifier(Modifier::UNDERLINED),
            indent_width: 2,
            title: Style::default().fg(Color::Black).bg(Color::White),
            help_key: Style::default().fg(Color::Gray),
            help_desc: Style::default().fg(Color::DarkGray),
            status: Style::default().fg(Color::Yellow),
        }
    }
}

impl Theme {
    /// No colours or modifiers at all, indentation kept.
    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            group: Style::default(),
            connection: Style::default(),
            placeholder: Style::default(),
            selected: Style::default(),
            indent_width: 2,
            title: Style::default(),
            help_key: Style::default(),
            help_desc: Style::default(),
            status: Style::default(),
        }
    }

    /// Leading whitespace for the given indent level.
    pub fn indent(&self, level: usize) -> String {
        " ".repeat(self.indent_width * level)
    }
}
