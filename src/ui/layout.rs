//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Title bar on top, one blank margin row, the list, and the help bar.
pub struct AppLayout {
    pub title_area: Rect,
    pub list_area: Rect,
    pub help_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect, help_height: u16) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),           // title
                Constraint::Length(1),           // margin below title
                Constraint::Min(1),              // list (takes all remaining space)
                Constraint::Length(help_height), // help / status bar
            ])
            .split(area);

        Self {
            title_area: chunks[0],
            list_area: chunks[2],
            help_area: chunks[3],
        }
    }
}
