//! Key-binding help bar shown under the list.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::config::{Action, KeyMap};

use super::theme::Theme;

const SEPARATOR: &str = " • ";
/// Bindings per row when the full help is expanded.
const FULL_HELP_COLUMNS: usize = 3;

/// Help bar widget.  A status message, when present, replaces the bindings.
pub struct HelpBar<'a> {
    keys: &'a KeyMap,
    theme: &'a Theme,
    full: bool,
    status: Option<&'a str>,
}

impl<'a> HelpBar<'a> {
    pub fn new(keys: &'a KeyMap, theme: &'a Theme) -> Self {
        Self {
            keys,
            theme,
            full: false,
            status: None,
        }
    }

    pub fn full(mut self, full: bool) -> Self {
        self.full = full;
        self
    }

    pub fn status(mut self, status: Option<&'a str>) -> Self {
        self.status = status;
        self
    }

    /// Rows this bar needs.
    pub fn height(&self) -> u16 {
        self.lines().len() as u16
    }

    pub fn lines(&self) -> Vec<Line<'a>> {
        if let Some(msg) = self.status {
            return vec![Line::from(Span::styled(msg, self.theme.status))];
        }

        if self.full {
            Action::FULL_HELP
                .chunks(FULL_HELP_COLUMNS)
                .map(|row| self.line_for(row))
                .collect()
        } else {
            vec![self.line_for(Action::SHORT_HELP)]
        }
    }

    fn line_for(&self, actions: &[Action]) -> Line<'a> {
        let mut spans = Vec::with_capacity(actions.len() * 4);
        for (i, &action) in actions.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(SEPARATOR, self.theme.help_desc));
            }
            spans.push(Span::styled(self.keys.display_bindings(action), self.theme.help_key));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(action.label(), self.theme.help_desc));
        }
        Line::from(spans)
    }
}

impl<'a> Widget for HelpBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines()).render(area, buf);
    }
}
