//! Ratatui widget that draws the flattened group/connection list, plus the
//! selection cursor that walks it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::StatefulWidget,
};

use crate::core::flatten::DisplayItem;

use super::theme::Theme;

/// Text drawn for a group without connections.
pub const NO_CONNECTIONS: &str = "(no connections)";

// ───────────────────────────────────────── state ─────────────

/// Selection cursor and scroll offset for the list.
///
/// Every mutator saturates at the list bounds; the cursor never wraps.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionListState {
    /// Index into the flattened list that is currently highlighted.
    pub selected: usize,
    /// First visible row.
    pub offset: usize,
}

impl ConnectionListState {
    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Jump to `index`, clamped to the last row.
    pub fn select(&mut self, index: usize, len: usize) {
        self.selected = index.min(len.saturating_sub(1));
    }

    pub fn page_down(&mut self, len: usize, height: usize) {
        self.select(self.selected.saturating_add(height.max(1)), len);
    }

    pub fn page_up(&mut self, height: usize) {
        self.selected = self.selected.saturating_sub(height.max(1));
    }

    /// Ensure the selected row is visible within the viewport of `height` rows.
    pub fn clamp_scroll(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + height {
            self.offset = self.selected - height + 1;
        }
    }
}

// ───────────────────────────────────────── item renderer ─────

/// Render one row.  Headers sit one indent level in, entries and the
/// placeholder two; the selection overlay is patched over the base style.
pub fn render_item<'a>(item: &'a DisplayItem, is_selected: bool, theme: &Theme) -> Line<'a> {
    let (level, text, base) = match item {
        DisplayItem::GroupHeader(name) => (1, name.as_str(), theme.group),
        DisplayItem::ConnectionEntry(name) => (2, name.as_str(), theme.connection),
        DisplayItem::EmptyPlaceholder => (2, NO_CONNECTIONS, theme.placeholder),
    };

    let style = if is_selected {
        base.patch(theme.selected)
    } else {
        base
    };

    Line::from(vec![
        Span::raw(theme.indent(level)),
        Span::styled(text, style),
    ])
}

// ───────────────────────────────────────── widget ────────────

/// The list widget itself — created fresh each frame.
pub struct ConnectionList<'a> {
    items: &'a [DisplayItem],
    theme: &'a Theme,
}

impl<'a> ConnectionList<'a> {
    pub fn new(items: &'a [DisplayItem], theme: &'a Theme) -> Self {
        Self { items, theme }
    }
}

impl<'a> StatefulWidget for ConnectionList<'a> {
    type State = ConnectionListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let height = area.height as usize;
        state.select(state.selected, self.items.len());
        state.clamp_scroll(height);

        let visible = self
            .items
            .iter()
            .enumerate()
            .skip(state.offset)
            .take(height);

        for (i, (row_idx, item)) in visible.enumerate() {
            let line = render_item(item, row_idx == state.selected, self.theme);
            buf.set_line(area.x, area.y + i as u16, &line, area.width);
        }
    }
}
