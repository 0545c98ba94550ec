//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use ratatui::layout::Rect;

use crate::config::KeyMap;
use crate::core::flatten::DisplayItem;
use crate::ui::{
    connection_list::ConnectionListState, help::HelpBar, layout::AppLayout, theme::Theme,
};

/// Top-level application state.
pub struct AppState {
    /// Flattened group/connection rows, fixed after startup.
    pub items: Vec<DisplayItem>,
    /// Selection cursor and scroll offset.
    pub list_state: ConnectionListState,
    /// Last known terminal size.
    pub viewport: Rect,
    pub keys: KeyMap,
    pub theme: Theme,
    /// Show every binding in the help bar instead of the short list.
    pub show_full_help: bool,
    /// One-shot message shown in place of the help bar.
    pub status_message: Option<String>,
    /// Controls the main event loop.
    pub should_quit: bool,
}

impl AppState {
    pub fn new(items: Vec<DisplayItem>, viewport: Rect) -> Self {
        Self {
            items,
            list_state: ConnectionListState::default(),
            viewport,
            keys: KeyMap::default(),
            theme: Theme::default(),
            show_full_help: false,
            status_message: None,
            should_quit: false,
        }
    }

    /// The row under the cursor, if the list is non-empty.
    pub fn selected_item(&self) -> Option<&DisplayItem> {
        self.items.get(self.list_state.selected)
    }

    pub fn help_bar(&self) -> HelpBar<'_> {
        HelpBar::new(&self.keys, &self.theme)
            .full(self.show_full_help)
            .status(self.status_message.as_deref())
    }

    pub fn layout(&self, area: Rect) -> AppLayout {
        AppLayout::from_area(area, self.help_bar().height())
    }

    /// Rows of the list visible in the current viewport.
    pub fn list_height(&self) -> usize {
        self.layout(self.viewport).list_area.height as usize
    }
}
