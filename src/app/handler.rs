//! Input handling — maps key and resize events to state mutations.
//!
//! There is a single browsing view; every key either moves the cursor,
//! toggles the help, requests a connection or quits.

use crossterm::event::{KeyEvent, KeyEventKind};
use ratatui::layout::Rect;

use crate::config::{is_interrupt, Action};

use super::event::AppEvent;
use super::state::AppState;

/// Dispatch one event from the reader.
pub fn handle_event(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(state, key),
        AppEvent::Resize(width, height) => handle_resize(state, width, height),
        AppEvent::Tick => {}
    }
}

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl+c always quits, regardless of bindings.
    if is_interrupt(key) {
        state.should_quit = true;
        return;
    }

    // Any key press dismisses the previous status message.
    state.status_message = None;

    let Some(action) = state.keys.match_key(key) else {
        return;
    };

    let len = state.items.len();
    match action {
        Action::Quit => state.should_quit = true,
        Action::Select => select(state),
        Action::MoveUp => state.list_state.select_prev(),
        Action::MoveDown => state.list_state.select_next(len),
        Action::PageUp => {
            let height = state.list_height();
            state.list_state.page_up(height);
        }
        Action::PageDown => {
            let height = state.list_height();
            state.list_state.page_down(len, height);
        }
        Action::First => state.list_state.select_first(),
        Action::Last => state.list_state.select_last(len),
        Action::ToggleHelp => state.show_full_help = !state.show_full_help,
    }
}

/// Record the new terminal size.  The cursor stays where it is; only the
/// scroll window is adjusted so it stays in view.
pub fn handle_resize(state: &mut AppState, width: u16, height: u16) {
    state.viewport = Rect::new(0, 0, width, height);
    let list_height = state.list_height();
    state.list_state.clamp_scroll(list_height);
    tracing::debug!("resize: {width}x{height} list_height={list_height}");
}

/// `enter`: connect to the connection under the cursor.  Group headers and
/// the empty placeholder are inert.
fn select(state: &mut AppState) {
    let Some(name) = state
        .selected_item()
        .and_then(|item| item.connection_name())
        .map(str::to_owned)
    else {
        return;
    };

    // TODO: open an SSH session once connections carry host/user details.
    tracing::info!(connection = %name, "connect requested");
    state.status_message = Some(format!("connect to {name}: not implemented"));
}
