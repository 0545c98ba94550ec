//! The draw → wait → handle loop.
//!
//! Exactly one event is handled between two frames, and the loop exits
//! before drawing again once the state asks to quit.

use anyhow::{Context, Result};
use ratatui::{
    backend::Backend,
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use tokio::sync::mpsc;

use super::event::AppEvent;
use super::handler;
use super::state::AppState;
use crate::ui::connection_list::ConnectionList;

/// Title shown in the bar above the list.
pub const TITLE: &str = "SSH Manager";

/// Run until the user quits or the event source closes.
pub async fn run_loop<B>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    events: &mut mpsc::UnboundedReceiver<AppEvent>,
) -> Result<()>
where
    B: Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    loop {
        terminal
            .draw(|frame| draw(frame, state))
            .context("failed to draw frame")?;

        let Some(event) = events.recv().await else {
            tracing::debug!("event source closed");
            break;
        };
        handler::handle_event(state, event);

        if state.should_quit {
            tracing::debug!("quit at row {}", state.list_state.selected);
            break;
        }
    }

    Ok(())
}

/// Render one full frame.
pub fn draw(frame: &mut Frame, state: &mut AppState) {
    let layout = state.layout(frame.area());

    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {TITLE} "),
        state.theme.title,
    )));
    frame.render_widget(title, layout.title_area);

    let list = ConnectionList::new(&state.items, &state.theme);
    frame.render_stateful_widget(list, layout.list_area, &mut state.list_state);

    frame.render_widget(state.help_bar(), layout.help_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{flatten::flatten, model::default_groups};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, style::Modifier};

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    fn setup(width: u16, height: u16) -> (Terminal<TestBackend>, AppState) {
        let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let state = AppState::new(
            flatten(&default_groups()),
            Rect::new(0, 0, width, height),
        );
        (terminal, state)
    }

    #[test]
    fn frame_shows_title_list_and_help() {
        let (mut terminal, mut state) = setup(60, 8);
        terminal.draw(|frame| draw(frame, &mut state)).unwrap();
        let buf = terminal.backend().buffer();

        assert_eq!(row_text(buf, 0), " SSH Manager");
        assert_eq!(row_text(buf, 1), "");
        assert_eq!(row_text(buf, 2), "  Group 1");
        assert_eq!(row_text(buf, 3), "    Connection 1");
        assert!(buf[(2, 2)].modifier.contains(Modifier::UNDERLINED));
        assert!(row_text(buf, 7).starts_with("↑/k up"));
    }

    #[tokio::test]
    async fn quit_stops_before_the_next_event() {
        let (mut terminal, mut state) = setup(60, 10);
        let (tx, mut rx) = mpsc::unbounded_channel();
        tx.send(key(KeyCode::Down)).unwrap();
        tx.send(key(KeyCode::Char('q'))).unwrap();
        tx.send(key(KeyCode::Down)).unwrap();

        run_loop(&mut terminal, &mut state, &mut rx).await.unwrap();

        assert!(state.should_quit);
        assert_eq!(state.list_state.selected, 1);
        // The event after `q` is never consumed.
        assert_eq!(rx.try_recv().ok(), Some(key(KeyCode::Down)));
    }

    #[tokio::test]
    async fn closed_event_source_ends_loop() {
        let (mut terminal, mut state) = setup(60, 10);
        let (tx, mut rx) = mpsc::unbounded_channel();
        tx.send(key(KeyCode::End)).unwrap();
        drop(tx);

        run_loop(&mut terminal, &mut state, &mut rx).await.unwrap();

        assert!(!state.should_quit);
        assert_eq!(state.list_state.selected, state.items.len() - 1);
        let buf = terminal.backend().buffer();
        assert_eq!(row_text(buf, 8), "    Connection 5");
    }

    #[tokio::test]
    async fn connect_notice_replaces_help_on_next_frame() {
        let (mut terminal, mut state) = setup(60, 10);
        let (tx, mut rx) = mpsc::unbounded_channel();
        tx.send(key(KeyCode::Down)).unwrap();
        tx.send(key(KeyCode::Enter)).unwrap();
        drop(tx);

        run_loop(&mut terminal, &mut state, &mut rx).await.unwrap();

        let buf = terminal.backend().buffer();
        assert_eq!(row_text(buf, 9), "connect to Connection 1: not implemented");
    }
}
