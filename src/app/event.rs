//! Terminal event abstraction.
//!
//! Wraps crossterm events into a simpler enum and runs a blocking reader
//! task that forwards them over a channel, so the main loop only ever
//! awaits one receiver.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent};
use tokio::sync::mpsc;

/// High-level events consumed by the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
}

/// Spawns a task that polls the terminal for events and sends them through
/// the returned channel.  The task ends once the receiver is dropped.
pub fn spawn_event_reader(tick_rate: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    // crossterm's poll/read block the thread, so keep them off the runtime.
    tokio::task::spawn_blocking(move || loop {
        let app_event = match event::poll(tick_rate) {
            Ok(true) => match event::read() {
                Ok(CtEvent::Key(k)) => AppEvent::Key(k),
                Ok(CtEvent::Resize(w, h)) => AppEvent::Resize(w, h),
                Ok(_) => continue,
                Err(err) => {
                    tracing::warn!("terminal read failed: {err}");
                    break;
                }
            },
            // No event within tick_rate — send a tick.
            Ok(false) => AppEvent::Tick,
            Err(err) => {
                tracing::warn!("terminal poll failed: {err}");
                break;
            }
        };
        if tx.send(app_event).is_err() {
            break; // receiver dropped
        }
    });

    rx
}
