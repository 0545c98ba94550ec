//! A terminal picker for SSH connections.
//!
//! Run the binary to browse the built-in connection groups; `enter` picks
//! the connection under the cursor and `q` quits.

mod app;
mod config;
mod core;
mod error;
mod ui;

use std::io::{self, stdout, Stdout};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use crate::app::{event::spawn_event_reader, runtime, state::AppState};
use crate::core::{flatten::flatten, model::default_groups};
use crate::error::AppError;

const TICK_RATE: Duration = Duration::from_millis(250);

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), version, about = "Browse and pick SSH connections")]
struct Cli {}

// ───────────────────────────────────────── terminal ─────────

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn setup_terminal() -> Result<Tui, AppError> {
    enable_raw_mode().map_err(AppError::TerminalSetup)?;

    let terminal = execute!(stdout(), EnterAlternateScreen)
        .and_then(|()| Terminal::new(CrosstermBackend::new(stdout())));

    terminal.map_err(|err| {
        // Leave the shell usable even though startup failed.
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        AppError::TerminalSetup(err)
    })
}

fn restore_terminal(terminal: &mut Tui) -> Result<(), AppError> {
    disable_raw_mode().map_err(AppError::TerminalRestore)?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(AppError::TerminalRestore)?;
    terminal.show_cursor().map_err(AppError::TerminalRestore)?;
    Ok(())
}

// ───────────────────────────────────────── main ─────────────

async fn run() -> Result<()> {
    let mut terminal = setup_terminal()?;

    let size = terminal.size().map_err(AppError::TerminalSetup)?;
    let viewport = Rect::new(0, 0, size.width, size.height);
    let mut state = AppState::new(flatten(&default_groups()), viewport);
    tracing::debug!("startup: {} rows, viewport {viewport:?}", state.items.len());

    let mut events = spawn_event_reader(TICK_RATE);
    let result = runtime::run_loop(&mut terminal, &mut state, &mut events).await;

    // Restore even when the loop failed; the loop's error wins.
    let restored = restore_terminal(&mut terminal);
    result?;
    restored?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialise tracing (silent unless RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    Cli::parse();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("Program failed: {err:#}");
            ExitCode::FAILURE
        }
    }
}
