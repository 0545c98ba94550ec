//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* data structures and turns them into styled
//! lines on the terminal.  Styling comes from an injected [`theme::Theme`].

pub mod connection_list;
pub mod help;
pub mod layout;
pub mod theme;
