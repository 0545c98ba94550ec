//! Core data – the group/connection model and its flattened projection.
//!
//! Nothing in this module depends on any TUI or rendering crate.

pub mod flatten;
pub mod model;
