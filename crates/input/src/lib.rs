//! Terminal input module (engine-facing).
//!
//! This module is independent of any game. It maps `crossterm` key events into
//! [`crate::types::Key`] and decouples the blocking terminal event stream from
//! the fixed-tick game loop with a background listener thread.

pub mod listener;
pub mod map;

pub use tui_arcade_types as types;

pub use listener::{EventSource, KeyListener, KeyPoll, TerminalEvents};
pub use map::key_from_event;
