//! Runtime plumbing shared by the arcade binaries.
//!
//! - `config`: environment-driven settings
//! - `logging`: optional file logger
//! - `surface`: where frames are presented (terminal or in-memory)
//! - `driver`: the fixed-tick loop tying input, simulation and rendering
//! - `session`: a game loop on the real terminal

pub mod config;
pub mod driver;
pub mod logging;
pub mod session;
pub mod surface;

pub use tui_arcade_core as core;
pub use tui_arcade_input as input;
pub use tui_arcade_term as term;
pub use tui_arcade_types as types;

pub use config::{ArcadeConfig, ConfigError};
pub use driver::{GameLoop, LoopConfig, LoopExit};
pub use session::play_in_terminal;
pub use surface::{HeadlessSurface, ScriptedKeys, Surface};
pub use tui_arcade_core::Game;
