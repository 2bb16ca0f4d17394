//! Two-player pong.
//!
//! Left paddle: w/s. Right paddle: arrow keys. p pauses, q or Esc quits.

use std::process::ExitCode;

use log::error;

use tui_arcade::core::PongState;
use tui_arcade::engine::{logging, play_in_terminal, ArcadeConfig};
use tui_arcade::term::PongView;

fn main() -> ExitCode {
    let config = match ArcadeConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("pong: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = logging::init(&config) {
        eprintln!("pong: {e:#}");
        return ExitCode::FAILURE;
    }

    match play_in_terminal(&config, PongState::new, &PongView) {
        Ok(exit) => ExitCode::from(exit.status()),
        Err(e) => {
            error!("pong failed: {e:#}");
            eprintln!("pong: {e:#}");
            ExitCode::FAILURE
        }
    }
}
