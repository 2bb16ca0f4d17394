//! Single-player snake (default binary).
//!
//! Steer with wasd or the arrow keys. p pauses, q or Esc quits. The final
//! score is shown for a moment when the snake dies.

use std::process::ExitCode;

use log::{error, info};

use tui_arcade::core::SnakeState;
use tui_arcade::engine::{logging, play_in_terminal, ArcadeConfig, LoopExit};
use tui_arcade::term::SnakeView;

fn main() -> ExitCode {
    let config = match ArcadeConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("snake: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = logging::init(&config) {
        eprintln!("snake: {e:#}");
        return ExitCode::FAILURE;
    }

    let seed = config.seed;
    match play_in_terminal(&config, |_, _| SnakeState::new(seed), &SnakeView) {
        Ok(exit) => {
            if let LoopExit::GameOver { score } = exit {
                info!("final score {}", score);
            }
            ExitCode::from(exit.status())
        }
        Err(e) => {
            error!("snake failed: {e:#}");
            eprintln!("snake: {e:#}");
            ExitCode::FAILURE
        }
    }
}
