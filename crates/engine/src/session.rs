//! Running a game on the real terminal.

use anyhow::{Context, Result};
use log::info;

use crate::config::ArcadeConfig;
use crate::driver::{GameLoop, LoopExit};
use crate::input::KeyListener;
use crate::term::{TerminalRenderer, View};
use crate::Game;

/// Take over the terminal, build the game for its size, and play until the
/// game quits or ends. The terminal is restored on every path out.
pub fn play_in_terminal<G, V, F>(config: &ArcadeConfig, make_game: F, view: &V) -> Result<LoopExit>
where
    G: Game,
    V: View<G>,
    F: FnOnce(u16, u16) -> G,
{
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = play(&mut term, config, make_game, view);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn play<G, V, F>(
    term: &mut TerminalRenderer,
    config: &ArcadeConfig,
    make_game: F,
    view: &V,
) -> Result<LoopExit>
where
    G: Game,
    V: View<G>,
    F: FnOnce(u16, u16) -> G,
{
    let keys = KeyListener::terminal().context("failed to start key listener")?;
    let (width, height) = term.size()?;
    info!("terminal {}x{}, seed {}", width, height, config.seed);

    let mut game = make_game(width, height);
    GameLoop::new(term, keys, config.loop_config()).run(&mut game, view)
}
