//! The contract between a simulation and the loop that drives it.

use crate::types::{Flow, Key, Phase};

/// A fixed-tick game.
///
/// The driver calls, once per tick and in this order: [`Game::handle_key`]
/// with exactly one input sample (possibly `None`), then [`Game::tick`].
/// Rendering reads the state afterwards.
pub trait Game {
    /// Apply one input sample. `None` means no key was pressed this tick.
    fn handle_key(&mut self, key: Option<Key>) -> Flow;

    /// Advance the simulation by one tick. A no-op unless running.
    fn tick(&mut self);

    fn phase(&self) -> Phase;

    /// Score shown in the end-of-game summary.
    fn score(&self) -> u32;

    /// The display surface changed size.
    fn resize(&mut self, _width: u16, _height: u16) {}
}
