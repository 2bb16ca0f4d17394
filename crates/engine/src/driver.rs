//! Fixed-tick game loop.
//!
//! Each tick: follow the surface size, sample exactly one key, hand it to the
//! game, advance the simulation, then present a frame. A paused game presents
//! nothing. When the game ends its summary is shown for the configured hold
//! and the loop returns the final score.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use log::{debug, info};

use crate::input::KeyPoll;
use crate::surface::Surface;
use crate::term::{FrameBuffer, View, Viewport};
use crate::types::{Flow, Phase, GAME_OVER_HOLD_MS, TICK_MS};
use crate::Game;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopConfig {
    /// Target period of one tick. Work that overruns it is not compensated.
    pub tick: Duration,
    /// How long the end-of-game summary stays on screen.
    pub game_over_hold: Duration,
    /// Stop after this many ticks. `None` runs until quit or game over.
    pub max_ticks: Option<u64>,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(TICK_MS as u64),
            game_over_hold: Duration::from_millis(GAME_OVER_HOLD_MS as u64),
            max_ticks: None,
        }
    }
}

/// Why [`GameLoop::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// The player pressed a quit key.
    Quit,
    /// The game ended on its own.
    GameOver { score: u32 },
    /// `max_ticks` was reached.
    TickLimit,
}

impl LoopExit {
    /// Process exit status for this outcome: quitting early reports failure.
    pub fn status(self) -> u8 {
        match self {
            LoopExit::Quit => 1,
            LoopExit::GameOver { .. } | LoopExit::TickLimit => 0,
        }
    }
}

pub struct GameLoop<S, K> {
    surface: S,
    keys: K,
    config: LoopConfig,
    fb: FrameBuffer,
    size: Option<(u16, u16)>,
    ticks: u64,
}

impl<S: Surface, K: KeyPoll> GameLoop<S, K> {
    pub fn new(surface: S, keys: K, config: LoopConfig) -> Self {
        Self {
            surface,
            keys,
            config,
            fb: FrameBuffer::new(0, 0),
            size: None,
            ticks: 0,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Ticks driven so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Drive `game` until it quits, ends, or hits the tick limit.
    pub fn run<G, V>(&mut self, game: &mut G, view: &V) -> Result<LoopExit>
    where
        G: Game,
        V: View<G>,
    {
        info!("game loop started, tick {:?}", self.config.tick);

        let exit = loop {
            if self.config.max_ticks.is_some_and(|limit| self.ticks >= limit) {
                break LoopExit::TickLimit;
            }

            let started = Instant::now();
            if let Some(exit) = self.step(game, view)? {
                break exit;
            }
            if let Some(rest) = self.config.tick.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            }
        };

        info!("game loop finished after {} ticks: {:?}", self.ticks, exit);
        Ok(exit)
    }

    /// Run a single tick without sleeping.
    ///
    /// Returns `Some` when the loop should stop.
    pub fn step<G, V>(&mut self, game: &mut G, view: &V) -> Result<Option<LoopExit>>
    where
        G: Game,
        V: View<G>,
    {
        let viewport = self.follow_size(game)?;
        self.ticks += 1;

        if game.handle_key(self.keys.poll()) == Flow::Quit {
            return Ok(Some(LoopExit::Quit));
        }
        game.tick();

        match game.phase() {
            Phase::Over => {
                let score = game.score();
                view.render_summary_into(game, viewport, &mut self.fb);
                self.surface.present(&mut self.fb)?;
                if !self.config.game_over_hold.is_zero() {
                    thread::sleep(self.config.game_over_hold);
                }
                Ok(Some(LoopExit::GameOver { score }))
            }
            Phase::Paused => Ok(None),
            Phase::Running => {
                view.render_into(game, viewport, &mut self.fb);
                self.surface.present(&mut self.fb)?;
                Ok(None)
            }
        }
    }

    fn follow_size<G: Game>(&mut self, game: &mut G) -> Result<Viewport> {
        let (width, height) = self.surface.size()?;
        match self.size {
            Some(prev) if prev == (width, height) => {}
            Some(_) => {
                debug!("surface resized to {}x{}", width, height);
                game.resize(width, height);
                self.size = Some((width, height));
            }
            None => self.size = Some((width, height)),
        }
        Ok(Viewport::new(width, height))
    }
}
