//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, state management, and simulation logic
//! for both arcade games. It has **zero dependencies** on terminals, threads, or
//! I/O, making it:
//!
//! - **Deterministic**: Same seed and key sequence produce identical games
//! - **Testable**: Every rule can be exercised tick by tick
//! - **Portable**: Runs headless as easily as in a terminal
//!
//! # Module Structure
//!
//! - [`entity`]: Points, velocities, entities and the handle-based arena
//! - [`game`]: The [`Game`] trait the loop driver works against
//! - [`pong`]: Paddle-and-ball simulation
//! - [`snake`]: Growing-snake simulation
//! - [`rng`]: Seeded LCG for apple placement
//!
//! # Example
//!
//! ```
//! use tui_arcade_core::{Game, SnakeState};
//! use tui_arcade_types::{Key, Phase};
//!
//! let mut game = SnakeState::new(12345);
//!
//! // One input sample per tick, then the update.
//! game.handle_key(Some(Key::Char('d')));
//! game.tick();
//!
//! assert_eq!(game.phase(), Phase::Running);
//! assert_eq!(game.snake().len(), 5);
//! ```
//!
//! # Timing
//!
//! Every tick moves things exactly one velocity step. The wall-clock period
//! lives in the loop driver, not here.

pub mod entity;
pub mod game;
pub mod pong;
pub mod rng;
pub mod snake;

pub use tui_arcade_types as types;

// Re-export commonly used types for convenience
pub use entity::{Entities, Entity, EntityId, EntityKind, Point, Velocity};
pub use game::Game;
pub use pong::{hits_paddle, hits_wall, PongState, Side};
pub use rng::SimpleRng;
pub use snake::{Snake, SnakeState};
