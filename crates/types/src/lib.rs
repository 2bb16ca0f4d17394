//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the arcade.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, input decoding, terminal rendering).
//!
//! # Game Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 75 | Fixed timestep interval |
//! | `GAME_OVER_HOLD_MS` | 2000 | How long the final score stays on screen |
//!
//! # Pong Defaults
//!
//! - `PADDLE_HEIGHT`: 4 rows
//! - Ball serve velocity: 1 row and 2 columns per tick
//!
//! # Snake Defaults
//!
//! - Playable frame: 30 x 15 cells, centered on the terminal
//!
//! # Examples
//!
//! ```
//! use tui_arcade_types::{Direction, Key, SnakeAction, PongAction};
//!
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//! assert_eq!(Direction::Left.delta(), (0, -1));
//!
//! assert_eq!(PongAction::from_key(Key::Char('w')), Some(PongAction::LeftUp));
//! assert_eq!(SnakeAction::from_key(Key::Right), Some(SnakeAction::Turn(Direction::Right)));
//! assert_eq!(SnakeAction::from_key(Key::Char('x')), None);
//! ```

/// Fixed timestep interval in milliseconds
pub const TICK_MS: u32 = 75;

/// How long the snake summary screen is held before the terminal is released
pub const GAME_OVER_HOLD_MS: u32 = 2000;

/// Paddle height in rows
pub const PADDLE_HEIGHT: i32 = 4;

/// Row velocity the ball is served with
pub const BALL_SERVE_VEL_ROW: i32 = 1;

/// Column velocity the ball is served with
pub const BALL_SERVE_VEL_COL: i32 = 2;

/// Snake playfield width in cells
pub const FRAME_WIDTH: i32 = 30;

/// Snake playfield height in cells
pub const FRAME_HEIGHT: i32 = 15;

/// Glyph used for paddles and snake segments
pub const BLOCK_GLYPH: char = '█';

/// Glyph used for the ball and the apple
pub const ROUND_GLYPH: char = '●';

/// A key identifier, decoupled from any terminal library.
///
/// Letters are always lowercase; the input layer folds case before
/// producing a `Key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Esc,
    /// Ctrl+C
    Interrupt,
}

impl Key {
    /// Keys that end the game in every variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_arcade_types::Key;
    ///
    /// assert!(Key::Char('q').is_quit());
    /// assert!(Key::Interrupt.is_quit());
    /// assert!(!Key::Char('p').is_quit());
    /// ```
    pub fn is_quit(&self) -> bool {
        matches!(self, Key::Char('q') | Key::Esc | Key::Interrupt)
    }

    pub fn is_pause(&self) -> bool {
        matches!(self, Key::Char('p'))
    }
}

/// Grid heading. Rows grow downwards, columns grow to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// (row, col) step for one tick
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Recover a heading from a unit (row, col) step.
    ///
    /// Returns `None` for the zero vector and for diagonal or non-unit steps.
    pub fn from_delta(vel_row: i32, vel_col: i32) -> Option<Self> {
        match (vel_row, vel_col) {
            (-1, 0) => Some(Direction::Up),
            (1, 0) => Some(Direction::Down),
            (0, -1) => Some(Direction::Left),
            (0, 1) => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Lifecycle phase shared by every game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Running,
    Paused,
    /// Terminal: the player quit (pong) or the snake died.
    Over,
}

/// What the loop should do after an input sample has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Actions understood by the paddle game.
///
/// The left paddle uses letters, the right paddle uses the arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PongAction {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    Pause,
    Quit,
}

impl PongAction {
    pub fn from_key(key: Key) -> Option<Self> {
        if key.is_quit() {
            return Some(PongAction::Quit);
        }
        if key.is_pause() {
            return Some(PongAction::Pause);
        }
        match key {
            Key::Char('w') => Some(PongAction::LeftUp),
            Key::Char('s') => Some(PongAction::LeftDown),
            Key::Up => Some(PongAction::RightUp),
            Key::Down => Some(PongAction::RightDown),
            _ => None,
        }
    }
}

/// Actions understood by the snake game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeAction {
    Turn(Direction),
    Pause,
    Quit,
}

impl SnakeAction {
    pub fn from_key(key: Key) -> Option<Self> {
        if key.is_quit() {
            return Some(SnakeAction::Quit);
        }
        if key.is_pause() {
            return Some(SnakeAction::Pause);
        }
        match key {
            Key::Char('w') | Key::Up => Some(SnakeAction::Turn(Direction::Up)),
            Key::Char('a') | Key::Left => Some(SnakeAction::Turn(Direction::Left)),
            Key::Char('s') | Key::Down => Some(SnakeAction::Turn(Direction::Down)),
            Key::Char('d') | Key::Right => Some(SnakeAction::Turn(Direction::Right)),
            _ => None,
        }
    }
}
