//! Snake game simulation
//!
//! The snake is an ordered run of cells, tail first and head last. Each tick
//! a new head is appended one step along the shared velocity; the tail is
//! dropped unless the head landed on the apple. Leaving the frame or running
//! into the body ends the game.

use std::collections::VecDeque;

use log::debug;

use crate::entity::{Entities, Entity, EntityId, Point, Velocity};
use crate::game::Game;
use crate::rng::SimpleRng;
use crate::types::{Direction, Flow, Key, Phase, SnakeAction, FRAME_HEIGHT, FRAME_WIDTH};

/// Random draws before falling back to a scan for a free cell.
const RELOCATE_ATTEMPTS: u32 = 64;

/// Arena capacity: the apple is the only free-standing entity.
const SNAKE_ENTITIES: usize = 1;

/// Ordered segments plus the single velocity they all follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    segments: VecDeque<Point>,
    vel: Velocity,
}

impl Snake {
    /// Build a snake from segments given tail first.
    ///
    /// Returns `None` if `segments` is empty or two consecutive segments are
    /// neither adjacent nor the same cell.
    pub fn new(segments: impl IntoIterator<Item = Point>, vel: Velocity) -> Option<Self> {
        let segments: VecDeque<Point> = segments.into_iter().collect();
        if segments.is_empty() {
            return None;
        }
        let connected = segments
            .iter()
            .zip(segments.iter().skip(1))
            .all(|(a, b)| (a.row - b.row).abs() + (a.col - b.col).abs() <= 1);
        if !connected {
            return None;
        }
        Some(Self { segments, vel })
    }

    pub fn head(&self) -> Point {
        self.segments[self.segments.len() - 1]
    }

    pub fn tail(&self) -> Point {
        self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false: a snake has at least its head.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments, tail first.
    pub fn segments(&self) -> impl Iterator<Item = Point> + '_ {
        self.segments.iter().copied()
    }

    /// Segments as renderable entities, tail first.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.segments.iter().map(|&p| Entity::segment(p))
    }

    pub fn velocity(&self) -> Velocity {
        self.vel
    }

    pub fn contains(&self, p: Point) -> bool {
        self.segments.contains(&p)
    }

    /// Change heading unless it would turn straight back onto the body.
    pub fn turn(&mut self, dir: Direction) -> bool {
        let current = Direction::from_delta(self.vel.row, self.vel.col);
        if current == Some(dir.opposite()) {
            return false;
        }
        let (row, col) = dir.delta();
        self.vel = Velocity::new(row, col);
        true
    }

    /// Whether the head overlaps any other segment.
    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        self.segments
            .iter()
            .take(self.segments.len() - 1)
            .any(|&p| p == head)
    }
}

/// Complete snake game state
#[derive(Debug, Clone)]
pub struct SnakeState {
    snake: Snake,
    entities: Entities<SNAKE_ENTITIES>,
    apple: EntityId,
    frame_width: i32,
    frame_height: i32,
    phase: Phase,
    score: u32,
    rng: SimpleRng,
}

impl SnakeState {
    /// Standard opening: five segments in column 3, head at row 5, moving up.
    pub fn new(seed: u32) -> Self {
        let segments = (5..=9).rev().map(|row| Point::new(row, 3));
        let snake = Snake {
            segments: segments.collect(),
            vel: Velocity::new(-1, 0),
        };
        Self::with_snake(snake, Point::new(10, 10), seed)
    }

    /// Start from an arbitrary snake and apple in the standard frame.
    pub fn with_snake(snake: Snake, apple: Point, seed: u32) -> Self {
        let mut entities = Entities::new();
        let apple = entities.insert(Entity::apple(apple));
        Self {
            snake,
            entities,
            apple,
            frame_width: FRAME_WIDTH,
            frame_height: FRAME_HEIGHT,
            phase: Phase::Running,
            score: 0,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> &Entity {
        self.entities.get(self.apple)
    }

    fn apple_mut(&mut self) -> &mut Entity {
        self.entities.get_mut(self.apple)
    }

    /// Free-standing entities (the apple); segments come from [`Snake::entities`].
    pub fn entities(&self) -> &Entities<SNAKE_ENTITIES> {
        &self.entities
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::Over
    }

    /// Playable frame size as (width, height).
    pub fn frame(&self) -> (i32, i32) {
        (self.frame_width, self.frame_height)
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: SnakeAction) -> Flow {
        match action {
            SnakeAction::Quit => return Flow::Quit,
            SnakeAction::Pause => {
                self.phase = match self.phase {
                    Phase::Running => Phase::Paused,
                    Phase::Paused => Phase::Running,
                    Phase::Over => Phase::Over,
                };
            }
            SnakeAction::Turn(dir) => {
                if self.phase == Phase::Running {
                    self.snake.turn(dir);
                }
            }
        }
        Flow::Continue
    }

    /// Main game tick - move, eat, relocate the apple, check for death
    pub fn tick(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        // A snake with no heading is standing still.
        if self.snake.vel.is_zero() {
            return;
        }

        let new_head = self.snake.head().offset(self.snake.vel);
        self.snake.segments.push_back(new_head);

        if self.apple().covers(new_head) {
            self.score += 1;
            debug!("apple eaten, score {} length {}", self.score, self.snake.len());
        } else {
            self.snake.segments.pop_front();
        }

        if self.snake.contains(self.apple().pos) {
            self.relocate_apple();
        }

        if !new_head.within(self.frame_width, self.frame_height) || self.snake.bites_itself() {
            self.phase = Phase::Over;
            debug!("game over at {:?}, score {}", new_head, self.score);
        }
    }

    /// Move the apple to a random free cell of the frame.
    ///
    /// Leaves the apple where it is if the snake fills the whole frame.
    fn relocate_apple(&mut self) {
        for _ in 0..RELOCATE_ATTEMPTS {
            let candidate = Point::new(
                self.rng.next_range(self.frame_height as u32) as i32,
                self.rng.next_range(self.frame_width as u32) as i32,
            );
            if !self.snake.contains(candidate) {
                self.apple_mut().pos = candidate;
                return;
            }
        }

        let free = (0..self.frame_height)
            .flat_map(|row| (0..self.frame_width).map(move |col| Point::new(row, col)))
            .find(|&p| !self.snake.contains(p));
        if let Some(p) = free {
            self.apple_mut().pos = p;
        }
    }
}

impl Game for SnakeState {
    fn handle_key(&mut self, key: Option<Key>) -> Flow {
        match key.and_then(SnakeAction::from_key) {
            Some(action) => self.apply_action(action),
            None => Flow::Continue,
        }
    }

    fn tick(&mut self) {
        SnakeState::tick(self);
    }

    fn phase(&self) -> Phase {
        self.phase
    }

    fn score(&self) -> u32 {
        self.score
    }
}
