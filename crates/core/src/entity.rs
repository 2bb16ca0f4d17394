//! Entity model - positioned, sized, moving things on the grid
//!
//! Every game object (paddle, ball, snake segment, apple) is an [`Entity`].
//! Games keep their entities in an [`Entities`] arena and refer to them by
//! [`EntityId`], so collision and rendering code iterate by handle instead of
//! holding references into each other.

use arrayvec::ArrayVec;

use crate::types::{BLOCK_GLYPH, ROUND_GLYPH};

/// Integer grid position. Rows grow downwards, columns to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The point one step of `vel` away.
    pub fn offset(self, vel: Velocity) -> Self {
        Self {
            row: self.row + vel.row,
            col: self.col + vel.col,
        }
    }

    /// Inside `[0, width) x [0, height)`.
    pub fn within(self, width: i32, height: i32) -> bool {
        self.row >= 0 && self.row < height && self.col >= 0 && self.col < width
    }
}

/// Signed cells per tick on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Velocity {
    pub row: i32,
    pub col: i32,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { row: 0, col: 0 };

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn is_zero(&self) -> bool {
        self.row == 0 && self.col == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Paddle,
    Ball,
    Segment,
    Apple,
}

/// A renderable rectangle with a velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity {
    pub kind: EntityKind,
    /// Top-left cell
    pub pos: Point,
    pub width: i32,
    pub height: i32,
    pub vel: Velocity,
    pub glyph: char,
}

impl Entity {
    pub fn paddle(pos: Point, height: i32) -> Self {
        Self {
            kind: EntityKind::Paddle,
            pos,
            width: 1,
            height: height.max(1),
            vel: Velocity::ZERO,
            glyph: BLOCK_GLYPH,
        }
    }

    pub fn ball(pos: Point, vel: Velocity) -> Self {
        Self {
            kind: EntityKind::Ball,
            pos,
            width: 1,
            height: 1,
            vel,
            glyph: ROUND_GLYPH,
        }
    }

    pub fn segment(pos: Point) -> Self {
        Self {
            kind: EntityKind::Segment,
            pos,
            width: 1,
            height: 1,
            vel: Velocity::ZERO,
            glyph: BLOCK_GLYPH,
        }
    }

    pub fn apple(pos: Point) -> Self {
        Self {
            kind: EntityKind::Apple,
            pos,
            width: 1,
            height: 1,
            vel: Velocity::ZERO,
            glyph: ROUND_GLYPH,
        }
    }

    /// Where the entity will be after one more tick at its current velocity.
    pub fn next_pos(&self) -> Point {
        self.pos.offset(self.vel)
    }

    /// Apply velocity to position.
    pub fn advance(&mut self) {
        self.pos = self.next_pos();
    }

    /// Whether `p` lies within this entity's rectangle.
    pub fn covers(&self, p: Point) -> bool {
        p.row >= self.pos.row
            && p.row < self.pos.row + self.height
            && p.col >= self.pos.col
            && p.col < self.pos.col + self.width
    }

    /// Whether the whole rectangle lies in `[0, width) x [0, height)`.
    pub fn within(&self, width: i32, height: i32) -> bool {
        self.pos.within(width, height)
            && self.pos.row + self.height <= height
            && self.pos.col + self.width <= width
    }
}

/// Stable handle into an [`Entities`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u16);

impl EntityId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Fixed-capacity entity arena.
///
/// Entities are never removed, so handles stay valid for the arena's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entities<const N: usize> {
    items: ArrayVec<Entity, N>,
}

impl<const N: usize> Entities<N> {
    pub fn new() -> Self {
        Self {
            items: ArrayVec::new(),
        }
    }

    /// Add an entity and return its handle.
    ///
    /// # Panics
    ///
    /// Panics if the arena already holds `N` entities.
    pub fn insert(&mut self, entity: Entity) -> EntityId {
        let id = EntityId(self.items.len() as u16);
        self.items.push(entity);
        id
    }

    pub fn get(&self, id: EntityId) -> &Entity {
        &self.items[id.index()]
    }

    pub fn get_mut(&mut self, id: EntityId) -> &mut Entity {
        &mut self.items[id.index()]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, e)| (EntityId(i as u16), e))
    }
}

impl<const N: usize> Default for Entities<N> {
    fn default() -> Self {
        Self::new()
    }
}
