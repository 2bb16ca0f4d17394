//! Paddle game simulation
//!
//! Two paddles sit on the left and right edges of the surface; a ball bounces
//! off the top and bottom walls and off the paddles. Collision tests look one
//! step ahead (current position plus velocity) and flip the velocity before the
//! ball moves, so the ball never leaves the surface vertically.
//!
//! A ball that gets past a paddle scores a point for the other side and is
//! served again from the centre, heading toward the player who conceded.

use log::debug;

use crate::entity::{Entities, Entity, EntityId, Point, Velocity};
use crate::game::Game;
use crate::types::{
    Direction, Flow, Key, Phase, PongAction, BALL_SERVE_VEL_COL, BALL_SERVE_VEL_ROW,
    PADDLE_HEIGHT,
};

const PONG_ENTITIES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Complete paddle game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PongState {
    entities: Entities<PONG_ENTITIES>,
    left: EntityId,
    right: EntityId,
    ball: EntityId,
    width: i32,
    height: i32,
    phase: Phase,
    left_score: u32,
    right_score: u32,
}

impl PongState {
    /// Lay out paddles and ball for a surface of the given size.
    pub fn new(width: u16, height: u16) -> Self {
        let width = (width as i32).max(1);
        let height = (height as i32).max(1);
        let paddle_height = PADDLE_HEIGHT.min(height);
        let paddle_row = (height / 2 - paddle_height / 2).max(0);

        let mut entities = Entities::new();
        let left = entities.insert(Entity::paddle(Point::new(paddle_row, 0), paddle_height));
        let right = entities.insert(Entity::paddle(
            Point::new(paddle_row, width - 1),
            paddle_height,
        ));
        let ball = entities.insert(Entity::ball(
            Point::new(height / 2, width / 2),
            Velocity::new(BALL_SERVE_VEL_ROW, BALL_SERVE_VEL_COL),
        ));

        Self {
            entities,
            left,
            right,
            ball,
            width,
            height,
            phase: Phase::Running,
            left_score: 0,
            right_score: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left_score,
            Side::Right => self.right_score,
        }
    }

    pub fn ball(&self) -> &Entity {
        self.entities.get(self.ball)
    }

    pub fn ball_mut(&mut self) -> &mut Entity {
        self.entities.get_mut(self.ball)
    }

    pub fn paddle(&self, side: Side) -> &Entity {
        self.entities.get(self.paddle_id(side))
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Entity {
        let id = self.paddle_id(side);
        self.entities.get_mut(id)
    }

    pub fn entities(&self) -> &Entities<PONG_ENTITIES> {
        &self.entities
    }

    fn paddle_id(&self, side: Side) -> EntityId {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: PongAction) -> Flow {
        match action {
            PongAction::Quit => {
                self.phase = Phase::Over;
                return Flow::Quit;
            }
            PongAction::Pause => {
                self.phase = match self.phase {
                    Phase::Running => Phase::Paused,
                    Phase::Paused => Phase::Running,
                    Phase::Over => Phase::Over,
                };
            }
            _ if self.phase != Phase::Running => {}
            PongAction::LeftUp => {
                self.move_paddle(Side::Left, Direction::Up);
            }
            PongAction::LeftDown => {
                self.move_paddle(Side::Left, Direction::Down);
            }
            PongAction::RightUp => {
                self.move_paddle(Side::Right, Direction::Up);
            }
            PongAction::RightDown => {
                self.move_paddle(Side::Right, Direction::Down);
            }
        }
        Flow::Continue
    }

    /// Move a paddle one row. Returns false when the move would leave the surface.
    pub fn move_paddle(&mut self, side: Side, dir: Direction) -> bool {
        let height = self.height;
        let paddle = self.paddle_mut(side);
        match dir {
            Direction::Up if paddle.pos.row > 0 => {
                paddle.pos.row -= 1;
                true
            }
            Direction::Down if paddle.pos.row + paddle.height < height => {
                paddle.pos.row += 1;
                true
            }
            _ => false,
        }
    }

    /// Main game tick - reflect, move, then score a miss
    pub fn tick(&mut self) {
        if self.phase != Phase::Running {
            return;
        }

        let height = self.height;
        let left = *self.paddle(Side::Left);
        let right = *self.paddle(Side::Right);

        let ball = self.ball_mut();
        if hits_wall(ball, height) {
            ball.vel.row = -ball.vel.row;
        }
        if hits_paddle(ball, &left) || hits_paddle(ball, &right) {
            ball.vel.col = -ball.vel.col;
        }
        ball.advance();
        // Only reachable when the surface is shorter than the row speed.
        ball.pos.row = ball.pos.row.clamp(0, height - 1);

        let col = ball.pos.col;
        if col < 0 {
            self.award_point(Side::Right);
        } else if col >= self.width {
            self.award_point(Side::Left);
        }
    }

    fn award_point(&mut self, scorer: Side) {
        match scorer {
            Side::Left => self.left_score += 1,
            Side::Right => self.right_score += 1,
        }
        debug!(
            "point to {:?}: {} - {}",
            scorer, self.left_score, self.right_score
        );
        self.serve(scorer.opposite());
    }

    /// Put the ball back in the centre, heading toward `toward`.
    pub fn serve(&mut self, toward: Side) {
        let center = Point::new(self.height / 2, self.width / 2);
        let col_vel = match toward {
            Side::Left => -BALL_SERVE_VEL_COL,
            Side::Right => BALL_SERVE_VEL_COL,
        };
        let ball = self.ball_mut();
        ball.pos = center;
        ball.vel = Velocity::new(BALL_SERVE_VEL_ROW, col_vel);
    }

    /// Fit the layout to a new surface size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = (width as i32).max(1);
        self.height = (height as i32).max(1);
        let (width, height) = (self.width, self.height);

        for side in [Side::Left, Side::Right] {
            let paddle = self.paddle_mut(side);
            paddle.height = PADDLE_HEIGHT.min(height);
            paddle.pos.row = paddle.pos.row.clamp(0, height - paddle.height);
            if side == Side::Right {
                paddle.pos.col = width - 1;
            }
        }

        let ball = *self.ball();
        if !ball.within(width, height) {
            let toward = if ball.vel.col < 0 { Side::Left } else { Side::Right };
            self.serve(toward);
        }
    }
}

/// The ball's next row falls outside `[0, height)`.
pub fn hits_wall(ball: &Entity, height: i32) -> bool {
    let next_row = ball.pos.row + ball.vel.row;
    next_row < 0 || next_row >= height
}

/// The ball's next step reaches the paddle's column within its rows.
///
/// Which way the column test faces depends on the side the ball is on: from
/// the left it must reach or pass `paddle.col` going right, from the right (or
/// on the paddle's own column) it must reach or pass it going left.
pub fn hits_paddle(ball: &Entity, paddle: &Entity) -> bool {
    let next_col = ball.pos.col + ball.vel.col;
    let reaches_col = if ball.pos.col < paddle.pos.col {
        next_col >= paddle.pos.col
    } else {
        next_col <= paddle.pos.col
    };

    let next_row = ball.pos.row + ball.vel.row;
    reaches_col && next_row >= paddle.pos.row && next_row < paddle.pos.row + paddle.height
}

impl Game for PongState {
    fn handle_key(&mut self, key: Option<Key>) -> Flow {
        match key.and_then(PongAction::from_key) {
            Some(action) => self.apply_action(action),
            None => Flow::Continue,
        }
    }

    fn tick(&mut self) {
        PongState::tick(self);
    }

    fn phase(&self) -> Phase {
        self.phase
    }

    fn score(&self) -> u32 {
        self.left_score + self.right_score
    }

    fn resize(&mut self, width: u16, height: u16) {
        PongState::resize(self, width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn place_ball(state: &mut PongState, row: i32, col: i32, vel_row: i32, vel_col: i32) {
        let ball = state.ball_mut();
        ball.pos = Point::new(row, col);
        ball.vel = Velocity::new(vel_row, vel_col);
    }

    #[test]
    fn test_initial_layout() {
        let state = PongState::new(80, 24);

        assert_eq!(state.phase(), Phase::Running);
        assert_eq!(state.paddle(Side::Left).pos, Point::new(10, 0));
        assert_eq!(state.paddle(Side::Right).pos, Point::new(10, 79));
        assert_eq!(state.paddle(Side::Left).height, PADDLE_HEIGHT);
        assert_eq!(state.ball().pos, Point::new(12, 40));
        assert_eq!(state.ball().vel, Velocity::new(1, 2));
        assert_eq!(state.entities().len(), 3);
    }

    #[test]
    fn test_left_paddle_collision_from_the_right() {
        let mut state = PongState::new(40, 20);
        state.paddle_mut(Side::Left).pos = Point::new(5, 0);
        place_ball(&mut state, 6, 1, 0, -2);

        // 1 + -2 = -1 <= 0 and row 6 is in [5, 9)
        assert!(hits_paddle(state.ball(), state.paddle(Side::Left)));
        state.tick();

        assert_eq!(state.ball().vel.col, 2);
        assert_eq!(state.ball().pos, Point::new(6, 3));
        assert_eq!(state.score(Side::Right), 0);
    }

    #[test]
    fn test_right_paddle_collision_from_the_left() {
        let mut state = PongState::new(40, 20);
        state.paddle_mut(Side::Right).pos = Point::new(8, 39);
        place_ball(&mut state, 9, 37, 1, 2);

        state.tick();

        assert_eq!(state.ball().vel, Velocity::new(1, -2));
        assert_eq!(state.ball().pos, Point::new(10, 35));
    }

    #[test]
    fn test_ball_outside_paddle_rows_does_not_reflect() {
        let mut state = PongState::new(40, 20);
        state.paddle_mut(Side::Left).pos = Point::new(5, 0);
        place_ball(&mut state, 12, 4, 0, -2);

        state.tick();
        assert_eq!(state.ball().vel.col, -2);
        assert_eq!(state.ball().pos, Point::new(12, 2));
    }

    #[test]
    fn test_wall_reflection_top_and_bottom() {
        let mut state = PongState::new(40, 10);
        place_ball(&mut state, 0, 20, -1, 2);
        state.tick();
        assert_eq!(state.ball().vel.row, 1);
        assert_eq!(state.ball().pos.row, 1);

        place_ball(&mut state, 9, 20, 1, 2);
        state.tick();
        assert_eq!(state.ball().vel.row, -1);
        assert_eq!(state.ball().pos.row, 8);
    }

    #[test]
    fn test_corner_hit_inverts_both_axes() {
        let mut state = PongState::new(40, 10);
        state.paddle_mut(Side::Left).pos = Point::new(0, 0);
        place_ball(&mut state, 0, 1, -1, -2);

        // Wall flips the row first, so the paddle test sees row 1, inside [0, 4).
        state.tick();
        assert_eq!(state.ball().vel, Velocity::new(1, 2));
        assert_eq!(state.ball().pos, Point::new(1, 3));
    }

    #[test]
    fn test_paddle_bounds_reject_silently() {
        let mut state = PongState::new(20, 10);
        state.paddle_mut(Side::Left).pos.row = 0;
        assert!(!state.move_paddle(Side::Left, Direction::Up));
        assert_eq!(state.paddle(Side::Left).pos.row, 0);

        state.paddle_mut(Side::Right).pos.row = 6;
        assert!(!state.move_paddle(Side::Right, Direction::Down));
        assert_eq!(state.paddle(Side::Right).pos.row, 6);

        assert!(state.move_paddle(Side::Right, Direction::Up));
        assert_eq!(state.paddle(Side::Right).pos.row, 5);
    }

    #[test]
    fn test_keys_move_the_right_paddles() {
        let mut state = PongState::new(40, 20);
        let left_row = state.paddle(Side::Left).pos.row;
        let right_row = state.paddle(Side::Right).pos.row;

        state.handle_key(Some(Key::Char('w')));
        state.handle_key(Some(Key::Down));

        assert_eq!(state.paddle(Side::Left).pos.row, left_row - 1);
        assert_eq!(state.paddle(Side::Right).pos.row, right_row + 1);

        // Snake keys and nothing at all are no-ops.
        let before = state.clone();
        assert_eq!(state.handle_key(Some(Key::Char('a'))), Flow::Continue);
        assert_eq!(state.handle_key(None), Flow::Continue);
        assert_eq!(state, before);
    }

    #[test]
    fn test_quit_terminates() {
        let mut state = PongState::new(40, 20);
        assert_eq!(state.handle_key(Some(Key::Char('q'))), Flow::Quit);
        assert_eq!(state.phase(), Phase::Over);

        let before = state.clone();
        state.tick();
        assert_eq!(state, before);
    }

    #[test]
    fn test_pause_freezes_everything() {
        let mut state = PongState::new(40, 20);
        state.handle_key(Some(Key::Char('p')));
        assert!(state.paused());

        let frozen = state.clone();
        let keys = [Key::Char('w'), Key::Char('s'), Key::Up, Key::Down];
        for i in 0..10 {
            state.handle_key(Some(keys[i % keys.len()]));
            state.tick();
        }
        assert_eq!(state, frozen);

        state.handle_key(Some(Key::Char('p')));
        assert_eq!(state.phase(), Phase::Running);
        let ball_before = state.ball().pos;
        state.tick();
        assert_ne!(state.ball().pos, ball_before);
    }

    #[test]
    fn test_idle_ticks_with_still_ball_change_nothing() {
        let mut state = PongState::new(40, 20);
        place_ball(&mut state, 10, 20, 0, 0);
        let before = state.clone();

        for _ in 0..25 {
            state.handle_key(None);
            state.tick();
        }
        assert_eq!(state, before);
    }

    #[test]
    fn test_miss_scores_and_serves_toward_loser() {
        let mut state = PongState::new(40, 20);
        state.paddle_mut(Side::Left).pos.row = 0;
        place_ball(&mut state, 15, 1, 0, -2);

        state.tick();

        assert_eq!(state.score(Side::Right), 1);
        assert_eq!(state.score(Side::Left), 0);
        assert_eq!(state.ball().pos, Point::new(10, 20));
        assert_eq!(state.ball().vel, Velocity::new(BALL_SERVE_VEL_ROW, -BALL_SERVE_VEL_COL));
        assert_eq!(Game::score(&state), 1);

        state.paddle_mut(Side::Right).pos.row = 0;
        place_ball(&mut state, 15, 38, 0, 2);
        state.tick();
        assert_eq!(state.score(Side::Left), 1);
        assert_eq!(state.ball().vel.col, BALL_SERVE_VEL_COL);
    }

    #[test]
    fn test_resize_keeps_layout_on_surface() {
        let mut state = PongState::new(80, 24);
        state.paddle_mut(Side::Left).pos.row = 20;
        place_ball(&mut state, 22, 70, 1, 2);

        state.resize(40, 12);

        assert_eq!(state.paddle(Side::Right).pos.col, 39);
        assert_eq!(state.paddle(Side::Left).pos.row, 8);
        assert!(state.paddle(Side::Left).within(40, 12));
        assert_eq!(state.ball().pos, Point::new(6, 20));
        assert_eq!(state.ball().vel.col, BALL_SERVE_VEL_COL);
    }

    #[test]
    fn test_tiny_surface_shrinks_paddles() {
        let state = PongState::new(3, 2);
        assert_eq!(state.paddle(Side::Left).height, 2);
        assert!(state.paddle(Side::Left).within(3, 2));
        assert!(state.ball().within(3, 2));
    }

    fn any_key() -> impl Strategy<Value = Option<Key>> {
        prop::option::of(prop::sample::select(vec![
            Key::Char('w'),
            Key::Char('s'),
            Key::Up,
            Key::Down,
            Key::Char('p'),
            Key::Char('x'),
        ]))
    }

    proptest! {
        #[test]
        fn prop_entities_stay_on_surface(
            width in 4u16..100,
            height in 4u16..50,
            keys in prop::collection::vec(any_key(), 0..300),
        ) {
            let mut state = PongState::new(width, height);
            for key in keys {
                state.handle_key(key);
                state.tick();
                for (_, e) in state.entities().iter() {
                    prop_assert!(
                        e.within(width as i32, height as i32),
                        "{:?} left a {}x{} surface", e, width, height
                    );
                }
            }
        }

        #[test]
        fn prop_colliding_ball_reverses_column_velocity(
            row in 0i32..16,
            speed in 1i32..4,
        ) {
            let mut state = PongState::new(40, 20);
            state.paddle_mut(Side::Left).pos = Point::new(row, 0);
            place_ball(&mut state, row + 1, 1, 0, -speed);

            state.tick();
            prop_assert_eq!(state.ball().vel.col, speed);
        }
    }
}
