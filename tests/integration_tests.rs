//! Whole sessions driven through the headless game loop.

use std::time::Duration;

use tui_arcade::core::{Point, PongState, Side, Snake, SnakeState, Velocity};
use tui_arcade::engine::{GameLoop, HeadlessSurface, LoopConfig, LoopExit, ScriptedKeys};
use tui_arcade::term::{PongView, SnakeView};
use tui_arcade::types::{Key, Phase};

fn config(max_ticks: Option<u64>) -> LoopConfig {
    LoopConfig {
        tick: Duration::ZERO,
        game_over_hold: Duration::ZERO,
        max_ticks,
    }
}

#[test]
fn test_pong_unguarded_miss_scores_for_left() {
    // 20x10: ball serves from (5, 10) down-right and leaves past col 19 on tick 5.
    let mut game = PongState::new(20, 10);
    let mut driver = GameLoop::new(
        HeadlessSurface::new(20, 10),
        ScriptedKeys::default(),
        config(Some(5)),
    );

    assert_eq!(driver.run(&mut game, &PongView).unwrap(), LoopExit::TickLimit);

    assert_eq!(game.score(Side::Left), 1);
    assert_eq!(game.score(Side::Right), 0);
    // Re-served from the centre toward the side that conceded.
    assert_eq!(game.ball().pos, Point::new(5, 10));
    assert_eq!(game.ball().vel, Velocity::new(1, 2));
}

#[test]
fn test_pong_guarded_ball_is_returned() {
    let mut game = PongState::new(20, 10);
    let keys = ScriptedKeys::new([Some(Key::Down), Some(Key::Down), Some(Key::Down)]);
    let mut driver = GameLoop::new(HeadlessSurface::new(20, 10), keys, config(Some(5)));

    driver.run(&mut game, &PongView).unwrap();

    assert_eq!(game.paddle(Side::Right).pos.row, 6);
    assert_eq!(game.score(Side::Left), 0);
    // Corner hit: both components flip on the same tick.
    assert_eq!(game.ball().vel, Velocity::new(-1, -2));
    assert_eq!(game.ball().pos, Point::new(8, 16));
}

#[test]
fn test_pong_pause_freezes_everything() {
    let mut game = PongState::new(20, 10);
    let keys = ScriptedKeys::new([
        Some(Key::Char('p')),
        Some(Key::Char('w')),
        Some(Key::Up),
        None,
    ]);
    let mut driver = GameLoop::new(HeadlessSurface::new(20, 10), keys, config(Some(4)));

    driver.run(&mut game, &PongView).unwrap();

    assert_eq!(game.phase(), Phase::Paused);
    assert_eq!(game.ball().pos, Point::new(5, 10));
    assert_eq!(game.paddle(Side::Left).pos.row, 3);
    assert_eq!(game.paddle(Side::Right).pos.row, 3);
    assert!(driver.surface().frames().is_empty());
}

#[test]
fn test_snake_eats_then_hits_the_floor() {
    let snake = Snake::new([Point::new(5, 1), Point::new(5, 2)], Velocity::new(0, 1)).unwrap();
    let mut game = SnakeState::with_snake(snake, Point::new(5, 4), 7);

    // Two ticks right (eating at (5, 4)), then down until the head leaves row 14.
    let keys = ScriptedKeys::new([None, None, Some(Key::Down)]);
    let mut driver = GameLoop::new(HeadlessSurface::new(80, 24), keys, config(None));

    let exit = driver.run(&mut game, &SnakeView).unwrap();

    assert!(game.score() >= 1);
    assert_eq!(exit, LoopExit::GameOver { score: game.score() });
    assert_eq!(exit.status(), 0);
    assert_eq!(driver.ticks(), 12);
    assert_eq!(game.snake().head(), Point::new(15, 4));
    assert_eq!(game.snake().len(), 2 + game.score() as usize);
}

#[test]
fn test_snake_reversal_is_ignored() {
    let snake = Snake::new([Point::new(5, 1), Point::new(5, 2)], Velocity::new(0, 1)).unwrap();
    let mut game = SnakeState::with_snake(snake, Point::new(0, 0), 7);
    let keys = ScriptedKeys::new([Some(Key::Left), Some(Key::Char('a'))]);
    let mut driver = GameLoop::new(HeadlessSurface::new(80, 24), keys, config(Some(2)));

    driver.run(&mut game, &SnakeView).unwrap();

    assert_eq!(game.phase(), Phase::Running);
    assert_eq!(game.snake().head(), Point::new(5, 4));
}

#[test]
fn test_quit_exits_with_failure_status() {
    let mut game = SnakeState::new(3);
    let keys = ScriptedKeys::new([None, Some(Key::Esc)]);
    let mut driver = GameLoop::new(HeadlessSurface::new(80, 24), keys, config(None));

    let exit = driver.run(&mut game, &SnakeView).unwrap();

    assert_eq!(exit, LoopExit::Quit);
    assert_eq!(exit.status(), 1);
    assert_eq!(driver.ticks(), 2);
    assert_eq!(driver.surface().frames().len(), 1);
}
