use gridsnake::apple::Apple;
use gridsnake::collision::Collision;
use gridsnake::config::{GridSize, Tuning};
use gridsnake::game::{GameState, GameStatus};
use gridsnake::input::Direction;
use gridsnake::snake::{Position, Snake};

#[test]
fn stepwise_apple_collection_and_wall_collision() {
    let mut state = GameState::new_with_seed(
        GridSize {
            width: 6,
            height: 4,
        },
        Tuning::default(),
        42,
    );

    state.snake = Snake::new(Position { x: 1, y: 1 });
    state.apple = Apple::at(Position { x: 2, y: 1 });

    state.tick();
    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(state.score, 1);
    assert_eq!(state.snake.len(), 2);
    assert_eq!(state.snake.head(), Position { x: 2, y: 1 });
    assert_eq!(
        state.tick_delay_ms,
        Tuning::default().initial_speed_ms - Tuning::default().speed_decrement_ms
    );

    // Pin the respawned apple out of the path before heading for the wall.
    state.apple = Apple::at(Position { x: 5, y: 3 });

    state.request_direction(Direction::Up);
    state.tick();
    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(state.snake.head(), Position { x: 2, y: 0 });
    assert_eq!(state.snake.len(), 2);

    state.tick();
    assert_eq!(state.status, GameStatus::GameOver);
    assert_eq!(state.death_reason, Some(Collision::Wall));
    // The fatal tick leaves the body where it was.
    assert_eq!(state.snake.head(), Position { x: 2, y: 0 });
    assert_eq!(state.snake.len(), 2);
}

#[test]
fn consecutive_apples_pin_the_delay_at_the_floor() {
    let tuning = Tuning {
        initial_speed_ms: 62,
        min_speed_ms: 60,
        speed_decrement_ms: 5,
        ..Tuning::default()
    };
    let mut state = GameState::new_with_seed(
        GridSize {
            width: 8,
            height: 8,
        },
        tuning,
        7,
    );

    state.snake = Snake::new(Position { x: 1, y: 1 });
    state.apple = Apple::at(Position { x: 2, y: 1 });

    state.tick();
    assert_eq!(state.score, 1);
    assert_eq!(state.tick_delay_ms, 60);

    state.apple = Apple::at(Position { x: 3, y: 1 });

    state.tick();
    assert_eq!(state.score, 2);
    assert_eq!(state.snake.len(), 3);
    assert_eq!(state.tick_delay_ms, 60);
}

#[test]
fn game_over_reset_cycle_preserves_only_the_grid() {
    let mut state = GameState::new_with_seed(
        GridSize {
            width: 6,
            height: 6,
        },
        Tuning::default(),
        3,
    );

    state.snake = Snake::new(Position { x: 4, y: 2 });
    state.apple = Apple::at(Position { x: 5, y: 2 });

    state.tick();
    state.tick();
    assert_eq!(state.status, GameStatus::GameOver);
    assert_eq!(state.score, 1);

    state.reset();

    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(state.score, 0);
    assert_eq!(state.snake.len(), 1);
    assert_eq!(state.snake.head(), Position { x: 3, y: 3 });
    assert_eq!(state.tick_delay_ms, Tuning::default().initial_speed_ms);
    assert_eq!(state.direction(), Direction::Right);
    assert!(!state.snake.occupies(state.apple.position));
}
