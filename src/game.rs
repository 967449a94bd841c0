use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::apple::Apple;
use crate::collision::{self, Collision};
use crate::config::{GridSize, Tuning};
use crate::input::{Direction, DirectionBuffer};
use crate::snake::{Position, Snake};

/// Fixed direction every session starts with.
const START_DIRECTION: Direction = Direction::Right;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Complete mutable game state for one session.
///
/// Created once at startup and reinitialized in place by [`reset`] on every
/// game-over → restart transition; the high score lives outside this type.
///
/// [`reset`]: GameState::reset
#[derive(Debug)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Apple,
    pub score: u32,
    pub tick_delay_ms: u64,
    pub tick_count: u64,
    pub status: GameStatus,
    pub death_reason: Option<Collision>,
    directions: DirectionBuffer,
    bounds: GridSize,
    tuning: Tuning,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh session with an entropy-seeded RNG.
    #[must_use]
    pub fn new(bounds: GridSize, tuning: Tuning) -> Self {
        Self::with_rng(bounds, tuning, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, tuning: Tuning, seed: u64) -> Self {
        Self::with_rng(bounds, tuning, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, tuning: Tuning, mut rng: StdRng) -> Self {
        let snake = Snake::new(start_position(bounds));
        let apple = Apple::place(&mut rng, bounds, &snake);

        Self {
            snake,
            apple,
            score: 0,
            tick_delay_ms: tuning.initial_speed_ms,
            tick_count: 0,
            status: GameStatus::Playing,
            death_reason: None,
            directions: DirectionBuffer::new(START_DIRECTION),
            bounds,
            tuning,
            rng,
        }
    }

    /// Reinitializes the session in place after a game over.
    ///
    /// The snake collapses to one starting segment, directions return to the
    /// fixed default, score and tick delay are restored, and the apple is
    /// re-placed. Grid bounds, tuning, and the RNG carry over.
    pub fn reset(&mut self) {
        self.snake = Snake::new(start_position(self.bounds));
        self.apple = Apple::place(&mut self.rng, self.bounds, &self.snake);
        self.score = 0;
        self.tick_delay_ms = self.tuning.initial_speed_ms;
        self.tick_count = 0;
        self.status = GameStatus::Playing;
        self.death_reason = None;
        self.directions = DirectionBuffer::new(START_DIRECTION);
    }

    /// Advances the simulation by one tick.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }

        let direction = self.directions.commit();
        let prospective = self.snake.head().stepped(direction);

        if let Some(cause) = collision::classify(prospective, &self.snake, self.bounds) {
            self.death_reason = Some(cause);
            self.status = GameStatus::GameOver;
            return;
        }

        let ate = prospective == self.apple.position;
        self.snake.advance(prospective, ate);

        if ate {
            self.score += 1;
            self.tick_delay_ms = accelerated_delay(self.tick_delay_ms, &self.tuning);
            self.apple = Apple::place(&mut self.rng, self.bounds, &self.snake);
        }

        self.tick_count += 1;
    }

    /// Forwards one directional request to the pending-direction register.
    ///
    /// Input arrives asynchronously relative to the tick clock; it only ever
    /// writes this one slot and performs no game-logic computation.
    pub fn request_direction(&mut self, direction: Direction) {
        if self.status == GameStatus::Playing {
            self.directions.request(direction);
        }
    }

    /// Returns the direction applied during the current tick.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.directions.committed()
    }

    /// Returns the grid bounds for this session.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }
}

/// Applies the per-apple difficulty step to the tick delay.
#[must_use]
pub fn accelerated_delay(current_ms: u64, tuning: &Tuning) -> u64 {
    current_ms
        .saturating_sub(tuning.speed_decrement_ms)
        .max(tuning.min_speed_ms)
}

fn start_position(bounds: GridSize) -> Position {
    Position {
        x: i32::from(bounds.width / 2),
        y: i32::from(bounds.height / 2),
    }
}
