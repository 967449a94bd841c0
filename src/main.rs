use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use thiserror::Error;

use gridsnake::clock::TickScheduler;
use gridsnake::config::{
    DEFAULT_CELL_SIZE, DEFAULT_INITIAL_SPEED_MS, DEFAULT_MIN_SPEED_MS, DEFAULT_SPEED_DECREMENT_MS,
    Tuning, TuningError,
};
use gridsnake::game::{GameState, GameStatus};
use gridsnake::input::{GameInput, InputHandler};
use gridsnake::renderer;
use gridsnake::score::{HighScoreStore, StoreError};
use gridsnake::terminal_runtime::TerminalGuard;
use gridsnake::ui::hud::HudInfo;

/// How long one input poll may block; doubles as the loop's idle sleep.
const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(10);

#[derive(Debug, Parser)]
#[command(name = "gridsnake", about = "Tick-driven grid Snake for the terminal")]
struct Cli {
    /// Pixels per grid cell; the play field divides into this.
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    cell_size: u16,

    /// Starting tick delay in milliseconds.
    #[arg(long, default_value_t = DEFAULT_INITIAL_SPEED_MS)]
    initial_speed: u64,

    /// Smallest tick delay in milliseconds.
    #[arg(long, default_value_t = DEFAULT_MIN_SPEED_MS)]
    min_speed: u64,

    /// Tick-delay reduction per apple in milliseconds.
    #[arg(long, default_value_t = DEFAULT_SPEED_DECREMENT_MS)]
    speed_decrement: u64,
}

impl Cli {
    fn tuning(&self) -> Tuning {
        Tuning {
            cell_size: self.cell_size,
            initial_speed_ms: self.initial_speed,
            min_speed_ms: self.min_speed,
            speed_decrement_ms: self.speed_decrement,
        }
    }
}

#[derive(Debug, Error)]
enum AppError {
    #[error("invalid tuning: {0}")]
    Tuning(#[from] TuningError),
    #[error("high-score store: {0}")]
    Store(#[from] StoreError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let tuning = cli.tuning();
    tuning.validate()?;

    // Load before entering raw mode so a corrupt score file is reported on a
    // usable terminal.
    let store = HighScoreStore::open();
    let high_score = store.load()?;

    run(tuning, store, high_score)
}

fn run(tuning: Tuning, store: HighScoreStore, mut high_score: u32) -> Result<(), AppError> {
    let mut session = TerminalGuard::enter()?;
    let mut input = InputHandler::new(INPUT_POLL_TIMEOUT);
    let mut state = GameState::new(tuning.grid_size(), tuning);
    let mut scheduler = TickScheduler::new();
    scheduler.arm(Instant::now(), tick_delay(&state));

    loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state, HudInfo { high_score }))?;

        match input.poll_input()? {
            Some(GameInput::Quit) => break,
            Some(GameInput::Confirm) if state.status == GameStatus::GameOver => {
                // The player acknowledged the game-over notification:
                // reinitialize and arm the first tick of the new session.
                state.reset();
                scheduler.cancel();
                scheduler.arm(Instant::now(), tick_delay(&state));
            }
            Some(GameInput::Direction(direction)) => state.request_direction(direction),
            Some(GameInput::Confirm) | None => {}
        }

        if scheduler.fire(Instant::now()) {
            state.tick();

            match state.status {
                GameStatus::Playing => {
                    // Re-arm with the delay as of *this* tick, so an apple's
                    // speed-up takes effect starting with the next one.
                    scheduler.arm(Instant::now(), tick_delay(&state));
                }
                GameStatus::GameOver => {
                    match store.record(high_score, state.score) {
                        Ok(ratcheted) => high_score = ratcheted,
                        Err(error) => eprintln!("Failed to save high score: {error}"),
                    }
                    // No tick is pending while the notification is up.
                    scheduler.cancel();
                }
            }
        }
    }

    Ok(())
}

fn tick_delay(state: &GameState) -> Duration {
    Duration::from_millis(state.tick_delay_ms)
}
