use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit vector for one movement step.
    #[must_use]
    pub fn unit_vector(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Single-slot register bridging asynchronous input and the tick clock.
///
/// Input events only ever write the pending slot through [`request`];
/// the tick context reads it back through [`commit`] once per tick. There is
/// no queue: between two commits the last legal request wins.
///
/// [`request`]: DirectionBuffer::request
/// [`commit`]: DirectionBuffer::commit
#[derive(Debug, Clone, Copy)]
pub struct DirectionBuffer {
    committed: Direction,
    pending: Direction,
}

impl DirectionBuffer {
    /// Creates a buffer with both slots set to `initial`.
    #[must_use]
    pub fn new(initial: Direction) -> Self {
        Self {
            committed: initial,
            pending: initial,
        }
    }

    /// Records `direction` as the pending direction.
    ///
    /// A request for the exact opposite of the committed direction is
    /// dropped: the second segment occupies the cell directly behind the
    /// head, so a 180° turn would be an immediate self-collision.
    pub fn request(&mut self, direction: Direction) {
        if direction == self.committed.opposite() {
            return;
        }
        self.pending = direction;
    }

    /// Promotes the pending direction to committed and returns it.
    ///
    /// Called exactly once at the start of each tick. Requests arriving
    /// after this call take effect on the following tick.
    pub fn commit(&mut self) -> Direction {
        self.committed = self.pending;
        self.committed
    }

    /// Returns the direction applied during the current tick.
    #[must_use]
    pub fn committed(&self) -> Direction {
        self.committed
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Confirm,
    Quit,
}

/// Polls crossterm key events and maps them to [`GameInput`].
#[derive(Debug)]
pub struct InputHandler {
    poll_timeout: Duration,
}

impl InputHandler {
    /// Creates a handler that waits at most `poll_timeout` per poll.
    #[must_use]
    pub fn new(poll_timeout: Duration) -> Self {
        Self { poll_timeout }
    }

    /// Returns the next mapped input event, or `None` when nothing relevant
    /// arrived within the poll timeout.
    pub fn poll_input(&mut self) -> io::Result<Option<GameInput>> {
        if !event::poll(self.poll_timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => Ok(map_key(key.code)),
            _ => Ok(None),
        }
    }
}

fn map_key(code: KeyCode) -> Option<GameInput> {
    match code {
        KeyCode::Up | KeyCode::Char('w') => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameInput::Confirm),
        KeyCode::Esc | KeyCode::Char('q') => Some(GameInput::Quit),
        _ => None,
    }
}
