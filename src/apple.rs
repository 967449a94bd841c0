use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// The single apple currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Apple {
    pub position: Position,
}

impl Apple {
    /// Creates an apple at `position`.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Places an apple uniformly at random on a cell the snake does not
    /// occupy.
    ///
    /// Rejection sampling: draw a cell, redraw while it lies on the body.
    /// There is no retry bound; on a board the snake fills completely this
    /// does not return. Capacity is deliberately never checked.
    #[must_use]
    pub fn place<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Self {
        loop {
            let position = Position {
                x: rng.gen_range(0..i32::from(bounds.width)),
                y: rng.gen_range(0..i32::from(bounds.height)),
            };

            if !snake.occupies(position) {
                return Self::at(position);
            }
        }
    }
}
