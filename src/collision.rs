use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Fatal outcomes of a prospective head position.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    Wall,
    SelfHit,
}

/// Classifies `prospective` against the bounds and the current body.
///
/// The body is evaluated before this tick's tail-truncation decision, so the
/// cell the tail currently occupies counts as occupied even when the tail
/// would move away this tick. Moving into it is a self-collision.
#[must_use]
pub fn classify(prospective: Position, body: &Snake, bounds: GridSize) -> Option<Collision> {
    if !prospective.is_within_bounds(bounds) {
        return Some(Collision::Wall);
    }

    if body.occupies(prospective) {
        return Some(Collision::SelfHit);
    }

    None
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::snake::{Position, Snake};

    use super::{Collision, classify};

    const BOUNDS: GridSize = GridSize {
        width: 10,
        height: 10,
    };

    #[test]
    fn leaving_the_grid_is_a_wall_collision() {
        let snake = Snake::new(Position { x: 0, y: 1 });

        for prospective in [
            Position { x: -1, y: 1 },
            Position { x: 1, y: -1 },
            Position { x: 10, y: 1 },
            Position { x: 1, y: 10 },
        ] {
            assert_eq!(classify(prospective, &snake, BOUNDS), Some(Collision::Wall));
        }
    }

    #[test]
    fn moving_into_a_body_segment_is_a_self_collision() {
        let snake = Snake::from_segments(vec![
            Position { x: 4, y: 4 },
            Position { x: 3, y: 4 },
            Position { x: 3, y: 5 },
        ]);

        assert_eq!(
            classify(Position { x: 3, y: 5 }, &snake, BOUNDS),
            Some(Collision::SelfHit)
        );
    }

    #[test]
    fn the_current_tail_cell_still_counts_as_occupied() {
        // Tail at (2,4) would be vacated this tick on a plain move, but the
        // classification runs against the pre-truncation body.
        let snake = Snake::from_segments(vec![
            Position { x: 3, y: 4 },
            Position { x: 3, y: 5 },
            Position { x: 2, y: 5 },
            Position { x: 2, y: 4 },
        ]);

        assert_eq!(
            classify(Position { x: 2, y: 4 }, &snake, BOUNDS),
            Some(Collision::SelfHit)
        );
    }

    #[test]
    fn a_free_in_bounds_cell_is_clear() {
        let snake = Snake::new(Position { x: 5, y: 5 });

        assert_eq!(classify(Position { x: 6, y: 5 }, &snake, BOUNDS), None);
    }
}
