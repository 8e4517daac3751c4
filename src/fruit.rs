use log::debug;
use rand::Rng;

use crate::config::Board;
use crate::snake::{Point, Snake};

/// Picks a uniformly random playable cell that no snake segment occupies.
///
/// Candidates that land on the snake are rejected and redrawn. The loop is
/// unbounded: on a board with no free cell it never returns. `board` must
/// have at least one playable cell.
#[must_use]
pub fn place_fruit<R: Rng + ?Sized>(rng: &mut R, snake: &Snake, board: Board) -> Point {
    debug_assert!(board.has_cells());

    let mut rejected = 0_u32;
    loop {
        let candidate = Point {
            x: rng.gen_range(0..board.x_bound()),
            y: rng.gen_range(0..board.y_bound()),
        };

        if !snake.occupies(candidate) {
            debug!("placed fruit at {candidate:?} after {rejected} rejections");
            return candidate;
        }

        rejected = rejected.saturating_add(1);
    }
}

/// Returns true when `fruit` must be replaced for the current board.
#[must_use]
pub fn is_stale(fruit: Point, board: Board) -> bool {
    !fruit.is_within_bounds(board)
}
