use std::mem;

use crate::config::Board;
use crate::error::GrowError;
use crate::input::{Axis, Direction};
use crate::segments::SegmentBuffer;

/// Grid position in cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the point lies inside the playable area.
    #[must_use]
    pub fn is_within_bounds(self, board: Board) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < board.x_bound() && self.y < board.y_bound()
    }

    /// Returns this point moved one cell toward `direction`.
    ///
    /// Both coordinates are wrapped into the board, so a point left outside
    /// a shrunken board comes back in on the next step.
    #[must_use]
    pub fn stepped(self, direction: Direction, board: Board) -> Self {
        let (dx, dy) = match direction.step() {
            (Axis::X, delta) => (delta, 0),
            (Axis::Y, delta) => (0, delta),
        };

        Self {
            x: wrap_axis(self.x + dx, board.x_bound()),
            y: wrap_axis(self.y + dy, board.y_bound()),
        }
    }
}

/// Wraps one coordinate: negative becomes `upper_bound - 1`, at or past the bound becomes 0.
fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    if value < 0 {
        (upper_bound - 1).max(0)
    } else if value >= upper_bound {
        0
    } else {
        value
    }
}

/// The snake body and its heading.
#[derive(Debug, Clone)]
pub struct Snake {
    body: SegmentBuffer,
    direction: Direction,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    pub fn new(start: Point, direction: Direction) -> Result<Self, GrowError> {
        Ok(Self {
            body: SegmentBuffer::new(start)?,
            direction,
        })
    }

    /// Creates a snake from explicit body segments (front is head).
    pub fn from_segments(segments: Vec<Point>, direction: Direction) -> Result<Self, GrowError> {
        Ok(Self {
            body: SegmentBuffer::from_segments(segments)?,
            direction,
        })
    }

    /// Creates a snake around an existing buffer.
    #[must_use]
    pub fn from_buffer(body: SegmentBuffer, direction: Direction) -> Self {
        Self { body, direction }
    }

    /// Applies a turn request; reversals are ignored.
    pub fn turn(&mut self, requested: Direction) {
        self.direction = self.direction.turned(requested);
    }

    /// Moves the head one cell and drags every trailing segment after it.
    pub fn advance(&mut self, board: Board) {
        let direction = self.direction;
        let (head, trailing) = self.body.split_head_mut();

        let mut previous = *head;
        *head = head.stepped(direction, board);

        for segment in trailing {
            previous = mem::replace(segment, previous);
        }
    }

    /// Adds one segment on top of the tail.
    pub fn grow(&mut self) -> Result<(), GrowError> {
        self.body.append_tail()
    }

    /// Returns true if the head overlaps any trailing segment.
    #[must_use]
    pub fn is_self_collision(&self) -> bool {
        let head = self.head();
        self.segments().iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns true if any segment occupies `point`.
    #[must_use]
    pub fn occupies(&self, point: Point) -> bool {
        self.segments().contains(&point)
    }

    #[must_use]
    pub fn head(&self) -> Point {
        self.body.head()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Committed body capacity in segments.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.body.capacity()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Body segments from head to tail.
    #[must_use]
    pub fn segments(&self) -> &[Point] {
        self.body.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Board;
    use crate::input::Direction;

    use super::{Point, Snake};

    const ALL_DIRECTIONS: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    fn snake(segments: &[(i32, i32)], direction: Direction) -> Snake {
        Snake::from_segments(
            segments.iter().map(|&(x, y)| Point::new(x, y)).collect(),
            direction,
        )
        .expect("snake should allocate")
    }

    #[test]
    fn point_wrapping_at_both_edges() {
        let board = Board::new(10, 9);

        assert_eq!(
            Point::new(9, 3).stepped(Direction::East, board),
            Point::new(0, 3)
        );
        assert_eq!(
            Point::new(0, 3).stepped(Direction::West, board),
            Point::new(9, 3)
        );
        assert_eq!(
            Point::new(4, 7).stepped(Direction::South, board),
            Point::new(4, 0)
        );
        assert_eq!(
            Point::new(4, 0).stepped(Direction::North, board),
            Point::new(4, 7)
        );
    }

    #[test]
    fn point_past_shrunken_bound_wraps_to_zero() {
        let board = Board::new(10, 10);

        assert_eq!(
            Point::new(30, 2).stepped(Direction::East, board),
            Point::new(0, 2)
        );
        assert_eq!(
            Point::new(2, 30).stepped(Direction::South, board),
            Point::new(2, 0)
        );
    }

    #[test]
    fn advance_never_leaves_the_playable_area() {
        for width in 1..8u16 {
            for height in 2..8u16 {
                let board = Board::new(width, height);
                for y in -1..=i32::from(height) {
                    for x in -1..=i32::from(width) {
                        for direction in ALL_DIRECTIONS {
                            let mut snake = snake(&[(x, y)], direction);
                            snake.advance(board);
                            let head = snake.head();
                            assert!(head.is_within_bounds(board), "{head:?} on {board:?}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn off_axis_coordinate_wraps_after_shrink() {
        let mut snake = snake(&[(5, 17)], Direction::East);
        let shrunk = Board::new(16, 16);

        snake.advance(shrunk);
        assert_eq!(snake.head(), Point::new(6, 0));

        for _ in 0..40 {
            snake.advance(shrunk);
            assert!(snake.head().is_within_bounds(shrunk));
        }
    }

    #[test]
    fn snake_moves_one_cell_per_step() {
        let mut snake = Snake::new(Point::ORIGIN, Direction::East).expect("snake should allocate");

        snake.advance(Board::new(20, 20));

        assert_eq!(snake.head(), Point::new(1, 0));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn trailing_segments_follow_the_leader() {
        let mut snake = snake(&[(3, 2), (2, 2), (1, 2), (1, 3)], Direction::South);

        snake.advance(Board::new(20, 20));

        assert_eq!(
            snake.segments(),
            &[
                Point::new(3, 3),
                Point::new(3, 2),
                Point::new(2, 2),
                Point::new(1, 2)
            ]
        );
    }

    #[test]
    fn grown_segment_separates_on_next_move() {
        let mut snake = snake(&[(5, 5), (4, 5)], Direction::East);
        let board = Board::new(20, 20);

        snake.grow().expect("growth should succeed");
        assert_eq!(snake.segments()[2], Point::new(4, 5));

        snake.advance(board);
        assert_eq!(
            snake.segments(),
            &[Point::new(6, 5), Point::new(5, 5), Point::new(4, 5)]
        );
    }

    #[test]
    fn turn_rejects_reversal() {
        let mut snake = Snake::new(Point::new(5, 5), Direction::North).expect("snake should allocate");

        snake.turn(Direction::South);
        snake.advance(Board::new(40, 20));

        assert_eq!(snake.direction(), Direction::North);
        assert_eq!(snake.head(), Point::new(5, 4));
    }

    #[test]
    fn single_segment_never_self_collides() {
        let mut snake = Snake::new(Point::ORIGIN, Direction::East).expect("snake should allocate");
        let board = Board::new(3, 2);

        for _ in 0..10 {
            snake.advance(board);
            assert!(!snake.is_self_collision());
        }
    }

    #[test]
    fn head_moved_onto_body_is_a_collision() {
        // A 2x2 loop: heading West from (2,2) lands on (1,2).
        let mut snake = snake(
            &[(2, 2), (2, 3), (1, 3), (1, 2), (1, 1)],
            Direction::North,
        );
        snake.turn(Direction::West);

        snake.advance(Board::new(6, 7));

        assert_eq!(snake.head(), Point::new(1, 2));
        assert!(snake.is_self_collision());
    }

    #[test]
    fn two_segment_snake_collides_when_head_lands_on_tail() {
        let snake = snake(&[(4, 4), (4, 4)], Direction::East);

        assert!(snake.is_self_collision());
    }

    #[test]
    fn collapsed_spawn_does_not_collide_after_moving() {
        let mut snake = snake(&[(5, 5), (5, 5), (5, 5)], Direction::East);

        snake.advance(Board::new(20, 20));

        assert!(!snake.is_self_collision());
        assert_eq!(snake.head(), Point::new(6, 5));
    }
}
