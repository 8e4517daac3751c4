use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Board;
use crate::error::GrowError;
use crate::fruit::{is_stale, place_fruit};
use crate::input::{Direction, GameInput};
use crate::snake::{Point, Snake};

/// Where every session's snake is spawned.
pub const START_POSITION: Point = Point::ORIGIN;

/// Heading of a freshly spawned snake.
pub const START_DIRECTION: Direction = Direction::East;

/// Session state machine. Every variant but `Running` is terminal.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
    OutOfMemory,
    Quit,
}

impl GameStatus {
    #[must_use]
    pub fn is_finished(self) -> bool {
        self != Self::Running
    }
}

/// Read-only view of one frame, handed to the renderer.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub segments: &'a [Point],
    pub fruit: Point,
    pub score: u32,
    pub capacity: usize,
    pub board: Board,
    pub too_small: bool,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub fruit: Point,
    pub score: u32,
    pub status: GameStatus,
    pending_direction: Option<Direction>,
    fruit_unplaced: bool,
    board: Board,
    rng: StdRng,
}

impl GameState {
    /// Creates a session seeded from OS entropy.
    pub fn new(board: Board) -> Result<Self, GrowError> {
        Self::with_rng(board, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    pub fn new_with_seed(board: Board, seed: u64) -> Result<Self, GrowError> {
        Self::with_rng(board, StdRng::seed_from_u64(seed))
    }

    fn with_rng(board: Board, mut rng: StdRng) -> Result<Self, GrowError> {
        let snake = Snake::new(START_POSITION, START_DIRECTION)?;
        // With no playable cell the fruit is placed by the first step that has one.
        let fruit_unplaced = !board.has_cells();
        let fruit = if fruit_unplaced {
            START_POSITION
        } else {
            place_fruit(&mut rng, &snake, board)
        };

        Ok(Self {
            snake,
            fruit,
            score: 0,
            status: GameStatus::Running,
            pending_direction: None,
            fruit_unplaced,
            board,
            rng,
        })
    }

    /// Applies one input event from the polling layer.
    ///
    /// Directions are buffered until the next step, last one wins. Quit
    /// ends a running session immediately.
    pub fn apply_input(&mut self, input: GameInput) {
        if self.status.is_finished() {
            return;
        }

        match input {
            GameInput::Direction(direction) => self.pending_direction = Some(direction),
            GameInput::Quit => {
                info!("player quit with {} points", self.score);
                self.status = GameStatus::Quit;
            }
        }
    }

    /// Direction buffered for the next step, if any.
    #[must_use]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    /// Runs one simulation step against the current board and returns the new status.
    pub fn step(&mut self, board: Board) -> GameStatus {
        if self.status.is_finished() {
            return self.status;
        }

        self.board = board;
        if !board.has_cells() {
            return self.status;
        }

        if let Some(direction) = self.pending_direction.take() {
            self.snake.turn(direction);
        }
        self.snake.advance(board);

        if self.snake.is_self_collision() {
            info!(
                "self collision at {:?}, game over with {} points",
                self.snake.head(),
                self.score
            );
            self.status = GameStatus::GameOver;
            return self.status;
        }

        if self.fruit_unplaced || is_stale(self.fruit, board) {
            debug!("fruit {:?} needs a cell on {board:?}", self.fruit);
            self.fruit = place_fruit(&mut self.rng, &self.snake, board);
            self.fruit_unplaced = false;
        }

        if self.snake.head() == self.fruit {
            if let Err(error) = self.snake.grow() {
                warn!("{error}");
                self.status = GameStatus::OutOfMemory;
                return self.status;
            }

            self.score += 1;
            debug!(
                "ate fruit at {:?}, length {} of capacity {}",
                self.fruit,
                self.snake.len(),
                self.snake.capacity()
            );
            self.fruit = place_fruit(&mut self.rng, &self.snake, board);
        }

        self.status
    }

    /// Builds the renderer's view of this frame.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            segments: self.snake.segments(),
            fruit: self.fruit,
            score: self.score,
            capacity: self.snake.capacity(),
            board: self.board,
            too_small: self.board.is_too_small(),
        }
    }
}
