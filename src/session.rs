use std::io;
use std::time::Duration;

use log::{info, warn};

use crate::config::{Board, POLL_TIMEOUT, RuntimeConfig};
use crate::game::{GameState, GameStatus, Snapshot};
use crate::input::GameInput;
use crate::scheduler::TickScheduler;

/// Terminal collaborator driven by the session loop.
pub trait Frontend {
    /// Waits up to `timeout` for one recognized input; `None` means no input.
    fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>>;

    /// Current board dimensions.
    fn board(&mut self) -> io::Result<Board>;

    /// Draws one frame.
    fn draw(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()>;
}

/// How a finished session ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SessionOutcome {
    Quit { score: u32 },
    GameOver { score: u32 },
    OutOfMemory { score: u32 },
}

/// One game session: state plus the tick schedule that drives it.
#[derive(Debug)]
pub struct Session {
    state: GameState,
    scheduler: TickScheduler,
}

impl Session {
    #[must_use]
    pub fn new(state: GameState, config: RuntimeConfig) -> Self {
        Self {
            state,
            scheduler: TickScheduler::new(config.speed),
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.scheduler.ticks()
    }

    /// Runs the loop until the session reaches a terminal status.
    pub fn run<F: Frontend>(&mut self, frontend: &mut F) -> io::Result<SessionOutcome> {
        let mut was_too_small = false;

        loop {
            if let Some(input) = frontend.poll_input(POLL_TIMEOUT)? {
                self.state.apply_input(input);
            }

            if self.state.status.is_finished() {
                break;
            }

            if !self.scheduler.tick() {
                continue;
            }

            let board = frontend.board()?;
            let too_small = board.is_too_small();
            if too_small != was_too_small {
                if too_small {
                    warn!("terminal too small to play: {board:?}");
                } else {
                    info!("terminal large enough again: {board:?}");
                }
                was_too_small = too_small;
            }

            if self.state.step(board).is_finished() {
                break;
            }

            frontend.draw(&self.state.snapshot())?;
        }

        Ok(self.outcome())
    }

    fn outcome(&self) -> SessionOutcome {
        let score = self.state.score;
        match self.state.status {
            GameStatus::GameOver => SessionOutcome::GameOver { score },
            GameStatus::OutOfMemory => SessionOutcome::OutOfMemory { score },
            GameStatus::Quit | GameStatus::Running => SessionOutcome::Quit { score },
        }
    }
}
