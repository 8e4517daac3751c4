use std::io;
use std::panic;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::config::Board;
use crate::game::Snapshot;
use crate::input::{GameInput, map_key};
use crate::renderer;
use crate::session::Frontend;

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Owns terminal lifecycle (raw mode + alternate screen) for one game session.
///
/// On drop, this type restores terminal state best-effort.
pub struct TerminalSession {
    terminal: AppTerminal,
}

impl TerminalSession {
    /// Enters raw mode, switches to alternate screen, and creates a ratatui terminal.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        let backend = CrosstermBackend::new(stdout);
        match Terminal::new(backend) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(error) => {
                let _ = cleanup_terminal_best_effort();
                Err(error)
            }
        }
    }
}

impl Frontend for TerminalSession {
    fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => Ok(map_key(key)),
            _ => Ok(None),
        }
    }

    fn board(&mut self) -> io::Result<Board> {
        let size = self.terminal.size()?;
        Ok(Board::from_terminal(size.width, size.height))
    }

    fn draw(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        self.terminal.draw(|frame| renderer::render(frame, snapshot))?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = cleanup_terminal_best_effort();
    }
}

/// Restores the terminal before the default panic message is printed.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal_best_effort();
        default_hook(panic_info);
    }));
}

fn cleanup_terminal_best_effort() -> io::Result<()> {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)
}
