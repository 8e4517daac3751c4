use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, error, info};
use simplelog::{Config, WriteLogger};
use wrapsnake::config::{RuntimeConfig, Speed, parse_speed};
use wrapsnake::game::GameState;
use wrapsnake::session::{Frontend, Session, SessionOutcome};
use wrapsnake::terminal_runtime::{TerminalSession, install_panic_hook};

/// Snake on a wrap-around board.
#[derive(Debug, Parser)]
#[command(after_help = "CONTROLS:\n\tArrow keys (or WASD) to move.\n\tQ to quit.")]
struct Cli {
    /// Tick divisor: 1 is fastest, 8 is default.
    #[arg(short, long, value_parser = parse_speed, allow_hyphen_values = true)]
    speed: Option<Speed>,

    /// Read settings from this JSON file instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a debug log to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(error) = init_logging(cli.log_file.as_deref()) {
        eprintln!("Failed to open log file: {error}");
        return ExitCode::FAILURE;
    }

    let config = match RuntimeConfig::resolve(cli.config.as_deref(), cli.speed) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };

    install_panic_hook();

    match run(config) {
        Ok(outcome) => report(outcome),
        Err(error) => {
            error!("terminal failure: {error}");
            eprintln!("Terminal error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: RuntimeConfig) -> io::Result<SessionOutcome> {
    let mut terminal = TerminalSession::enter()?;
    let board = terminal.board()?;

    let state = match GameState::new(board) {
        Ok(state) => state,
        Err(error) => {
            error!("{error}");
            return Ok(SessionOutcome::OutOfMemory { score: 0 });
        }
    };

    info!("starting session: speed {}, board {board:?}", config.speed.get());
    let mut session = Session::new(state, config);
    let outcome = session.run(&mut terminal)?;
    info!("session ended after {} ticks: {outcome:?}", session.ticks());

    Ok(outcome)
}

fn report(outcome: SessionOutcome) -> ExitCode {
    match outcome {
        SessionOutcome::Quit { .. } => ExitCode::SUCCESS,
        SessionOutcome::GameOver { score } => {
            println!("GAME OVER! Finished with {score} points!");
            ExitCode::SUCCESS
        }
        SessionOutcome::OutOfMemory { .. } => {
            eprintln!("Ran out of memory!");
            ExitCode::SUCCESS
        }
    }
}

fn init_logging(path: Option<&Path>) -> io::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), file).map_err(io::Error::other)
}
