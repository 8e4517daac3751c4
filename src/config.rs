use std::fs;
use std::io;
use std::num::NonZeroU64;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ratatui::style::Color;
use serde::Deserialize;

use crate::error::ConfigError;

const APP_DIR_NAME: &str = "wrapsnake";
const CONFIG_FILE_NAME: &str = "config.json";

/// Segments added to the body buffer each time it runs out of room.
pub const ALLOC_CHUNK: usize = 64;

/// Simulation step divisor used when nothing else is configured.
pub const DEFAULT_SPEED: u64 = 8;

/// Input poll timeout; one tick of the scheduler.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(15);

/// Terminal columns occupied by one grid cell, so cells look square.
pub const CELL_WIDTH: u16 = 2;

/// Smallest terminal (in columns) the game is drawn on.
pub const MIN_COLUMNS: u16 = 16;

/// Smallest terminal (in rows) the game is drawn on.
pub const MIN_ROWS: u16 = 16;

/// Rows at the bottom of the terminal reserved for status text.
pub const STATUS_ROWS: u16 = 1;

pub const GLYPH_SNAKE: &str = "██";
pub const GLYPH_FRUIT: &str = "██";
pub const COLOR_SNAKE: Color = Color::Green;
pub const COLOR_FRUIT: Color = Color::Red;
pub const COLOR_STATUS: Color = Color::White;

pub const TOO_SMALL_MESSAGE: &str = "TERM TOO SMALL";

/// Board dimensions for one frame.
///
/// `width` counts grid cells (terminal columns divided by [`CELL_WIDTH`]).
/// `height` counts terminal rows, including the status row, so the playable
/// area is `width × (height - STATUS_ROWS)`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Board {
    pub width: u16,
    pub height: u16,
}

impl Board {
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Builds the board from a terminal size in character cells.
    #[must_use]
    pub fn from_terminal(columns: u16, rows: u16) -> Self {
        Self {
            width: columns / CELL_WIDTH,
            height: rows,
        }
    }

    /// Exclusive X bound of the playable area.
    #[must_use]
    pub fn x_bound(self) -> i32 {
        i32::from(self.width)
    }

    /// Exclusive Y bound of the playable area.
    #[must_use]
    pub fn y_bound(self) -> i32 {
        i32::from(self.height.saturating_sub(STATUS_ROWS))
    }

    /// Returns true when at least one cell can be played on.
    #[must_use]
    pub fn has_cells(self) -> bool {
        self.x_bound() > 0 && self.y_bound() > 0
    }

    /// Returns true when the terminal is below the drawable minimum.
    #[must_use]
    pub fn is_too_small(self) -> bool {
        self.width < MIN_COLUMNS / CELL_WIDTH || self.height < MIN_ROWS
    }
}

/// Positive tick divisor: the snake moves once every `speed` ticks.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Speed(NonZeroU64);

impl Speed {
    /// Validates a raw speed value.
    pub fn new(value: i64) -> Result<Self, ConfigError> {
        u64::try_from(value)
            .ok()
            .and_then(NonZeroU64::new)
            .map(Self)
            .ok_or(ConfigError::SpeedBelowOne(value))
    }

    #[must_use]
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(NonZeroU64::MIN.saturating_add(DEFAULT_SPEED - 1))
    }
}

/// Parses a speed argument the way the `-s` flag accepts it.
pub fn parse_speed(raw: &str) -> Result<Speed, ConfigError> {
    let trimmed = raw.trim();
    let value = trimmed
        .parse::<i64>()
        .map_err(|_| ConfigError::InvalidNumber(raw.to_owned()))?;
    Speed::new(value)
}

/// Settings for one session, validated before the game starts.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct RuntimeConfig {
    pub speed: Speed,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    speed: Option<i64>,
}

impl RuntimeConfig {
    /// Resolves the configuration: defaults, then the config file, then `speed_override`.
    ///
    /// A missing config file is not an error. A file that exists but cannot
    /// be read or parsed is.
    pub fn resolve(path: Option<&Path>, speed_override: Option<Speed>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load_from_path(path)?,
            None => match config_path() {
                Some(path) => Self::load_from_path(&path)?,
                None => Self::default(),
            },
        };

        if let Some(speed) = speed_override {
            config.speed = speed;
        }

        Ok(config)
    }

    fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let file: ConfigFile =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let speed = match file.speed {
            Some(value) => Speed::new(value)?,
            None => Speed::default(),
        };

        Ok(Self { speed })
    }
}

/// Returns the platform-correct config file path.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    let mut base = dirs::config_dir()?;
    base.push(APP_DIR_NAME);
    base.push(CONFIG_FILE_NAME);
    Some(base)
}
