use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Axis a direction moves along.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Axis {
    X,
    Y,
}

/// Canonical movement directions on the board. North is toward row 0.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Returns the axis and unit step (+1 or -1) for this direction.
    #[must_use]
    pub fn step(self) -> (Axis, i32) {
        match self {
            Self::North => (Axis::Y, -1),
            Self::East => (Axis::X, 1),
            Self::South => (Axis::Y, 1),
            Self::West => (Axis::X, -1),
        }
    }

    #[must_use]
    pub fn axis(self) -> Axis {
        self.step().0
    }

    /// Returns the direction after a turn request.
    ///
    /// Requests on the current axis are ignored, so a 180° reversal (or a
    /// repeat of the current direction) keeps `self`.
    #[must_use]
    pub fn turned(self, requested: Self) -> Self {
        if direction_change_is_valid(self, requested) {
            requested
        } else {
            self
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Quit,
}

/// Returns whether a direction change is legal: only perpendicular turns are.
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    current.axis() != next.axis()
}

/// Maps a terminal key event to a game input.
///
/// Returns `None` for keys the game does not recognize and for key releases.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    let input = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => GameInput::Direction(Direction::North),
        KeyCode::Right | KeyCode::Char('d' | 'D') => GameInput::Direction(Direction::East),
        KeyCode::Down | KeyCode::Char('s' | 'S') => GameInput::Direction(Direction::South),
        KeyCode::Left | KeyCode::Char('a' | 'A') => GameInput::Direction(Direction::West),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => GameInput::Quit,
        _ => return None,
    };

    Some(input)
}
