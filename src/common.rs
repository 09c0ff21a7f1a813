//! Common types: grid positions, directions, cell states and error enums.

use core::fmt;

use crate::config::BOARD_SIZE;

const N: usize = BOARD_SIZE as usize;

/// A cell on the 10×10 grid. Always in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "(usize, usize)", into = "(usize, usize)"))]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Returns `None` when `row` or `col` falls outside the grid.
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < N && col < N {
            Some(Position {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub const fn row(&self) -> usize {
        self.row as usize
    }

    pub const fn col(&self) -> usize {
        self.col as usize
    }

    /// The neighbouring cell one step in `dir`, if it is on the grid.
    pub fn step(self, dir: Direction) -> Option<Self> {
        let (dr, dc) = dir.offset();
        let row = self.row as isize + dr;
        let col = self.col as isize + dc;
        if row < 0 || col < 0 {
            return None;
        }
        Position::new(row as usize, col as usize)
    }

    /// In-bounds cells of the 3×3 block centred here, excluding the centre.
    pub fn surrounding(self) -> impl Iterator<Item = Position> {
        (-1isize..=1)
            .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
            .filter(|&offset| offset != (0, 0))
            .filter_map(move |(dr, dc)| {
                let row = self.row as isize + dr;
                let col = self.col as isize + dc;
                if row < 0 || col < 0 {
                    None
                } else {
                    Position::new(row as usize, col as usize)
                }
            })
    }

    /// `true` for the colour class where `row + col` is even.
    pub fn is_even_parity(&self) -> bool {
        (self.row + self.col) % 2 == 0
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = BoardError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Position::new(row, col).ok_or(BoardError::OutOfBounds { row, col })
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> Self {
        (pos.row(), pos.col())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Orthogonal step on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// `(row, col)` delta.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Direction of travel from `from` towards `to` when both share a row or
    /// a column. `None` for identical or non-aligned positions.
    pub fn between(from: Position, to: Position) -> Option<Self> {
        if from == to {
            None
        } else if from.row() == to.row() {
            Some(if from.col() < to.col() {
                Direction::Right
            } else {
                Direction::Left
            })
        } else if from.col() == to.col() {
            Some(if from.row() < to.row() {
                Direction::Down
            } else {
                Direction::Up
            })
        } else {
            None
        }
    }
}

/// State of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Ship,
    Hit,
    Miss,
    Sunk,
}

impl CellState {
    /// Cells that have already been fired at.
    pub fn is_tried(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss | CellState::Sunk)
    }
}

/// Errors raised for malformed board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column outside the grid.
    OutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Position ({}, {}) is outside the board", row, col)
            }
        }
    }
}

/// Reasons a ship cannot be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Ship would run past the last row or column.
    OutOfBounds,
    /// A target cell is not empty.
    Occupied,
    /// A target cell touches another ship, diagonals included.
    TouchesShip,
    /// Random placement gave up.
    AttemptsExhausted { ship: &'static str, attempts: u32 },
    /// Positions are the wrong count, or not one straight unbroken line.
    InvalidShape,
    /// The ship already has positions.
    AlreadyPlaced,
    /// No ship with the given id or index.
    UnknownShip,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            PlacementError::Occupied => write!(f, "Ship placement overlaps another ship"),
            PlacementError::TouchesShip => write!(f, "Ship placement touches another ship"),
            PlacementError::AttemptsExhausted { ship, attempts } => {
                write!(f, "Failed to place {} after {} attempts", ship, attempts)
            }
            PlacementError::InvalidShape => {
                write!(f, "Ship cells must form one straight line of its length")
            }
            PlacementError::AlreadyPlaced => write!(f, "Ship is already placed on the board"),
            PlacementError::UnknownShip => write!(f, "No such ship in the fleet"),
        }
    }
}

/// Failures of the computer opponent. Both indicate a broken caller invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiError {
    /// Every cell has been fired at; the win check should have ended the game.
    NoCellsRemaining,
    /// The selected target had already been fired at.
    RepeatedTarget(Position),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::NoCellsRemaining => write!(f, "No unattacked cells remain"),
            AiError::RepeatedTarget(pos) => write!(f, "Target {} was already attacked", pos),
        }
    }
}

/// Invalid runtime tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Checkerboard probability is not a number in `[0, 1]`.
    InvalidProbability,
    /// Random placement needs at least one attempt.
    ZeroPlacementAttempts,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidProbability => {
                write!(f, "Checkerboard probability must be between 0 and 1")
            }
            ConfigError::ZeroPlacementAttempts => {
                write!(f, "At least one placement attempt is required")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for AiError {}
#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
