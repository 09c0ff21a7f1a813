//! Board model: a 10×10 grid of cell states stored as four cell masks.

use core::fmt;

use crate::common::{CellState, Position};
use crate::config::BOARD_SIZE;
use crate::mask::CellMask;
use crate::ship::Fleet;

/// Grid of cell states. `Board` is `Copy`; every mutating operation returns
/// a new board and leaves the receiver untouched.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    ships: CellMask,
    hits: CellMask,
    misses: CellMask,
    sunk: CellMask,
}

impl Board {
    /// All cells empty.
    pub fn new() -> Self {
        Board::default()
    }

    /// State of the cell at `pos`.
    pub fn cell(&self, pos: Position) -> CellState {
        if self.sunk.contains(pos) {
            CellState::Sunk
        } else if self.hits.contains(pos) {
            CellState::Hit
        } else if self.misses.contains(pos) {
            CellState::Miss
        } else if self.ships.contains(pos) {
            CellState::Ship
        } else {
            CellState::Empty
        }
    }

    /// Copy of this board with `pos` set to `state`.
    #[must_use]
    pub fn with_cell(&self, pos: Position, state: CellState) -> Board {
        let mut next = Board {
            ships: self.ships,
            hits: self.hits.without(pos),
            misses: self.misses.without(pos),
            sunk: self.sunk.without(pos),
        };
        match state {
            CellState::Empty => next.ships = next.ships.without(pos),
            CellState::Ship => next.ships = next.ships.with(pos),
            CellState::Hit => next.hits = next.hits.with(pos),
            CellState::Miss => next.misses = next.misses.with(pos),
            CellState::Sunk => next.sunk = next.sunk.with(pos),
        }
        next
    }

    /// Copy of this board with every cell in `cells` set to `state`.
    #[must_use]
    pub fn with_cells<I>(&self, cells: I, state: CellState) -> Board
    where
        I: IntoIterator<Item = Position>,
    {
        cells
            .into_iter()
            .fold(*self, |board, pos| board.with_cell(pos, state))
    }

    /// Cells not yet hit, missed or sunk.
    pub fn untried(&self) -> CellMask {
        !(self.hits | self.misses | self.sunk)
    }

    pub fn is_untried(&self, pos: Position) -> bool {
        !self.cell(pos).is_tried()
    }

    /// Cells holding a ship segment, whatever their fire state.
    pub fn ship_cells(&self) -> CellMask {
        self.ships
    }

    /// Cells that are not `Empty`.
    pub fn occupied(&self) -> CellMask {
        self.ships | self.hits | self.misses | self.sunk
    }

    /// Iterate the grid row by row.
    pub fn rows(&self) -> impl Iterator<Item = [CellState; BOARD_SIZE as usize]> + '_ {
        (0..BOARD_SIZE as usize).map(move |row| {
            core::array::from_fn(|col| {
                Position::new(row, col).map_or(CellState::Empty, |pos| self.cell(pos))
            })
        })
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in self.rows() {
            write!(f, "  ")?;
            for cell in row {
                let ch = match cell {
                    CellState::Empty => '.',
                    CellState::Ship => 'S',
                    CellState::Hit => 'X',
                    CellState::Miss => 'o',
                    CellState::Sunk => '#',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

/// Fresh empty board and unplaced standard fleet for one side.
pub fn initialize() -> (Board, Fleet) {
    (Board::new(), Fleet::new())
}
