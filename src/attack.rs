//! Attack resolution: hit/miss marking, sink detection and the win check.

use crate::board::Board;
use crate::common::{CellState, Position};
use crate::ship::Fleet;

/// Result of firing at one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Shot {
    Hit,
    Miss,
    /// The cell was already hit, missed or sunk. Nothing changed and the
    /// turn must not be consumed.
    AlreadyTried,
}

/// Shot result plus the post-shot board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackOutcome {
    pub shot: Shot,
    pub board: Board,
}

impl AttackOutcome {
    pub fn hit(&self) -> bool {
        self.shot == Shot::Hit
    }

    pub fn already_hit(&self) -> bool {
        self.shot == Shot::AlreadyTried
    }
}

/// Identity of a ship that has just gone down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SunkShip {
    pub id: &'static str,
    pub name: &'static str,
}

/// Sink check result plus the board with the ship's cells marked `Sunk`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunkOutcome {
    pub sunk: Option<SunkShip>,
    pub board: Board,
}

/// Fire at `pos`.
pub fn attack(board: &Board, pos: Position) -> AttackOutcome {
    match board.cell(pos) {
        CellState::Hit | CellState::Miss | CellState::Sunk => AttackOutcome {
            shot: Shot::AlreadyTried,
            board: *board,
        },
        CellState::Ship => AttackOutcome {
            shot: Shot::Hit,
            board: board.with_cell(pos, CellState::Hit),
        },
        CellState::Empty => AttackOutcome {
            shot: Shot::Miss,
            board: board.with_cell(pos, CellState::Miss),
        },
    }
}

/// After a hit at `pos`, check whether the owning ship is now fully hit and
/// if so mark all of its cells `Sunk`. Calling it again for a sunk ship
/// reports it again and leaves the board as is.
pub fn resolve_sunk(board: &Board, fleet: &Fleet, pos: Position) -> SunkOutcome {
    let Some(ship) = fleet.ship_at(pos) else {
        return SunkOutcome {
            sunk: None,
            board: *board,
        };
    };
    let all_hit = ship
        .positions()
        .iter()
        .all(|&p| matches!(board.cell(p), CellState::Hit | CellState::Sunk));
    if !all_hit {
        return SunkOutcome {
            sunk: None,
            board: *board,
        };
    }
    SunkOutcome {
        sunk: Some(SunkShip {
            id: ship.id(),
            name: ship.name(),
        }),
        board: board.with_cells(ship.positions().iter().copied(), CellState::Sunk),
    }
}

/// `true` when every ship in the fleet is sunk.
pub fn win(fleet: &Fleet) -> bool {
    fleet.ships().iter().all(|s| s.is_sunk())
}
