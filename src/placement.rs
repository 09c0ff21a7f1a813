//! Ship placement under the no-touch rule: ships may not share a cell or be
//! adjacent, diagonals included.

use alloc::vec::Vec;

use rand::Rng;

use crate::board::Board;
use crate::common::{CellState, PlacementError, Position};
use crate::config::{Tuning, BOARD_SIZE};
use crate::ship::{Fleet, Orientation, Ship};

/// Board and ship cells produced by a successful placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub board: Board,
    pub positions: Vec<Position>,
}

/// Cells a ship of `size` would cover from `origin`, or `None` if it would
/// run off the grid.
fn footprint(origin: Position, size: usize, orientation: Orientation) -> Option<Vec<Position>> {
    (0..size)
        .map(|i| match orientation {
            Orientation::Horizontal => Position::new(origin.row(), origin.col() + i),
            Orientation::Vertical => Position::new(origin.row() + i, origin.col()),
        })
        .collect()
}

/// Check a placement, reporting the first rule it breaks.
pub fn check_placement(
    board: &Board,
    origin: Position,
    size: usize,
    orientation: Orientation,
) -> Result<(), PlacementError> {
    let cells = footprint(origin, size, orientation).ok_or(PlacementError::OutOfBounds)?;
    let occupied = board.occupied();
    if cells.iter().any(|&cell| occupied.contains(cell)) {
        return Err(PlacementError::Occupied);
    }
    if cells
        .iter()
        .any(|&cell| cell.surrounding().any(|n| occupied.contains(n)))
    {
        return Err(PlacementError::TouchesShip);
    }
    Ok(())
}

/// `true` when a ship of `size` fits at `origin` without touching anything.
pub fn can_place(board: &Board, origin: Position, size: usize, orientation: Orientation) -> bool {
    check_placement(board, origin, size, orientation).is_ok()
}

/// Place `ship` at `origin`. On error the caller's board is untouched.
pub fn place(
    board: &Board,
    ship: &Ship,
    origin: Position,
    orientation: Orientation,
) -> Result<Placement, PlacementError> {
    check_placement(board, origin, ship.size(), orientation)?;
    let positions = footprint(origin, ship.size(), orientation).ok_or(PlacementError::OutOfBounds)?;
    Ok(Placement {
        board: board.with_cells(positions.iter().copied(), CellState::Ship),
        positions,
    })
}

/// Try up to `tuning.max_placement_attempts()` random origins and
/// orientations. Best effort: a crowded board can fail even when a legal
/// spot exists.
pub fn place_random<R: Rng + ?Sized>(
    board: &Board,
    ship: &Ship,
    tuning: &Tuning,
    rng: &mut R,
) -> Result<Placement, PlacementError> {
    let attempts = tuning.max_placement_attempts();
    for _ in 0..attempts {
        let row = rng.random_range(0..BOARD_SIZE as usize);
        let col = rng.random_range(0..BOARD_SIZE as usize);
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let Some(origin) = Position::new(row, col) else {
            continue;
        };
        if let Ok(placement) = place(board, ship, origin, orientation) {
            return Ok(placement);
        }
    }
    log::warn!("Failed to place {} after {} attempts", ship.name(), attempts);
    Err(PlacementError::AttemptsExhausted {
        ship: ship.id(),
        attempts,
    })
}

/// Randomly place every unplaced ship of `fleet`, recording positions in it.
/// Stops at the first ship that cannot be placed; ships placed before that
/// stay placed and the returned error names the failing ship.
pub fn place_fleet_random<R: Rng + ?Sized>(
    board: &Board,
    fleet: &mut Fleet,
    tuning: &Tuning,
    rng: &mut R,
) -> Result<Board, (Board, PlacementError)> {
    let mut current = *board;
    for index in 0..fleet.len() {
        let Some(ship) = fleet.get_mut(index) else {
            continue;
        };
        if ship.is_placed() {
            continue;
        }
        let placement = match place_random(&current, ship, tuning, rng) {
            Ok(p) => p,
            Err(e) => return Err((current, e)),
        };
        if let Err(e) = ship.mark_placed(placement.positions) {
            return Err((current, e));
        }
        current = placement.board;
    }
    Ok(current)
}
