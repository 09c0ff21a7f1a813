//! Ship kinds, individual ships and the five-ship fleet.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{Direction, PlacementError, Position};
use crate::config::SHIPS;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Kind of ship: identifier, display name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    id: &'static str,
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(id: &'static str, name: &'static str, length: usize) -> Self {
        Self { id, name, length }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship in a fleet, with its placement and sunk flag.
///
/// Positions are empty until the ship is placed, after which they hold
/// exactly `size` contiguous, colinear cells.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Ship {
    id: &'static str,
    name: &'static str,
    size: usize,
    placed: bool,
    sunk: bool,
    positions: Vec<Position>,
}

impl Ship {
    /// An unplaced ship of the given kind.
    pub fn new(kind: ShipType) -> Self {
        Ship {
            id: kind.id(),
            name: kind.name(),
            size: kind.length(),
            placed: false,
            sunk: false,
            positions: Vec::new(),
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_placed(&self) -> bool {
        self.placed
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Whether this ship occupies `pos`.
    pub fn occupies(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    /// Record the cells returned by a successful placement. They must be
    /// `size` cells, each one step further along a single direction.
    pub fn mark_placed(&mut self, positions: Vec<Position>) -> Result<(), PlacementError> {
        if self.placed {
            return Err(PlacementError::AlreadyPlaced);
        }
        if positions.len() != self.size || !is_straight_run(&positions) {
            return Err(PlacementError::InvalidShape);
        }
        self.positions = positions;
        self.placed = true;
        Ok(())
    }

    /// Flag the ship as sunk. Sinking is permanent.
    pub fn mark_sunk(&mut self) {
        self.sunk = true;
    }
}

fn is_straight_run(positions: &[Position]) -> bool {
    let mut line = None;
    positions.windows(2).all(|pair| {
        let Some(dir) = Direction::between(pair[0], pair[1]) else {
            return false;
        };
        pair[0].step(dir) == Some(pair[1]) && *line.get_or_insert(dir) == dir
    })
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ id: \"{}\", size: {}, placed: {}, sunk: {}, positions: {:?} }}",
            self.id, self.size, self.placed, self.sunk, self.positions
        )
    }
}

/// The five ships one side plays with.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// The standard fleet, nothing placed.
    pub fn new() -> Self {
        Fleet {
            ships: SHIPS.iter().copied().map(Ship::new).collect(),
        }
    }

    /// Fleet made of arbitrary ships, mostly useful for scenarios.
    pub fn from_ships(ships: Vec<Ship>) -> Self {
        Fleet { ships }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Ship> {
        self.ships.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Ship> {
        self.ships.get_mut(index)
    }

    /// Ship covering `pos`, by linear scan.
    pub fn ship_at(&self, pos: Position) -> Option<&Ship> {
        self.ships.iter().find(|s| s.occupies(pos))
    }

    pub fn all_placed(&self) -> bool {
        self.ships.iter().all(Ship::is_placed)
    }

    /// Set the sunk flag of the ship with `id`. Returns `false` for unknown ids.
    pub fn mark_sunk(&mut self, id: &str) -> bool {
        match self.ships.iter_mut().find(|s| s.id == id) {
            Some(ship) => {
                ship.mark_sunk();
                true
            }
            None => false,
        }
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Fleet::new()
    }
}
