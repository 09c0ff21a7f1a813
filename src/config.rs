use crate::common::ConfigError;
use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("carrier", "Carrier", 5),
    ShipType::new("battleship", "Battleship", 4),
    ShipType::new("cruiser", "Cruiser", 3),
    ShipType::new("submarine", "Submarine", 3),
    ShipType::new("destroyer", "Destroyer", 2),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Chance that a hunt move is restricted to even-parity cells.
pub const DEFAULT_CHECKERBOARD_PROBABILITY: f64 = 0.7;

/// Number of random draws `place_random` makes before giving up.
pub const DEFAULT_PLACEMENT_ATTEMPTS: u32 = 100;

/// Runtime knobs for random placement and the computer's hunt phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    checkerboard_probability: f64,
    max_placement_attempts: u32,
}

impl Tuning {
    /// Build a validated tuning. The probability must lie in `[0, 1]` and at
    /// least one placement attempt is required.
    pub fn new(checkerboard_probability: f64, max_placement_attempts: u32) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&checkerboard_probability) {
            return Err(ConfigError::InvalidProbability);
        }
        if max_placement_attempts == 0 {
            return Err(ConfigError::ZeroPlacementAttempts);
        }
        Ok(Self {
            checkerboard_probability,
            max_placement_attempts,
        })
    }

    pub fn checkerboard_probability(&self) -> f64 {
        self.checkerboard_probability
    }

    pub fn max_placement_attempts(&self) -> u32 {
        self.max_placement_attempts
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            checkerboard_probability: DEFAULT_CHECKERBOARD_PROBABILITY,
            max_placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
        }
    }
}

/// Look up a ship kind by its identifier.
pub fn ship_type_by_id(id: &str) -> Option<ShipType> {
    SHIPS.iter().copied().find(|def| def.id() == id)
}
