use broadside::{
    ship_type_by_id, ConfigError, Tuning, DEFAULT_CHECKERBOARD_PROBABILITY,
    DEFAULT_PLACEMENT_ATTEMPTS, NUM_SHIPS, SHIPS, TOTAL_SHIP_CELLS,
};

#[test]
fn test_default_tuning() {
    let tuning = Tuning::default();
    assert_eq!(tuning.checkerboard_probability(), DEFAULT_CHECKERBOARD_PROBABILITY);
    assert_eq!(tuning.max_placement_attempts(), DEFAULT_PLACEMENT_ATTEMPTS);
}

#[test]
fn test_tuning_validation() {
    assert!(Tuning::new(0.0, 1).is_ok());
    assert!(Tuning::new(1.0, 500).is_ok());
    assert_eq!(Tuning::new(1.5, 10), Err(ConfigError::InvalidProbability));
    assert_eq!(Tuning::new(-0.1, 10), Err(ConfigError::InvalidProbability));
    assert_eq!(Tuning::new(f64::NAN, 10), Err(ConfigError::InvalidProbability));
    assert_eq!(Tuning::new(0.5, 0), Err(ConfigError::ZeroPlacementAttempts));
}

#[test]
fn test_fleet_definition() {
    assert_eq!(SHIPS.len(), NUM_SHIPS);
    assert_eq!(SHIPS.iter().map(|s| s.length()).sum::<usize>(), TOTAL_SHIP_CELLS);
    assert_eq!(ship_type_by_id("submarine").map(|s| s.length()), Some(3));
    assert!(ship_type_by_id("dinghy").is_none());
}
