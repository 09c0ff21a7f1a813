use broadside::{
    AiMode, CellState, Game, GameError, GamePhase, Orientation, PlacementError, Position, Tuning,
    Winner, TOTAL_SHIP_CELLS,
};
use rand::{rngs::SmallRng, SeedableRng};

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col).unwrap()
}

fn all_cells() -> impl Iterator<Item = Position> {
    (0..10).flat_map(|r| (0..10).map(move |c| pos(r, c)))
}

#[test]
fn test_new_game_places_computer_fleet() {
    let mut rng = SmallRng::seed_from_u64(1);
    let game = Game::new(Tuning::default(), &mut rng).unwrap();
    assert_eq!(game.phase(), GamePhase::Setup);
    assert!(game.is_player_turn());
    assert!(game.winner().is_none());
    assert!(game.computer_fleet().all_placed());
    assert_eq!(game.computer_board().ship_cells().count(), TOTAL_SHIP_CELLS);
    assert!(game.player_board().occupied().is_empty());
    assert_eq!(game.ai().state().mode(), AiMode::Hunt);
}

#[test]
fn test_manual_placement_starts_game() {
    let mut rng = SmallRng::seed_from_u64(2);
    let mut game = Game::new(Tuning::default(), &mut rng).unwrap();
    assert_eq!(
        game.player_fire(pos(0, 0)),
        Err(GameError::WrongPhase(GamePhase::Setup))
    );

    for (index, row) in [0, 2, 4, 6].into_iter().enumerate() {
        game.place_player_ship(index, pos(row, 0), Orientation::Horizontal)
            .unwrap();
        assert_eq!(game.phase(), GamePhase::Setup);
    }
    assert_eq!(
        game.place_player_ship(0, pos(9, 5), Orientation::Horizontal),
        Err(GameError::Placement(PlacementError::AlreadyPlaced))
    );
    assert_eq!(
        game.place_player_ship(4, pos(7, 0), Orientation::Horizontal),
        Err(GameError::Placement(PlacementError::TouchesShip))
    );
    assert_eq!(
        game.place_player_ship(9, pos(8, 0), Orientation::Horizontal),
        Err(GameError::Placement(PlacementError::UnknownShip))
    );
    game.place_player_ship(4, pos(8, 0), Orientation::Horizontal)
        .unwrap();
    assert_eq!(game.phase(), GamePhase::Playing);
    assert_eq!(game.player_board().cell(pos(8, 1)), CellState::Ship);
}

#[test]
fn test_turns_alternate_and_repeat_fire_is_free() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut game = Game::new(Tuning::default(), &mut rng).unwrap();
    game.place_player_fleet_randomly(&mut rng).unwrap();
    assert_eq!(game.phase(), GamePhase::Playing);

    assert!(matches!(game.computer_turn(&mut rng), Err(GameError::NotYourTurn)));
    game.player_fire(pos(4, 4)).unwrap();
    assert!(!game.is_player_turn());
    assert_eq!(game.player_fire(pos(4, 5)), Err(GameError::NotYourTurn));

    let report = game.computer_turn(&mut rng).unwrap();
    assert_eq!(report.mode, Some(AiMode::Hunt));
    assert!(game.is_player_turn());
    assert!(game.player_board().cell(report.target) != CellState::Empty);

    let before = *game.computer_board();
    assert_eq!(game.player_fire(pos(4, 4)), Err(GameError::AlreadyFired(pos(4, 4))));
    assert!(game.is_player_turn());
    assert_eq!(*game.computer_board(), before);
}

#[test]
fn test_full_game_reaches_game_over() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut game = Game::new(Tuning::default(), &mut rng).unwrap();
    game.place_player_fleet_randomly(&mut rng).unwrap();

    let mut targets = all_cells();
    let mut turns = 0;
    while game.phase() == GamePhase::Playing {
        turns += 1;
        assert!(turns <= 100, "game took too many turns");
        let target = targets.next().unwrap();
        let report = game.player_fire(target).unwrap();
        if report.game_over {
            break;
        }
        let report = game.computer_turn(&mut rng).unwrap();
        if report.game_over {
            break;
        }
    }
    assert_eq!(game.phase(), GamePhase::GameOver);
    match game.winner() {
        Some(Winner::Player) => assert!(game.computer_fleet().ships().iter().all(|s| s.is_sunk())),
        Some(Winner::Computer) => assert!(game.player_fleet().ships().iter().all(|s| s.is_sunk())),
        None => panic!("game over without a winner"),
    }
    assert_eq!(
        game.player_fire(pos(9, 9)),
        Err(GameError::WrongPhase(GamePhase::GameOver))
    );
}

#[test]
fn test_restart_resets_everything() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut game = Game::new(Tuning::default(), &mut rng).unwrap();
    game.place_player_fleet_randomly(&mut rng).unwrap();
    for target in all_cells().take(10) {
        game.player_fire(target).unwrap();
        game.computer_turn(&mut rng).unwrap();
    }
    game.restart(&mut rng).unwrap();
    assert_eq!(game.phase(), GamePhase::Setup);
    assert!(game.is_player_turn());
    assert!(game.player_board().occupied().is_empty());
    assert!(!game.player_fleet().all_placed());
    assert_eq!(game.computer_board().untried().count(), 100);
    assert_eq!(game.ai().state().mode(), AiMode::Hunt);
    assert!(game.ai().state().hits_in_progress().is_empty());
}

fn play_to_end(game: &mut Game, rng: &mut SmallRng) {
    game.place_player_fleet_randomly(rng).unwrap();
    let mut targets = all_cells();
    while game.phase() == GamePhase::Playing {
        if game.is_player_turn() {
            game.player_fire(targets.next().unwrap()).unwrap();
        } else {
            game.computer_turn(rng).unwrap();
        }
    }
}

#[test]
fn test_play_again_after_game_over() {
    let mut rng = SmallRng::seed_from_u64(21);
    let mut game = Game::new(Tuning::default(), &mut rng).unwrap();
    play_to_end(&mut game, &mut rng);
    assert_eq!(game.phase(), GamePhase::GameOver);
    assert!(game.winner().is_some());

    game.restart(&mut rng).unwrap();
    assert_eq!(game.phase(), GamePhase::Setup);
    assert_eq!(game.winner(), None);
    assert!(game.computer_fleet().ships().iter().all(|s| s.is_placed() && !s.is_sunk()));
    assert_eq!(game.ai().state().mode(), AiMode::Hunt);

    play_to_end(&mut game, &mut rng);
    assert_eq!(game.phase(), GamePhase::GameOver);
    assert!(game.winner().is_some());
}
