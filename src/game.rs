use core::fmt;

use rand::Rng;

use crate::{
    ai::{AiMode, ComputerAi},
    attack::{attack, resolve_sunk, win, Shot, SunkShip},
    board::{initialize, Board},
    common::{AiError, PlacementError, Position},
    config::Tuning,
    placement::{place, place_fleet_random},
    ship::{Fleet, Orientation},
};

/// How many fresh layouts are tried for the computer's fleet before giving up.
const FLEET_LAYOUT_RETRIES: usize = 10;

/// Phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    Setup,
    Playing,
    GameOver,
}

/// Side that won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Winner {
    Player,
    Computer,
}

/// Errors returned by `Game` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Operation not allowed in the current phase.
    WrongPhase(GamePhase),
    /// It is the other side's turn.
    NotYourTurn,
    /// The player already fired at this cell; the turn is not consumed.
    AlreadyFired(Position),
    Placement(PlacementError),
    Ai(AiError),
}

impl From<PlacementError> for GameError {
    fn from(err: PlacementError) -> Self {
        GameError::Placement(err)
    }
}

impl From<AiError> for GameError {
    fn from(err: AiError) -> Self {
        GameError::Ai(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::WrongPhase(phase) => write!(f, "Not allowed during {:?}", phase),
            GameError::NotYourTurn => write!(f, "It is not your turn"),
            GameError::AlreadyFired(pos) => write!(f, "Already fired at {}", pos),
            GameError::Placement(e) => write!(f, "Placement error: {}", e),
            GameError::Ai(e) => write!(f, "Computer error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

/// Summary of one shot for the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub target: Position,
    pub hit: bool,
    pub sunk: Option<SunkShip>,
    /// Only set for computer shots.
    pub mode: Option<AiMode>,
    pub game_over: bool,
}

/// One human-vs-computer game: both boards and fleets, the computer's
/// targeting memory, and turn bookkeeping.
pub struct Game {
    phase: GamePhase,
    player_board: Board,
    player_fleet: Fleet,
    computer_board: Board,
    computer_fleet: Fleet,
    ai: ComputerAi,
    tuning: Tuning,
    player_turn: bool,
    winner: Option<Winner>,
}

impl Game {
    /// New game in the setup phase with the computer's fleet already placed.
    pub fn new<R: Rng + ?Sized>(tuning: Tuning, rng: &mut R) -> Result<Self, GameError> {
        let (player_board, player_fleet) = initialize();
        let (computer_board, computer_fleet) = random_layout(&tuning, rng)?;
        let mut ai = ComputerAi::new(tuning);
        ai.reset();
        Ok(Self {
            phase: GamePhase::Setup,
            player_board,
            player_fleet,
            computer_board,
            computer_fleet,
            ai,
            tuning,
            player_turn: true,
            winner: None,
        })
    }

    /// Throw the current game away and start over. Resets the computer's
    /// targeting memory.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let (computer_board, computer_fleet) = random_layout(&self.tuning, rng)?;
        let (player_board, player_fleet) = initialize();
        self.player_board = player_board;
        self.player_fleet = player_fleet;
        self.computer_board = computer_board;
        self.computer_fleet = computer_fleet;
        self.ai.reset();
        self.phase = GamePhase::Setup;
        self.player_turn = true;
        self.winner = None;
        log::info!("New game started");
        Ok(())
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    pub fn is_player_turn(&self) -> bool {
        self.player_turn
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn player_fleet(&self) -> &Fleet {
        &self.player_fleet
    }

    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    pub fn computer_fleet(&self) -> &Fleet {
        &self.computer_fleet
    }

    pub fn ai(&self) -> &ComputerAi {
        &self.ai
    }

    /// Place the player's ship at `index` by hand.
    pub fn place_player_ship(
        &mut self,
        index: usize,
        origin: Position,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        self.require_phase(GamePhase::Setup)?;
        let ship = self
            .player_fleet
            .get(index)
            .ok_or(PlacementError::UnknownShip)?;
        if ship.is_placed() {
            return Err(PlacementError::AlreadyPlaced.into());
        }
        let placement = place(&self.player_board, ship, origin, orientation)?;
        if let Some(ship) = self.player_fleet.get_mut(index) {
            ship.mark_placed(placement.positions)?;
        }
        self.player_board = placement.board;
        self.start_if_ready();
        Ok(())
    }

    /// Randomly place every player ship not yet placed.
    pub fn place_player_fleet_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.require_phase(GamePhase::Setup)?;
        let result = place_fleet_random(&self.player_board, &mut self.player_fleet, &self.tuning, rng);
        match result {
            Ok(board) => {
                self.player_board = board;
                self.start_if_ready();
                Ok(())
            }
            Err((board, e)) => {
                self.player_board = board;
                Err(e.into())
            }
        }
    }

    /// Player fires at the computer's board.
    pub fn player_fire(&mut self, target: Position) -> Result<TurnReport, GameError> {
        self.require_phase(GamePhase::Playing)?;
        if !self.player_turn {
            return Err(GameError::NotYourTurn);
        }
        let outcome = attack(&self.computer_board, target);
        let hit = match outcome.shot {
            Shot::AlreadyTried => return Err(GameError::AlreadyFired(target)),
            Shot::Hit => true,
            Shot::Miss => false,
        };
        self.computer_board = outcome.board;

        let mut sunk = None;
        if hit {
            let resolved = resolve_sunk(&self.computer_board, &self.computer_fleet, target);
            self.computer_board = resolved.board;
            if let Some(ship) = resolved.sunk {
                self.computer_fleet.mark_sunk(ship.id);
                log::info!("Player sank the computer's {}", ship.name);
                sunk = Some(ship);
            }
        }

        let game_over = self.finish_if_won(Winner::Player);
        self.player_turn = false;
        Ok(TurnReport {
            target,
            hit,
            sunk,
            mode: None,
            game_over,
        })
    }

    /// Let the computer take its shot at the player's board.
    pub fn computer_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<TurnReport, GameError> {
        self.require_phase(GamePhase::Playing)?;
        if self.player_turn {
            return Err(GameError::NotYourTurn);
        }
        let mv = self
            .ai
            .computer_move(&self.player_board, &self.player_fleet, rng)?;
        self.player_board = mv.board;
        if let Some(ship) = mv.sunk {
            self.player_fleet.mark_sunk(ship.id);
            log::info!("Computer sank the player's {}", ship.name);
        }

        let game_over = self.finish_if_won(Winner::Computer);
        self.player_turn = true;
        Ok(TurnReport {
            target: mv.target,
            hit: mv.hit,
            sunk: mv.sunk,
            mode: Some(mv.mode),
            game_over,
        })
    }

    fn require_phase(&self, phase: GamePhase) -> Result<(), GameError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(GameError::WrongPhase(self.phase))
        }
    }

    fn start_if_ready(&mut self) {
        if self.player_fleet.all_placed() {
            self.phase = GamePhase::Playing;
            self.player_turn = true;
            log::info!("All ships placed, game started");
        }
    }

    fn finish_if_won(&mut self, shooter: Winner) -> bool {
        let defeated = match shooter {
            Winner::Player => &self.computer_fleet,
            Winner::Computer => &self.player_fleet,
        };
        if win(defeated) {
            self.phase = GamePhase::GameOver;
            self.winner = Some(shooter);
            log::info!("Game over, {:?} wins", shooter);
            true
        } else {
            false
        }
    }
}

/// Random layout for a full fleet. A single layout may fail on an unlucky
/// board, so a handful of fresh boards are tried.
pub fn random_layout<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> Result<(Board, Fleet), PlacementError> {
    let mut last_err = PlacementError::UnknownShip;
    for attempt in 1..=FLEET_LAYOUT_RETRIES {
        let (board, mut fleet) = initialize();
        match place_fleet_random(&board, &mut fleet, tuning, rng) {
            Ok(board) => return Ok((board, fleet)),
            Err((_, e)) => {
                log::debug!("Fleet layout attempt {} failed: {}", attempt, e);
                last_err = e;
            }
        }
    }
    Err(last_err)
}
