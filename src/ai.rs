//! Hunt/target targeting for the computer opponent.
//!
//! In hunt mode the computer samples untried cells, usually restricted to one
//! checkerboard colour (the smallest ship spans two cells, so no ship fits
//! entirely on the other colour). After a hit it switches to target mode and
//! tries the cells around the hit, infers the ship's line from the second hit and
//! walks along it in both directions until the ship sinks.
//!
//! All memory between moves lives in a [`TargetingState`] owned by the
//! caller, one per game.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::attack::{attack, resolve_sunk, SunkShip};
use crate::board::Board;
use crate::common::{AiError, Direction, Position};
use crate::config::Tuning;
use crate::mask::CellMask;
use crate::ship::Fleet;

/// Search phase the computer is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum AiMode {
    /// No partially hit ship is being pursued.
    Hunt,
    /// Pursuing the ship behind the current run of hits.
    Target,
}

/// Memory carried between computer moves within one game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetingState {
    last_hit: Option<Position>,
    hits_in_progress: Vec<Position>,
    committed_direction: Option<Direction>,
    potential_targets: VecDeque<Position>,
}

impl TargetingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything. Call at the start of each game.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn mode(&self) -> AiMode {
        if self.hits_in_progress.is_empty() {
            AiMode::Hunt
        } else {
            AiMode::Target
        }
    }

    pub fn last_hit(&self) -> Option<Position> {
        self.last_hit
    }

    pub fn hits_in_progress(&self) -> &[Position] {
        &self.hits_in_progress
    }

    pub fn committed_direction(&self) -> Option<Direction> {
        self.committed_direction
    }

    pub fn potential_targets(&self) -> impl Iterator<Item = &Position> {
        self.potential_targets.iter()
    }

    /// Drop the current run; the next shot is a hunt shot.
    fn abandon_run(&mut self) {
        log::debug!(
            "Abandoning run of {} hit(s), back to hunting",
            self.hits_in_progress.len()
        );
        self.reset();
    }

    /// Pick the next target-mode cell, or `None` when the run is exhausted.
    fn next_target<R: Rng + ?Sized>(&mut self, board: &Board, rng: &mut R) -> Option<Position> {
        while let Some(queued) = self.potential_targets.pop_front() {
            if board.is_untried(queued) {
                return Some(queued);
            }
        }

        let last = self.last_hit?;

        if let Some(dir) = self.committed_direction {
            if let Some(next) = self.frontier(board, dir) {
                return Some(next);
            }
            let back = dir.opposite();
            let next = self.frontier(board, back)?;
            self.committed_direction = Some(back);
            return Some(next);
        }

        let options: Vec<(Direction, Position)> = Direction::ALL
            .iter()
            .filter_map(|&dir| untried_step(board, last, dir).map(|pos| (dir, pos)))
            .collect();
        let &(dir, pos) = options.choose(rng)?;
        self.committed_direction = Some(dir);
        Some(pos)
    }

    /// The untried cell just past the end of the run in `dir`.
    fn frontier(&self, board: &Board, dir: Direction) -> Option<Position> {
        let mut end = self.last_hit?;
        while let Some(next) = end
            .step(dir)
            .filter(|pos| self.hits_in_progress.contains(pos))
        {
            end = next;
        }
        untried_step(board, end, dir)
    }

    /// Second hit of a run: fix the line and queue both of its open ends.
    fn confirm_line(&mut self, board: &Board) {
        let (Some(&first), Some(&last)) = (self.hits_in_progress.first(), self.hits_in_progress.last())
        else {
            return;
        };
        let Some(dir) = Direction::between(first, last) else {
            return;
        };
        log::debug!("Line established from {} heading {:?}", first, dir);
        self.committed_direction = Some(dir);
        if let Some(ahead) = untried_step(board, last, dir) {
            self.potential_targets.push_back(ahead);
        }
        if let Some(behind) = untried_step(board, first, dir.opposite()) {
            self.potential_targets.push_back(behind);
        }
    }

    /// A miss ends progress in the committed direction; turn around at the
    /// far end of the run.
    fn turn_around(&mut self, board: &Board) {
        let Some(dir) = self.committed_direction else {
            return;
        };
        let back = dir.opposite();
        match self.frontier(board, back) {
            Some(cell) => {
                self.potential_targets.clear();
                self.potential_targets.push_back(cell);
                self.committed_direction = Some(back);
            }
            None if self.hits_in_progress.len() == 1 => {
                // Only a guessed direction; fall back to the neighbourhood.
                self.committed_direction = None;
            }
            None => {}
        }
    }
}

/// The cell one step from `from` in `dir`, if it exists and is untried.
fn untried_step(board: &Board, from: Position, dir: Direction) -> Option<Position> {
    from.step(dir).filter(|&pos| board.is_untried(pos))
}

/// Uniform pick among untried cells, checkerboard-restricted with the
/// configured probability.
fn hunt<R: Rng + ?Sized>(board: &Board, tuning: &Tuning, rng: &mut R) -> Result<Position, AiError> {
    let open = board.untried();
    if open.is_empty() {
        log::error!("Hunt found no unattacked cells; the game should already be over");
        return Err(AiError::NoCellsRemaining);
    }
    if rng.random_bool(tuning.checkerboard_probability()) {
        let even: Vec<Position> = (open & CellMask::EVEN_PARITY).iter().collect();
        if let Some(&pos) = even.choose(rng) {
            return Ok(pos);
        }
    }
    let all: Vec<Position> = open.iter().collect();
    all.choose(rng).copied().ok_or(AiError::NoCellsRemaining)
}

/// What the computer did this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerMove {
    pub target: Position,
    /// Mode the shot was chosen in.
    pub mode: AiMode,
    pub hit: bool,
    pub sunk: Option<SunkShip>,
    /// Opponent board after the shot (and sink marking).
    pub board: Board,
}

/// Choose a cell on `board`, fire at it and update `state`.
///
/// `fleet` is only read; marking the sunk ship in the fleet is left to the
/// caller, as is checking for a win before asking for the next move.
pub fn computer_move<R: Rng + ?Sized>(
    state: &mut TargetingState,
    board: &Board,
    fleet: &Fleet,
    tuning: &Tuning,
    rng: &mut R,
) -> Result<ComputerMove, AiError> {
    let (target, mode) = match state.mode() {
        AiMode::Target => match state.next_target(board, rng) {
            Some(pos) => (pos, AiMode::Target),
            None => {
                state.abandon_run();
                (hunt(board, tuning, rng)?, AiMode::Hunt)
            }
        },
        AiMode::Hunt => (hunt(board, tuning, rng)?, AiMode::Hunt),
    };

    let outcome = attack(board, target);
    if outcome.already_hit() {
        return Err(AiError::RepeatedTarget(target));
    }

    if !outcome.hit() {
        state.turn_around(&outcome.board);
        return Ok(ComputerMove {
            target,
            mode,
            hit: false,
            sunk: None,
            board: outcome.board,
        });
    }

    if mode == AiMode::Hunt {
        log::debug!("Hunt hit at {}, switching to target mode", target);
    }
    state.last_hit = Some(target);
    state.hits_in_progress.push(target);

    let sunk = resolve_sunk(&outcome.board, fleet, target);
    if let Some(ship) = sunk.sunk {
        log::debug!("Sank {} at {}, back to hunting", ship.name, target);
        state.reset();
    } else if state.hits_in_progress.len() == 2 {
        state.confirm_line(&sunk.board);
    }

    Ok(ComputerMove {
        target,
        mode,
        hit: true,
        sunk: sunk.sunk,
        board: sunk.board,
    })
}

/// Computer opponent: one targeting memory plus its tuning.
#[derive(Debug, Clone, Default)]
pub struct ComputerAi {
    state: TargetingState,
    tuning: Tuning,
}

impl ComputerAi {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            state: TargetingState::new(),
            tuning,
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn state(&self) -> &TargetingState {
        &self.state
    }

    pub fn computer_move<R: Rng + ?Sized>(
        &mut self,
        board: &Board,
        fleet: &Fleet,
        rng: &mut R,
    ) -> Result<ComputerMove, AiError> {
        computer_move(&mut self.state, board, fleet, &self.tuning, rng)
    }

    /// Clear all targeting memory. Must run once before each new game.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}
