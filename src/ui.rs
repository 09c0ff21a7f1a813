#![cfg(feature = "std")]

//! Terminal rendering and input parsing for the `broadside` binary.

use std::fmt::Write as _;

use crate::{
    board::Board,
    common::{CellState, Position},
    config::BOARD_SIZE,
    ship::{Fleet, Orientation},
};

/// `B7`-style label for a position.
pub fn coord_to_string(pos: Position) -> String {
    let col = (b'A' + pos.col() as u8) as char;
    format!("{}{}", col, pos.row() + 1)
}

/// Parse a column letter followed by a row number, e.g. `A5` or `j10`.
pub fn parse_coord(input: &str) -> Result<Position, String> {
    let input = input.trim();
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= BOARD_SIZE as usize {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 || row > BOARD_SIZE as usize {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Position::new(row - 1, col).ok_or_else(|| format!("{} is not on the board", input))
}

/// Parse a placement line such as `A5 H` or `c3 v`. A bare coordinate uses
/// `default` for the orientation.
pub fn parse_placement(input: &str, default: Orientation) -> Result<(Position, Orientation), String> {
    let mut parts = input.split_whitespace();
    let coord = parts.next().ok_or("Missing coordinate")?;
    let pos = parse_coord(coord)?;
    let orientation = match parts.next().map(|s| s.to_ascii_uppercase()) {
        None => default,
        Some(o) if o == "H" => Orientation::Horizontal,
        Some(o) if o == "V" => Orientation::Vertical,
        Some(o) => return Err(format!("Invalid orientation '{}' - use H or V", o)),
    };
    Ok((pos, orientation))
}

/// A line typed at the ship placement prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupInput {
    Place(Position, Orientation),
    /// `R`: switch the orientation used for bare coordinates.
    Rotate(Orientation),
    /// Empty line: place the remaining ships randomly.
    RandomRest,
}

pub fn parse_setup_input(input: &str, current: Orientation) -> Result<SetupInput, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(SetupInput::RandomRest);
    }
    if input.eq_ignore_ascii_case("r") {
        return Ok(SetupInput::Rotate(current.toggled()));
    }
    let (pos, orientation) = parse_placement(input, current)?;
    Ok(SetupInput::Place(pos, orientation))
}

fn cell_char(cell: CellState, reveal: bool) -> char {
    match cell {
        CellState::Empty => '.',
        CellState::Ship if reveal => 'S',
        CellState::Ship => '.',
        CellState::Hit => 'X',
        CellState::Miss => 'o',
        CellState::Sunk => '#',
    }
}

/// Render a board as a framed grid. Ships are shown only when `reveal` is set.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "    ╔═══════════════════════╗");
    let _ = write!(out, "    ║  ");
    for c in 0..BOARD_SIZE as usize {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    let _ = writeln!(out, " ║");
    let _ = writeln!(out, "    ╠═══════════════════════╣");
    for (r, row) in board.rows().enumerate() {
        let _ = write!(out, "    ║ {:2}", r + 1);
        for cell in row {
            let _ = write!(out, " {}", cell_char(cell, reveal));
        }
        let _ = writeln!(out, " ║");
    }
    let _ = writeln!(out, "    ╚═══════════════════════╝");
    if reveal {
        let _ = writeln!(out, "    Legend: S=Ship  X=Hit  #=Sunk  o=Miss  .=Water");
    } else {
        let _ = writeln!(out, "    Legend: X=Hit  #=Sunk  o=Miss  .=Unknown");
    }
    out
}

/// One line per ship with its size and status.
pub fn render_fleet(fleet: &Fleet) -> String {
    let mut out = String::new();
    for ship in fleet.ships() {
        let status = if ship.is_sunk() {
            "SUNK"
        } else if ship.is_placed() {
            "Active"
        } else {
            "Not placed"
        };
        let _ = writeln!(out, "      {} ({}): {}", ship.name(), ship.size(), status);
    }
    out
}
