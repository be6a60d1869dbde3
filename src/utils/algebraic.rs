//! Conversions between board positions and human-readable coordinates.
//!
//! A coordinate is a column letter `a`..`h` followed by a row digit `1`..`8`
//! (`a1` is row 0, column 0). A move is two coordinates, either concatenated
//! (`c3d4`) or separated by any amount of whitespace (`c3  d4`).

use crate::errors::{DraughtsError, DraughtsResult};
use crate::game_state::draughts_types::{Move, Position, BOARD_SIZE};

/// Convert a coordinate such as `"c3"` to a position. Case-insensitive.
pub fn algebraic_to_position(square: &str) -> DraughtsResult<Position> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(DraughtsError::notation(square, "a square is a letter and a digit"));
    }

    let col = bytes[0].to_ascii_lowercase();
    let row = bytes[1];
    let last_col = b'a' + BOARD_SIZE as u8 - 1;
    let last_row = b'1' + BOARD_SIZE as u8 - 1;

    if !(b'a'..=last_col).contains(&col) {
        return Err(DraughtsError::notation(
            square,
            format!("column must be a..{}", char::from(last_col)),
        ));
    }
    if !(b'1'..=last_row).contains(&row) {
        return Err(DraughtsError::notation(
            square,
            format!("row must be 1..{}", char::from(last_row)),
        ));
    }

    Ok(Position::new(row - b'1', col - b'a'))
}

#[inline]
pub fn position_to_algebraic(pos: Position) -> String {
    pos.to_string()
}

/// Parse a move typed by a player.
pub fn parse_move(input: &str) -> DraughtsResult<Move> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if !compact.is_ascii() || compact.len() != 4 {
        return Err(DraughtsError::notation(
            input,
            "expected two squares such as c3d4 or \"c3 d4\"",
        ));
    }

    let from = algebraic_to_position(&compact[0..2]).map_err(|e| rebase(e, input))?;
    let to = algebraic_to_position(&compact[2..4]).map_err(|e| rebase(e, input))?;
    Ok(Move::new(from, to))
}

/// Report notation errors against the full input rather than the sub-slice.
fn rebase(err: DraughtsError, input: &str) -> DraughtsError {
    match err {
        DraughtsError::InvalidNotation { reason, .. } => DraughtsError::notation(input, reason),
        other => other,
    }
}
