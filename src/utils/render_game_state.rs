//! Terminal-oriented board renderer.
//!
//! Row 0 is printed first, labelled `1`, matching the coordinates accepted by
//! `algebraic::parse_move`.

use crate::game_state::{draughts_types::*, game_state::GameState};

const COLUMN_LABELS: &str = "   A   B   C   D   E   F   G   H";

/// Render the board to a string for terminal output.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();
    out.push_str(COLUMN_LABELS);
    out.push('\n');

    for (row, squares) in game_state.board.iter().enumerate() {
        let label = row + 1;
        out.push_str(&label.to_string());
        for square in squares {
            out.push('|');
            out.push(' ');
            out.push(square_glyph(*square));
            out.push(' ');
        }
        out.push('|');
        out.push_str(&label.to_string());
        out.push('\n');
    }

    out.push_str(COLUMN_LABELS);
    out
}

fn square_glyph(square: Square) -> char {
    match square.piece() {
        None => ' ',
        Some(Piece { color: Color::Dark, rank: Rank::Man }) => 'o',
        Some(Piece { color: Color::Dark, rank: Rank::King }) => '♔',
        Some(Piece { color: Color::Light, rank: Rank::Man }) => '●',
        Some(Piece { color: Color::Light, rank: Rank::King }) => '♚',
    }
}
