use crate::game_state::{draughts_types::*, game_state::GameState};

pub const KING_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Slides and captures of the king on `from`.
///
/// Each ray is walked while empty; every empty square is a slide target. The
/// first occupied square ends the ray, and if it holds an enemy piece with an
/// empty square right behind it, landing there is the (single) capture for
/// that ray.
pub fn generate_king_moves(
    game_state: &GameState,
    from: Position,
    steps: &mut Vec<Move>,
    jumps: &mut Vec<Move>,
) {
    let Some(piece) = game_state.piece_at(from) else {
        return;
    };
    let enemy = piece.color.opposite();

    for (d_row, d_col) in KING_DIRECTIONS {
        let mut distance = 1;
        while let Some(to) = from.offset(d_row, d_col, distance) {
            if !game_state.is_empty_at(to) {
                if game_state.square(to).is_color(enemy) {
                    if let Some(landing) = to.offset(d_row, d_col, 1) {
                        if game_state.is_empty_at(landing) {
                            jumps.push(Move::new(from, landing));
                        }
                    }
                }
                break;
            }
            steps.push(Move::new(from, to));
            distance += 1;
        }
    }
}
