use crate::errors::{DraughtsError, DraughtsResult};
use crate::game_state::{draughts_types::*, game_state::GameState};
use crate::move_generation::move_generator::MoveGenerator;

/// Resulting position after `mv`, with side to move and direction flipped.
///
/// `mv` must come from the move generator for `game_state`; nothing is
/// validated here (see `apply_checked_move` for player input).
pub fn apply_move(game_state: &GameState, mv: Move) -> GameState {
    let mut next = *game_state;

    if let Some(piece) = game_state.piece_at(mv.from) {
        if let Some(captured) = captured_position(game_state, mv) {
            next.set(captured, Square::Empty);
        }

        let promotion_row = game_state.direction_of(piece.color).promotion_row();
        let landed = if piece.rank == Rank::Man && mv.to.row() == promotion_row {
            piece.promoted()
        } else {
            piece
        };

        next.set(mv.from, Square::Empty);
        next.set(mv.to, Square::Occupied(landed));
    } else {
        debug_assert!(false, "apply_move called with empty origin {}", mv.from);
    }

    next.side_to_move = game_state.side_to_move.opposite();
    next.direction = game_state.direction.opposite();
    next
}

/// Square of the piece captured by `mv`, if it is a capture.
///
/// The captured piece always sits on the square right before the destination
/// along the line of travel: for a man that is the jumped-over square, for a
/// king it is the enemy piece ending its slide. A long king slide whose last
/// crossed square is empty captures nothing.
pub fn captured_position(game_state: &GameState, mv: Move) -> Option<Position> {
    if mv.distance() < 2 {
        return None;
    }
    let mover = game_state.piece_at(mv.from)?;
    let (d_row, d_col) = mv.unit_step();
    let before = mv.to.offset(-d_row, -d_col, 1)?;

    match game_state.piece_at(before) {
        Some(piece) if piece.color != mover.color => Some(before),
        _ => None,
    }
}

/// Apply a move supplied by a player after checking it against the legal set.
pub fn apply_checked_move<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    mv: Move,
) -> DraughtsResult<GameState> {
    if generator.generate_legal_moves(game_state).contains(&mv) {
        Ok(apply_move(game_state, mv))
    } else {
        Err(DraughtsError::IllegalMove(mv))
    }
}
