//! Full legal move generation with the mandatory-capture rule.
//!
//! Pieces of the side to move are split into men and kings. Captures of all
//! pieces are gathered first; if any exist they are the whole legal set.
//! Otherwise the non-capturing steps and slides are returned. The two kinds
//! are never mixed.

use crate::game_state::draughts_types::{GameOutcome, Move, Rank};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_man::{generate_man_jumps, generate_man_steps};
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<Move> {
        legal_moves(game_state)
    }
}

/// Legal moves for the side to move, in generation order: men before kings,
/// pieces row-major, directions in a fixed order. Possibly empty.
pub fn legal_moves(game_state: &GameState) -> Vec<Move> {
    let mut men = Vec::with_capacity(12);
    let mut kings = Vec::new();
    for (pos, piece) in game_state.pieces_of(game_state.side_to_move) {
        match piece.rank {
            Rank::Man => men.push(pos),
            Rank::King => kings.push(pos),
        }
    }

    let mut jumps = Vec::new();
    let mut king_slides = Vec::new();
    for &from in &men {
        generate_man_jumps(game_state, from, &mut jumps);
    }
    for &from in &kings {
        generate_king_moves(game_state, from, &mut king_slides, &mut jumps);
    }
    if !jumps.is_empty() {
        return jumps;
    }

    let mut steps = Vec::with_capacity(men.len() * 2 + king_slides.len());
    for &from in &men {
        generate_man_steps(game_state, from, &mut steps);
    }
    steps.extend(king_slides);
    steps
}

/// True when `mv` is one of the legal moves of the position.
#[inline]
pub fn is_legal_move(game_state: &GameState, mv: Move) -> bool {
    legal_moves(game_state).contains(&mv)
}

/// Winner of the position if the side to move has lost: no pieces left or
/// no legal move. `None` while the game goes on.
pub fn terminal_outcome(game_state: &GameState) -> Option<GameOutcome> {
    let side = game_state.side_to_move;
    if game_state.piece_count(side) == 0 || legal_moves(game_state).is_empty() {
        Some(GameOutcome::Winner(side.opposite()))
    } else {
        None
    }
}
