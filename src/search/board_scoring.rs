//! Pluggable board evaluation interfaces and the baseline material scorer.
//!
//! Search stays independent of the heuristic by delegating static scoring to
//! `BoardScorer`.

use crate::game_state::draughts_rules::WIN_SCORE;
use crate::game_state::game_state::GameState;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side to move.
    fn score(&self, game_state: &GameState) -> i32;
}

/// Piece-count difference; kings count the same as men.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        let side = game_state.side_to_move;
        let own = game_state.piece_count(side) as i32;
        let opponent = game_state.piece_count(side.opposite()) as i32;

        if opponent == 0 {
            WIN_SCORE
        } else if own == 0 {
            -WIN_SCORE
        } else {
            own - opponent
        }
    }
}
