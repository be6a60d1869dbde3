use crate::game_state::draughts_types::Move;
use crate::game_state::game_state::GameState;

/// Source of legal moves for the side to move.
///
/// Generation cannot fail: a stuck or empty side simply yields no moves,
/// which callers treat as a terminal position.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<Move>;
}
