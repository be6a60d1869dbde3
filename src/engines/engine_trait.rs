//! Engine abstraction layer used by the game loop and the match harness.
//!
//! Different move-selection strategies sit behind a single trait so players
//! can be chosen at runtime.

use crate::errors::DraughtsResult;
use crate::game_state::draughts_types::Move;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` only when the side to move has no legal move.
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, game_state: &GameState) -> DraughtsResult<EngineOutput>;
}
