//! Crate root module declarations for the Plum Draughts engine project.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! search, engines, the interactive shell and utility helpers) so binaries,
//! benches and tests can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod draughts_rules;
    pub mod draughts_types;
    pub mod game_state;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod legal_moves_king;
    pub mod legal_moves_man;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod negamax;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod cli {
    pub mod game_loop;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod logging;
    pub mod render_game_state;
}

pub use game_state::draughts_types::{GameOutcome, Move};
pub use game_state::game_state::GameState;
pub use move_generation::legal_move_apply::apply_move;
pub use move_generation::legal_move_generator::{legal_moves, terminal_outcome};
pub use search::negamax::choose_best_move;

/// Standard starting position, light to move.
pub fn initial_position() -> GameState {
    GameState::new_game()
}

/// True once either side has no pieces left. A side that still has pieces
/// but no legal move is reported by `terminal_outcome`.
pub fn is_game_over(game_state: &GameState) -> bool {
    game_state.is_game_over()
}
