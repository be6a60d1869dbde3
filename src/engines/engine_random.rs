//! Random-move engine.
//!
//! Selects uniformly from legal moves; used as a weak sparring partner and
//! for diagnostics. Seeded construction makes games reproducible.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::DraughtsResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

pub struct RandomEngine {
    move_generator: LegalMoveGenerator,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Plum Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> DraughtsResult<EngineOutput> {
        let legal_moves = self.move_generator.generate_legal_moves(game_state);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("random_engine legal_moves {}", legal_moves.len()));
        out.best_move = legal_moves.choose(&mut self.rng).copied();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_generator::legal_moves;

    #[test]
    fn picks_a_legal_move_reproducibly() {
        let game = GameState::new_game();
        let first = RandomEngine::seeded(7)
            .choose_move(&game)
            .expect("engine should run")
            .best_move
            .expect("start position has moves");
        let second = RandomEngine::seeded(7)
            .choose_move(&game)
            .expect("engine should run")
            .best_move;

        assert!(legal_moves(&game).contains(&first));
        assert_eq!(Some(first), second);
    }

    #[test]
    fn no_move_when_side_is_stuck() {
        let game = GameState::default();
        let out = RandomEngine::seeded(1).choose_move(&game).expect("engine should run");
        assert_eq!(out.best_move, None);
    }
}
