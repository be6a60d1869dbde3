//! Fixed-depth negamax engine over the material scorer.

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::DraughtsResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::search::board_scoring::MaterialScorer;
use crate::search::negamax::{search_best_move, SearchConfig};

pub struct MinimaxEngine {
    config: SearchConfig,
    move_generator: LegalMoveGenerator,
    scorer: MaterialScorer,
}

impl MinimaxEngine {
    /// Depth is clamped to at least one ply.
    pub fn new(max_depth: u8, pruning: bool) -> Self {
        Self {
            config: SearchConfig {
                max_depth: max_depth.max(1),
                pruning,
            },
            move_generator: LegalMoveGenerator,
            scorer: MaterialScorer,
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        let config = SearchConfig::default();
        Self::new(config.max_depth, config.pruning)
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        if self.config.pruning {
            "Plum Minimax (pruning)"
        } else {
            "Plum Minimax"
        }
    }

    fn choose_move(&mut self, game_state: &GameState) -> DraughtsResult<EngineOutput> {
        let result = search_best_move(game_state, &self.move_generator, &self.scorer, self.config)?;

        let mut out = EngineOutput {
            best_move: result.best_move,
            ..EngineOutput::default()
        };
        out.info_lines.push(format!(
            "depth {} score {} nodes {}",
            self.config.max_depth, result.best_score, result.nodes
        ));
        Ok(out)
    }
}
