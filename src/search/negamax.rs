//! Fixed-depth negamax search with an optional cutoff.
//!
//! Each side carries one running best score, always in its own perspective.
//! The two values are passed by value down the recursion and swap places at
//! every ply, so sibling branches never share bounds. A branch is cut as soon
//! as the side to move already does better than the opponent's running best
//! allows; with the cutoff disabled the search is plain exhaustive minimax.
//! Both modes select the same move, only the visited node count differs.

use log::debug;

use crate::errors::{DraughtsError, DraughtsResult};
use crate::game_state::draughts_rules::SCORE_INFINITY;
use crate::game_state::draughts_types::Move;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Plies searched below each root move.
    pub max_depth: u8,
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            pruning: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub nodes: u64,
}

/// Running best scores of the side to move and of its opponent.
#[derive(Debug, Clone, Copy)]
struct Bounds {
    own_best: i32,
    opponent_best: i32,
}

impl Bounds {
    const OPEN: Bounds = Bounds {
        own_best: -SCORE_INFINITY,
        opponent_best: -SCORE_INFINITY,
    };

    /// Bounds as seen from the next ply, where the roles are swapped.
    #[inline]
    fn swapped(self) -> Bounds {
        Bounds {
            own_best: self.opponent_best,
            opponent_best: self.own_best,
        }
    }

    /// True once the opponent would never allow the current line.
    #[inline]
    fn is_cut(self) -> bool {
        self.own_best > -self.opponent_best
    }
}

/// Best move for the side to move with the default generator and scorer.
pub fn choose_best_move(game_state: &GameState, max_depth: u8, pruning: bool) -> DraughtsResult<Move> {
    search_best_move(
        game_state,
        &LegalMoveGenerator,
        &MaterialScorer,
        SearchConfig { max_depth, pruning },
    )?
    .best_move
    .ok_or(DraughtsError::NoLegalMoves)
}

/// Scores every root move and keeps the first one with the strictly highest score.
pub fn search_best_move<G: MoveGenerator, S: BoardScorer>(
    game_state: &GameState,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
) -> DraughtsResult<SearchResult> {
    let mut nodes = 1u64;
    let mut bounds = Bounds::OPEN;
    let mut best_move = None;

    for mv in generator.generate_legal_moves(game_state) {
        let child = apply_move(game_state, mv);
        let score = -negamax(
            &child,
            generator,
            scorer,
            config.max_depth,
            bounds.swapped(),
            config.pruning,
            &mut nodes,
        )?;
        debug!("root move {mv} scored {score}");

        if score > bounds.own_best {
            bounds.own_best = score;
            best_move = Some(mv);
        }
    }

    let best_score = if best_move.is_some() {
        bounds.own_best
    } else {
        scorer.score(game_state)
    };
    debug!(
        "search depth {} pruning {} best {:?} score {} nodes {}",
        config.max_depth, config.pruning, best_move, best_score, nodes
    );

    Ok(SearchResult {
        best_move,
        best_score,
        nodes,
    })
}

fn negamax<G: MoveGenerator, S: BoardScorer>(
    game_state: &GameState,
    generator: &G,
    scorer: &S,
    depth: u8,
    mut bounds: Bounds,
    pruning: bool,
    nodes: &mut u64,
) -> DraughtsResult<i32> {
    *nodes += 1;

    if depth == 0 {
        return Ok(scorer.score(game_state));
    }

    let moves = generator.generate_legal_moves(game_state);
    if moves.is_empty() {
        return Ok(scorer.score(game_state));
    }

    let mut opponent_scores = Vec::with_capacity(moves.len());
    for mv in moves {
        let child = apply_move(game_state, mv);
        let opponent_score = negamax(
            &child,
            generator,
            scorer,
            depth - 1,
            bounds.swapped(),
            pruning,
            nodes,
        )?;

        let value = -opponent_score;
        if value > bounds.own_best {
            bounds.own_best = value;
        }
        if pruning && bounds.is_cut() {
            return Ok(bounds.own_best);
        }
        opponent_scores.push(opponent_score);
    }

    Ok(-min_score(&opponent_scores)?)
}

/// Smallest score of a non-empty list.
pub fn min_score(scores: &[i32]) -> DraughtsResult<i32> {
    scores
        .iter()
        .copied()
        .min()
        .ok_or(DraughtsError::EmptyScoreList)
}

#[cfg(test)]
mod tests {
    use super::{choose_best_move, min_score, search_best_move, SearchConfig};
    use crate::errors::DraughtsError;
    use crate::game_state::{draughts_types::*, game_state::GameState};
    use crate::move_generation::legal_move_apply::apply_move;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;
    use crate::search::board_scoring::MaterialScorer;

    #[test]
    fn min_score_finds_smallest_and_refuses_empty_input() {
        assert_eq!(min_score(&[3, 4, 1, -123, 44]).expect("non-empty"), -123);
        assert!(matches!(min_score(&[]), Err(DraughtsError::EmptyScoreList)));
    }

    #[test]
    fn takes_the_only_capture() {
        let game = GameState::new_empty(Color::Dark, Direction::Down)
            .with_piece(Position::new(3, 3), Piece::man(Color::Dark))
            .with_piece(Position::new(4, 4), Piece::man(Color::Light));

        let mv = choose_best_move(&game, 5, true).expect("a move exists");
        assert_eq!(mv, Move::new(Position::new(3, 3), Position::new(5, 5)));
    }

    #[test]
    fn prefers_the_capture_that_cannot_be_answered() {
        // Both light men can capture. Taking with (5, 1) lets dark recapture
        // on (5, 5); taking with (5, 5) leaves dark no recapture.
        let game = GameState::new_empty(Color::Light, Direction::Up)
            .with_piece(Position::new(5, 1), Piece::man(Color::Light))
            .with_piece(Position::new(5, 5), Piece::man(Color::Light))
            .with_piece(Position::new(6, 0), Piece::man(Color::Light))
            .with_piece(Position::new(4, 2), Piece::man(Color::Dark))
            .with_piece(Position::new(4, 6), Piece::man(Color::Dark));

        for pruning in [true, false] {
            let result = search_best_move(
                &game,
                &LegalMoveGenerator,
                &MaterialScorer,
                SearchConfig {
                    max_depth: 2,
                    pruning,
                },
            )
            .expect("search should run");

            assert_eq!(
                result.best_move,
                Some(Move::new(Position::new(5, 5), Position::new(3, 7)))
            );
            assert_eq!(result.best_score, 2);
        }
    }

    #[test]
    fn terminal_root_has_no_best_move() {
        let game = GameState::new_empty(Color::Light, Direction::Up)
            .with_piece(Position::new(0, 0), Piece::man(Color::Dark));

        assert!(matches!(
            choose_best_move(&game, 3, true),
            Err(DraughtsError::NoLegalMoves)
        ));

        let result = search_best_move(
            &game,
            &LegalMoveGenerator,
            &MaterialScorer,
            SearchConfig::default(),
        )
        .expect("search should run");
        assert_eq!(result.best_move, None);
        assert_eq!(result.best_score, -10);
    }

    #[test]
    fn pruning_selects_same_move_with_fewer_nodes() {
        let game = GameState::new_game();
        let run = |pruning| {
            search_best_move(
                &game,
                &LegalMoveGenerator,
                &MaterialScorer,
                SearchConfig {
                    max_depth: 4,
                    pruning,
                },
            )
            .expect("search should run")
        };

        let pruned = run(true);
        let full = run(false);
        assert_eq!(pruned.best_move, full.best_move);
        assert_eq!(pruned.best_score, full.best_score);
        assert!(pruned.nodes <= full.nodes);
    }

    #[test]
    fn self_play_is_identical_with_and_without_pruning() {
        let play = |pruning: bool| {
            let mut state = GameState::new_game();
            let mut moves = Vec::new();
            for _ in 0..10 {
                let mv = choose_best_move(&state, 5, pruning).expect("game should not end in 10 plies");
                moves.push(mv);
                state = apply_move(&state, mv);
            }
            (state, moves)
        };

        let (pruned_state, pruned_moves) = play(true);
        let (full_state, full_moves) = play(false);
        assert_eq!(pruned_moves, full_moves);
        assert_eq!(pruned_state, full_state);
        assert_eq!(
            pruned_moves[0],
            Move::new(Position::new(5, 1), Position::new(4, 0))
        );
    }
}
