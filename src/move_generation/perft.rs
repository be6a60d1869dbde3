//! Move-path enumeration for validating the generator and benchmarking it.

use crate::game_state::draughts_types::{Move, Rank};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move, captured_position};
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
    }
}

/// Leaf statistics of the move tree `depth` plies deep.
pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(game_state) {
        perft_recurse(generator, game_state, mv, depth, 1, &mut total);
    }
    total
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    parent: &GameState,
    mv: Move,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    let next = apply_move(parent, mv);

    if current_depth == search_depth {
        counts.nodes += 1;
        if captured_position(parent, mv).is_some() {
            counts.captures += 1;
        }
        let was_man = parent.piece_at(mv.from).map(|p| p.rank) == Some(Rank::Man);
        let is_king = next.piece_at(mv.to).map(|p| p.rank) == Some(Rank::King);
        if was_man && is_king {
            counts.promotions += 1;
        }
        return;
    }

    let mut local = PerftCounts::default();
    for child in generator.generate_legal_moves(&next) {
        perft_recurse(generator, &next, child, search_depth, current_depth + 1, &mut local);
    }
    counts.merge(local);
}
