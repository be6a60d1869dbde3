//! Minimal head-to-head engine match harness.
//!
//! Runs two `Engine` implementations against each other without any terminal
//! I/O, with an optional seeded random opening prefix so deterministic
//! engines do not replay the same game over and over.

use std::time::Instant;

use log::{debug, info};
use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};

use crate::engines::engine_trait::Engine;
use crate::errors::{DraughtsError, DraughtsResult};
use crate::game_state::draughts_types::{Color, GameOutcome, Move};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::{legal_moves, terminal_outcome};

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    /// Random plies played before the engines take over.
    pub opening_plies: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_plies: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: GameOutcome,
    pub final_state: GameState,
    pub opening_moves: Vec<Move>,
    pub played_moves: Vec<Move>,
    /// Indexed by `Color::index`.
    pub move_counts: [u32; 2],
    pub total_time_ns: [u128; 2],
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig {
                opening_plies: 4,
                ..MatchConfig::default()
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub unfinished: u16,
    pub outcomes: Vec<GameOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
}

impl MatchSeriesStats {
    pub fn player1_avg_move_time_ms(&self) -> f64 {
        average_ms(self.player1_total_time_ns, self.player1_moves)
    }

    pub fn player2_avg_move_time_ms(&self) -> f64 {
        average_ms(self.player2_total_time_ns, self.player2_moves)
    }

    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} unfinished={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.unfinished,
            self.player1_avg_move_time_ms(),
            self.player2_avg_move_time_ms()
        )
    }
}

fn average_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        total_ns as f64 / f64::from(moves) / 1_000_000.0
    }
}

/// Play one game from `start_state`. `engine_light` moves the light pieces.
pub fn play_engine_match(
    engine_light: &mut dyn Engine,
    engine_dark: &mut dyn Engine,
    start_state: GameState,
    seed: u64,
    config: &MatchConfig,
) -> DraughtsResult<MatchResult> {
    engine_light.new_game();
    engine_dark.new_game();

    let (mut state, opening_moves) = apply_seeded_random_opening(start_state, seed, config.opening_plies);
    let mut played_moves = Vec::new();
    let mut move_counts = [0u32; 2];
    let mut total_time_ns = [0u128; 2];

    let mut outcome = GameOutcome::MaxPlies;
    for _ in 0..config.max_plies {
        if let Some(decided) = terminal_outcome(&state) {
            outcome = decided;
            break;
        }

        let mover = state.side_to_move;
        let engine: &mut dyn Engine = match mover {
            Color::Light => &mut *engine_light,
            Color::Dark => &mut *engine_dark,
        };

        let started = Instant::now();
        let out = engine.choose_move(&state)?;
        let elapsed = started.elapsed();

        move_counts[mover.index()] += 1;
        total_time_ns[mover.index()] += elapsed.as_nanos();

        let chosen = out.best_move.ok_or(DraughtsError::NoLegalMoves)?;
        if !legal_moves(&state).contains(&chosen) {
            return Err(DraughtsError::IllegalMove(chosen));
        }

        debug!(
            "{} ({mover}) plays {chosen} in {:.3} ms",
            engine.name(),
            elapsed.as_secs_f64() * 1000.0
        );
        played_moves.push(chosen);
        state = apply_move(&state, chosen);
    }

    if outcome == GameOutcome::MaxPlies {
        if let Some(decided) = terminal_outcome(&state) {
            outcome = decided;
        }
    }

    Ok(MatchResult {
        outcome,
        final_state: state,
        opening_moves,
        played_moves,
        move_counts,
        total_time_ns,
    })
}

fn apply_seeded_random_opening(start: GameState, seed: u64, plies: u8) -> (GameState, Vec<Move>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = start;
    let mut moves = Vec::with_capacity(plies as usize);

    for _ in 0..plies {
        let Some(&mv) = legal_moves(&state).choose(&mut rng) else {
            break;
        };
        moves.push(mv);
        state = apply_move(&state, mv);
    }

    (state, moves)
}

/// Play a series of games, swapping colours every game, and aggregate results.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> DraughtsResult<MatchSeriesStats>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };

    for i in 0..config.games {
        let player1_color = if i % 2 == 0 { Color::Light } else { Color::Dark };
        let seed = config.base_seed.wrapping_add(u64::from(i / 2));
        let mut player1 = player1_factory();
        let mut player2 = player2_factory();

        let result = match player1_color {
            Color::Light => play_engine_match(
                player1.as_mut(),
                player2.as_mut(),
                GameState::new_game(),
                seed,
                &config.per_game,
            )?,
            Color::Dark => play_engine_match(
                player2.as_mut(),
                player1.as_mut(),
                GameState::new_game(),
                seed,
                &config.per_game,
            )?,
        };

        let p1 = player1_color.index();
        let p2 = player1_color.opposite().index();
        stats.player1_moves += result.move_counts[p1];
        stats.player2_moves += result.move_counts[p2];
        stats.player1_total_time_ns += result.total_time_ns[p1];
        stats.player2_total_time_ns += result.total_time_ns[p2];

        match result.outcome {
            GameOutcome::Winner(color) if color == player1_color => stats.player1_wins += 1,
            GameOutcome::Winner(_) => stats.player2_wins += 1,
            GameOutcome::MaxPlies | GameOutcome::Abandoned => stats.unfinished += 1,
        }
        info!(
            "game {}/{} seed={} player1={} result={}",
            i + 1,
            config.games,
            seed,
            player1_color,
            result.outcome
        );
        stats.outcomes.push(result.outcome);
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::{play_engine_match, play_engine_match_series, MatchConfig, MatchSeriesConfig};
    use crate::engines::engine_minimax::MinimaxEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::{draughts_types::*, game_state::GameState};

    #[test]
    fn pruned_and_unpruned_engines_play_the_same_game() {
        let config = MatchConfig {
            max_plies: 10,
            opening_plies: 0,
        };
        let play = |pruning| {
            let mut light = MinimaxEngine::new(3, pruning);
            let mut dark = MinimaxEngine::new(3, pruning);
            play_engine_match(&mut light, &mut dark, GameState::new_game(), 0, &config)
                .expect("match should run")
        };

        let pruned = play(true);
        let full = play(false);
        assert_eq!(pruned.played_moves, full.played_moves);
        assert_eq!(pruned.final_state, full.final_state);
        assert_eq!(pruned.outcome, GameOutcome::MaxPlies);
        assert_eq!(pruned.move_counts, [5, 5]);
    }

    #[test]
    fn decided_position_ends_immediately() {
        let start = GameState::new_empty(Color::Dark, Direction::Down)
            .with_piece(Position::new(4, 4), Piece::man(Color::Light));
        let mut light = RandomEngine::seeded(1);
        let mut dark = RandomEngine::seeded(2);

        let result = play_engine_match(&mut light, &mut dark, start, 0, &MatchConfig::default())
            .expect("match should run");
        assert_eq!(result.outcome, GameOutcome::Winner(Color::Light));
        assert!(result.played_moves.is_empty());
    }

    #[test]
    fn series_accounts_for_every_game() {
        let config = MatchSeriesConfig {
            games: 4,
            base_seed: 11,
            per_game: MatchConfig {
                max_plies: 60,
                opening_plies: 2,
            },
        };
        let stats = play_engine_match_series(
            || Box::new(MinimaxEngine::new(2, true)) as Box<dyn Engine>,
            || Box::new(RandomEngine::seeded(5)) as Box<dyn Engine>,
            &config,
        )
        .expect("series should run");

        assert_eq!(stats.outcomes.len(), 4);
        assert_eq!(stats.player1_wins + stats.player2_wins + stats.unfinished, 4);
        assert!(stats.report().starts_with("games=4 "));
    }
}
