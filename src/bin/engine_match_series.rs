//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --games 20 --depth 4 --opponent random`

use anyhow::Result;
use clap::{Parser, ValueEnum};

use plum_draughts::engines::engine_minimax::MinimaxEngine;
use plum_draughts::engines::engine_random::RandomEngine;
use plum_draughts::engines::engine_trait::Engine;
use plum_draughts::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};
use plum_draughts::utils::logging::init_logging;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Opponent {
    /// Same depth with the cutoff disabled
    Unpruned,
    Random,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Play a series of engine-vs-engine draughts games")]
struct Args {
    #[arg(long, default_value_t = 10)]
    games: u16,

    /// Search depth of the minimax players
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..))]
    depth: u8,

    #[arg(long, value_enum, default_value_t = Opponent::Random)]
    opponent: Opponent,

    #[arg(long, default_value_t = 1234)]
    seed: u64,

    #[arg(long, default_value_t = 200)]
    max_plies: u16,

    /// Random plies played before the engines take over
    #[arg(long, default_value_t = 4)]
    opening_plies: u8,

    /// Log every move
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, None)?;

    let depth = args.depth;
    let seed = args.seed;
    let player1 = || Box::new(MinimaxEngine::new(depth, true)) as Box<dyn Engine>;
    let player2 = || match args.opponent {
        Opponent::Unpruned => Box::new(MinimaxEngine::new(depth, false)) as Box<dyn Engine>,
        Opponent::Random => Box::new(RandomEngine::seeded(seed)) as Box<dyn Engine>,
    };

    let stats = play_engine_match_series(
        player1,
        player2,
        &MatchSeriesConfig {
            games: args.games,
            base_seed: args.seed,
            per_game: MatchConfig {
                max_plies: args.max_plies,
                opening_plies: args.opening_plies,
            },
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
