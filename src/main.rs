//! Terminal draughts: human and/or engine players on one board.
//!
//! `cargo run --release -- --light human --dark minimax --depth 5`

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{error, info};

use plum_draughts::cli::game_loop::{run_game_loop, GameLoopConfig, Player};
use plum_draughts::engines::engine_minimax::MinimaxEngine;
use plum_draughts::engines::engine_random::RandomEngine;
use plum_draughts::game_state::game_state::GameState;
use plum_draughts::utils::logging::init_logging;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PlayerKind {
    Human,
    Minimax,
    Random,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Plies searched below each root move by the minimax engine
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..))]
    depth: u8,

    /// Disable the search cutoff (exhaustive minimax)
    #[arg(long)]
    no_pruning: bool,

    #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
    light: PlayerKind,

    #[arg(long, value_enum, default_value_t = PlayerKind::Minimax)]
    dark: PlayerKind,

    /// Stop the game after this many plies
    #[arg(long, default_value_t = 200)]
    max_plies: u16,

    /// Seed for the random engine
    #[arg(long)]
    seed: Option<u64>,

    /// Write log output to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Clear the terminal before every board render
    #[arg(long)]
    clear: bool,
}

fn build_player(kind: PlayerKind, args: &Args, seed_offset: u64) -> Player {
    match kind {
        PlayerKind::Human => Player::Human,
        PlayerKind::Minimax => Player::Engine(Box::new(MinimaxEngine::new(args.depth, !args.no_pruning))),
        PlayerKind::Random => match args.seed {
            Some(seed) => Player::Engine(Box::new(RandomEngine::seeded(seed.wrapping_add(seed_offset)))),
            None => Player::Engine(Box::new(RandomEngine::new())),
        },
    }
}

fn run(args: &Args) -> Result<()> {
    let mut light = build_player(args.light, args, 0);
    let mut dark = build_player(args.dark, args, 1);
    info!(
        "starting game: light={} dark={} depth={} pruning={}",
        light.name(),
        dark.name(),
        args.depth,
        !args.no_pruning
    );

    let config = GameLoopConfig {
        max_plies: args.max_plies,
        clear_screen: args.clear,
    };
    let stdin = io::stdin();
    let summary = run_game_loop(
        &mut light,
        &mut dark,
        GameState::new_game(),
        &config,
        &mut stdin.lock(),
        &mut io::stdout(),
    )
    .context("game aborted")?;

    info!("game over after {} plies: {}", summary.moves.len(), summary.outcome);
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = init_logging(args.debug, args.log_file.as_deref()) {
        eprintln!("failed to initialise logging: {err}");
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
