//! Interactive game loop.
//!
//! Each side is either a human typing moves (`"c3d4"` or `"c3 d4"`) or an
//! `Engine`. Input and output are generic so the loop runs the same against a
//! terminal and against in-memory buffers.

use std::io::{BufRead, Write};
use std::time::Instant;

use log::{info, warn};

use crate::engines::engine_trait::Engine;
use crate::errors::{DraughtsError, DraughtsResult};
use crate::game_state::draughts_types::{Color, GameOutcome, Move};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_checked_move;
use crate::move_generation::legal_move_generator::{legal_moves, terminal_outcome, LegalMoveGenerator};
use crate::utils::algebraic::parse_move;
use crate::utils::render_game_state::render_game_state;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

pub enum Player {
    Human,
    Engine(Box<dyn Engine>),
}

impl Player {
    pub fn name(&self) -> &str {
        match self {
            Player::Human => "human",
            Player::Engine(engine) => engine.name(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameLoopConfig {
    pub max_plies: u16,
    /// Clear the terminal before every board render.
    pub clear_screen: bool,
}

impl Default for GameLoopConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            clear_screen: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameSummary {
    pub outcome: GameOutcome,
    pub final_state: GameState,
    pub moves: Vec<Move>,
}

/// Play one game from `start_state` until it is decided, the ply limit is
/// reached or a human's input runs out.
pub fn run_game_loop<R: BufRead, W: Write>(
    light: &mut Player,
    dark: &mut Player,
    start_state: GameState,
    config: &GameLoopConfig,
    input: &mut R,
    output: &mut W,
) -> DraughtsResult<GameSummary> {
    for player in [&mut *light, &mut *dark] {
        if let Player::Engine(engine) = player {
            engine.new_game();
        }
    }

    let mut state = start_state;
    let mut moves = Vec::new();
    let mut outcome = GameOutcome::MaxPlies;

    while moves.len() < usize::from(config.max_plies) {
        render(&state, config, output)?;
        if let Some(decided) = terminal_outcome(&state) {
            outcome = decided;
            break;
        }

        let mover = state.side_to_move;
        let player = match mover {
            Color::Light => &mut *light,
            Color::Dark => &mut *dark,
        };

        let started = Instant::now();
        let chosen = match player {
            Player::Human => match read_human_move(&state, input, output)? {
                Some(mv) => mv,
                None => {
                    outcome = GameOutcome::Abandoned;
                    break;
                }
            },
            Player::Engine(engine) => {
                let out = engine.choose_move(&state)?;
                out.best_move.ok_or(DraughtsError::NoLegalMoves)?
            }
        };

        state = apply_checked_move(&LegalMoveGenerator, &state, chosen)?;
        moves.push(chosen);
        info!(
            "{} ({mover}) plays {chosen} in {:.3} ms",
            player.name(),
            started.elapsed().as_secs_f64() * 1000.0
        );
        writeln!(output, "{mover} plays {chosen}")?;
    }

    if outcome == GameOutcome::MaxPlies {
        render(&state, config, output)?;
        if let Some(decided) = terminal_outcome(&state) {
            outcome = decided;
        }
    }
    writeln!(output, "{outcome}")?;
    output.flush()?;

    Ok(GameSummary {
        outcome,
        final_state: state,
        moves,
    })
}

fn render<W: Write>(state: &GameState, config: &GameLoopConfig, output: &mut W) -> DraughtsResult<()> {
    if config.clear_screen {
        write!(output, "{CLEAR_SCREEN}")?;
    }
    writeln!(output, "{}", render_game_state(state))?;
    Ok(())
}

/// Prompt until a legal move is entered. `None` when input is closed.
fn read_human_move<R: BufRead, W: Write>(
    state: &GameState,
    input: &mut R,
    output: &mut W,
) -> DraughtsResult<Option<Move>> {
    let options = legal_moves(state)
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ");

    loop {
        writeln!(output, "legal moves: {options}")?;
        write!(output, "{} to move: ", state.side_to_move)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_move(line).and_then(|mv| apply_checked_move(&LegalMoveGenerator, state, mv).map(|_| mv)) {
            Ok(mv) => return Ok(Some(mv)),
            Err(err) if err.is_user_input() => {
                warn!("rejected input {line:?}: {err}");
                writeln!(output, "{err}")?;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{run_game_loop, GameLoopConfig, Player};
    use crate::engines::engine_minimax::MinimaxEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::game_state::{draughts_types::*, game_state::GameState};

    fn run(input: &str, light: &mut Player, dark: &mut Player, max_plies: u16) -> (super::GameSummary, String) {
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let config = GameLoopConfig {
            max_plies,
            clear_screen: false,
        };
        let summary = run_game_loop(light, dark, GameState::new_game(), &config, &mut input, &mut output)
            .expect("game loop should run");
        (summary, String::from_utf8(output).expect("utf-8 output"))
    }

    #[test]
    fn human_is_reprompted_until_move_is_legal() {
        let (summary, output) = run(
            "garbage\nb6b5\nb6a5\n",
            &mut Player::Human,
            &mut Player::Engine(Box::new(MinimaxEngine::new(3, true))),
            1,
        );

        assert_eq!(summary.outcome, GameOutcome::MaxPlies);
        assert_eq!(summary.moves, vec![Move::new(Position::new(5, 1), Position::new(4, 0))]);
        assert_eq!(
            summary.final_state.piece_at(Position::new(4, 0)),
            Some(Piece::man(Color::Light))
        );
        assert!(output.contains("invalid move notation \"garbage\""));
        assert!(output.contains("move b6b5 is not legal in this position"));
        assert!(output.contains("light plays b6a5"));
    }

    #[test]
    fn closed_input_abandons_the_game() {
        let (summary, output) = run("", &mut Player::Human, &mut Player::Human, 10);
        assert_eq!(summary.outcome, GameOutcome::Abandoned);
        assert!(summary.moves.is_empty());
        assert_eq!(summary.final_state, GameState::new_game());
        assert!(output.ends_with("game abandoned\n"));
    }

    #[test]
    fn engines_play_until_the_ply_limit() {
        let (summary, _) = run(
            "",
            &mut Player::Engine(Box::new(RandomEngine::seeded(3))),
            &mut Player::Engine(Box::new(MinimaxEngine::new(2, false))),
            6,
        );
        assert!(summary.moves.len() <= 6);
        if summary.moves.len() < 6 {
            assert!(matches!(summary.outcome, GameOutcome::Winner(_)));
        }
    }
}
