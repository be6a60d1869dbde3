//! Errors used throughout the draughts engine.
//!
//! `DraughtsError` is the single error type returned by notation parsing,
//! checked move application, search and the interactive shell. Input errors
//! (`InvalidNotation`, `IllegalMove`) are recoverable and meant to be shown to
//! the player. `EmptyScoreList` is an internal contract violation: the search
//! asked for the minimum of zero child scores, which means the move generator
//! and the search disagree about which positions are terminal.

use thiserror::Error;

use crate::game_state::draughts_types::Move;

#[derive(Debug, Error)]
pub enum DraughtsError {
    /// A human move string could not be read as two board coordinates.
    #[error("invalid move notation {input:?}: {reason}")]
    InvalidNotation { input: String, reason: String },

    /// A well-formed move that is not in the legal set of the position.
    #[error("move {0} is not legal in this position")]
    IllegalMove(Move),

    /// Minimum requested over an empty score list.
    #[error("cannot take the minimum of an empty score list")]
    EmptyScoreList,

    /// Best move requested for a position where the side to move is stuck.
    #[error("no legal moves available for the side to move")]
    NoLegalMoves,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("logger already installed: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl DraughtsError {
    pub(crate) fn notation(input: &str, reason: impl Into<String>) -> Self {
        DraughtsError::InvalidNotation {
            input: input.to_owned(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by player input that the game loop can recover from.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            DraughtsError::InvalidNotation { .. } | DraughtsError::IllegalMove(_)
        )
    }
}

pub type DraughtsResult<T> = Result<T, DraughtsError>;
