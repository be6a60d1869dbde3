//! Canonical rule constants.
//!
//! Starting layout: each side fills the playable squares of the three rows
//! nearest its own edge. Light starts on rows 5..=7 and moves up (toward
//! row 0); dark starts on rows 0..=2 and moves down. Light moves first.

use crate::game_state::draughts_types::{Color, Direction};

/// Rows occupied by dark men at the start of a game.
pub const DARK_START_ROWS: std::ops::RangeInclusive<u8> = 0..=2;

/// Rows occupied by light men at the start of a game.
pub const LIGHT_START_ROWS: std::ops::RangeInclusive<u8> = 5..=7;

/// Men per side in the starting layout.
pub const PIECES_PER_SIDE: usize = 12;

pub const FIRST_TO_MOVE: Color = Color::Light;
pub const FIRST_DIRECTION: Direction = Direction::Up;

/// Score of a won position (opponent has no pieces left).
pub const WIN_SCORE: i32 = 10;

/// Bound used as negative infinity by the search. Negation never overflows.
pub const SCORE_INFINITY: i32 = 1_000_000;
