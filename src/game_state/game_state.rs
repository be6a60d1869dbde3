//! Core board state representation.
//!
//! `GameState` is plain data: the 8x8 grid, the side to move and that side's
//! forward direction. Every transformation (see `legal_move_apply`) returns a
//! fresh state, so search branches never share a mutable board.

use crate::game_state::draughts_rules::{
    DARK_START_ROWS, FIRST_DIRECTION, FIRST_TO_MOVE, LIGHT_START_ROWS,
};
use crate::game_state::draughts_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: [[Square; BOARD_SIZE]; BOARD_SIZE],
    pub side_to_move: Color,
    /// Forward direction of `side_to_move`. The opponent always heads the other way.
    pub direction: Direction,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_empty(FIRST_TO_MOVE, FIRST_DIRECTION)
    }
}

impl GameState {
    /// Empty board with the given side to move.
    #[inline]
    pub fn new_empty(side_to_move: Color, direction: Direction) -> Self {
        Self {
            board: [[Square::Empty; BOARD_SIZE]; BOARD_SIZE],
            side_to_move,
            direction,
        }
    }

    /// Standard starting layout, light to move.
    pub fn new_game() -> Self {
        let mut state = Self::default();
        for pos in Position::all().filter(|p| p.is_playable()) {
            if DARK_START_ROWS.contains(&pos.row()) {
                state.set(pos, Square::Occupied(Piece::man(Color::Dark)));
            } else if LIGHT_START_ROWS.contains(&pos.row()) {
                state.set(pos, Square::Occupied(Piece::man(Color::Light)));
            }
        }
        state
    }

    /// Builder-style placement, mostly for setting up test positions.
    #[inline]
    pub fn with_piece(mut self, pos: Position, piece: Piece) -> Self {
        self.set(pos, Square::Occupied(piece));
        self
    }

    #[inline]
    pub fn square(&self, pos: Position) -> Square {
        self.board[pos.row() as usize][pos.col() as usize]
    }

    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.square(pos).piece()
    }

    #[inline]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.square(pos).is_empty()
    }

    #[inline]
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.board[pos.row() as usize][pos.col() as usize] = square;
    }

    /// Forward direction of any piece of `color` in this game.
    #[inline]
    pub fn direction_of(&self, color: Color) -> Direction {
        if color == self.side_to_move {
            self.direction
        } else {
            self.direction.opposite()
        }
    }

    /// Positions of all pieces of `color`, row-major.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| match self.square(pos) {
            Square::Occupied(piece) if piece.color == color => Some((pos, piece)),
            _ => None,
        })
    }

    /// Piece count of `color`; kings and men count the same.
    #[inline]
    pub fn piece_count(&self, color: Color) -> usize {
        self.board
            .iter()
            .flatten()
            .filter(|square| square.is_color(color))
            .count()
    }

    /// True once either side has lost all its pieces.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.piece_count(Color::Light) == 0 || self.piece_count(Color::Dark) == 0
    }
}
