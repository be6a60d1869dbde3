//! Plain value types shared by the board model, move generation and search.

use std::fmt;

pub use crate::game_state::game_state::GameState;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// Side owning a piece (and side to move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => f.write_str("light"),
            Color::Dark => f.write_str("dark"),
        }
    }
}

/// Piece rank. Men move forward only; kings slide along all four diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Man,
    King,
}

/// Direction in which a side's men advance. `Up` heads toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Row delta of a single forward step.
    #[inline]
    pub const fn row_delta(self) -> i8 {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }

    /// Row on which a man moving this way is promoted.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Direction::Up => 0,
            Direction::Down => (BOARD_SIZE - 1) as u8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, rank: Rank) -> Self {
        Self { color, rank }
    }

    #[inline]
    pub const fn man(color: Color) -> Self {
        Self::new(color, Rank::Man)
    }

    #[inline]
    pub const fn king(color: Color) -> Self {
        Self::new(color, Rank::King)
    }

    #[inline]
    pub const fn promoted(self) -> Self {
        Self::king(self.color)
    }
}

/// Content of one board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Square {
    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Square::Empty => None,
            Square::Occupied(piece) => Some(piece),
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }

    #[inline]
    pub fn is_color(self, color: Color) -> bool {
        matches!(self, Square::Occupied(piece) if piece.color == color)
    }
}

/// On-board coordinate. Both fields are always in `0..BOARD_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Panics when either coordinate is off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!((row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE);
        Self { row, col }
    }

    #[inline]
    pub fn checked(row: i8, col: i8) -> Option<Self> {
        let size = BOARD_SIZE as i8;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Square `steps` diagonal steps away along `(d_row, d_col)`, if on the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8, steps: i8) -> Option<Self> {
        Self::checked(
            self.row as i8 + d_row * steps,
            self.col as i8 + d_col * steps,
        )
    }

    /// Dark squares of the board; the only squares pieces ever stand on.
    #[inline]
    pub const fn is_playable(self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE as u8).flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Position { row, col }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", char::from(b'a' + self.col), self.row + 1)
    }
}

/// Origin and destination of one step, slide or single capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    #[inline]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// Number of diagonal squares travelled.
    #[inline]
    pub fn distance(self) -> u8 {
        self.from.row.abs_diff(self.to.row)
    }

    /// Unit step `(d_row, d_col)` along the line of travel.
    #[inline]
    pub fn unit_step(self) -> (i8, i8) {
        (
            (self.to.row as i8 - self.from.row as i8).signum(),
            (self.to.col as i8 - self.from.col as i8).signum(),
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// How a finished (or interrupted) game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    /// The other side has no pieces or no legal move.
    Winner(Color),
    MaxPlies,
    /// Player input ended before the game was decided.
    Abandoned,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Winner(color) => write!(f, "{color} wins"),
            GameOutcome::MaxPlies => f.write_str("ply limit reached"),
            GameOutcome::Abandoned => f.write_str("game abandoned"),
        }
    }
}
