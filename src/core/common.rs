//! Common types for tic-tac-toe: cell symbols, moves, outcomes and errors.

use core::fmt;

/// Content of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Symbol {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// The human side.
    Cross,
    /// The automated opponent.
    Naught,
}

impl Symbol {
    /// Glyph used when rendering boards and keyboard buttons.
    pub const fn glyph(self) -> char {
        match self {
            Symbol::Empty => '.',
            Symbol::Cross => 'X',
            Symbol::Naught => 'O',
        }
    }

    /// Parse a single cell glyph. `0` is accepted as a Naught.
    pub fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Symbol::Empty),
            'X' | 'x' => Some(Symbol::Cross),
            'O' | 'o' | '0' => Some(Symbol::Naught),
            _ => None,
        }
    }

    /// The other player's symbol. `Empty` has no opponent and maps to itself.
    pub const fn opponent(self) -> Self {
        match self {
            Symbol::Cross => Symbol::Naught,
            Symbol::Naught => Symbol::Cross,
            Symbol::Empty => Symbol::Empty,
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Symbol::Empty)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A placed symbol at a board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub symbol: Symbol,
}

impl Move {
    pub const fn new(row: usize, col: usize, symbol: Symbol) -> Self {
        Self { row, col, symbol }
    }

    pub const fn coord(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

/// Evaluated status of a board. Recomputed on demand, never stored by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Moves remain and nobody has completed a line.
    Ongoing,
    /// The carried symbol completed a line.
    Won(Symbol),
    /// The board is full and no line is complete.
    Draw,
}

impl Outcome {
    pub const fn is_finished(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    pub const fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    pub const fn winner(&self) -> Option<Symbol> {
        match self {
            Outcome::Won(symbol) => Some(*symbol),
            _ => None,
        }
    }
}

/// Why a move was rejected by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Row or column outside `0..BOARD_SIZE`.
    OutOfBounds { row: i64, col: i64 },
    /// Target cell already holds a symbol.
    Occupied { row: usize, col: usize },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds { row, col } => {
                write!(f, "Cell ({}, {}) is outside the board", row, col)
            }
            MoveError::Occupied { row, col } => {
                write!(f, "Cell ({}, {}) is already taken", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}

/// Errors returned when parsing a board from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseBoardError {
    /// A character that is neither a cell glyph nor a separator.
    InvalidGlyph(char),
    /// Number of cell glyphs found, when it is not exactly nine.
    WrongCellCount(usize),
}

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBoardError::InvalidGlyph(ch) => write!(f, "Invalid cell glyph '{}'", ch),
            ParseBoardError::WrongCellCount(n) => {
                write!(f, "Expected 9 cells, found {}", n)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseBoardError {}
