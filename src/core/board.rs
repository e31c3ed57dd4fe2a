//! Board state: the 3x3 grid, move validation and outcome evaluation.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::core::common::{MoveError, Outcome, ParseBoardError, Symbol};
use crate::core::config::{BOARD_SIZE, LINES, NUM_CELLS};

/// The 3x3 grid. Cells are only ever written through [`Board::try_move`],
/// which refuses to overwrite a non-empty cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [[Symbol; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an empty board.
    pub const fn new() -> Self {
        Board {
            cells: [[Symbol::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Same as [`Board::new`], named after the game-start operation.
    pub const fn create_empty() -> Self {
        Self::new()
    }

    /// Build a board from explicit rows.
    pub const fn from_rows(cells: [[Symbol; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Board { cells }
    }

    /// Immutable view of the rows.
    pub fn rows(&self) -> &[[Symbol; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Symbol at (row, col), or `None` when the coordinate is off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Symbol> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Place `symbol` at (row, col), reporting why the move was refused.
    ///
    /// Coordinates are signed so that negative input reaches the bounds check
    /// instead of wrapping. Nothing is mutated on error.
    pub fn try_move(&mut self, row: i64, col: i64, symbol: Symbol) -> Result<(), MoveError> {
        let (r, c) = match (checked_index(row), checked_index(col)) {
            (Some(r), Some(c)) => (r, c),
            _ => return Err(MoveError::OutOfBounds { row, col }),
        };
        let cell = &mut self.cells[r][c];
        if !cell.is_empty() {
            return Err(MoveError::Occupied { row: r, col: c });
        }
        *cell = symbol;
        Ok(())
    }

    /// Boolean form of [`Board::try_move`]: `true` if the symbol was placed.
    pub fn apply_move(&mut self, row: i64, col: i64, symbol: Symbol) -> bool {
        self.try_move(row, col, symbol).is_ok()
    }

    /// Coordinates of every empty cell in row-major order.
    pub fn free_cells(&self) -> Vec<(usize, usize)> {
        let mut free = Vec::with_capacity(NUM_CELLS);
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if cell.is_empty() {
                    free.push((r, c));
                }
            }
        }
        free
    }

    /// Returns `true` when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|s| !s.is_empty())
    }

    /// Evaluate the board from scratch.
    ///
    /// Lines are checked in [`LINES`] order and the first complete one wins.
    /// A draw is only reported when no line is complete and the board is full.
    pub fn evaluate(&self) -> Outcome {
        if let Some(symbol) = self.winning_symbol() {
            return Outcome::Won(symbol);
        }
        if self.free_cells().is_empty() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }

    /// Independent copy for rendering; mutating it never touches `self`.
    pub fn snapshot(&self) -> Board {
        *self
    }

    fn winning_symbol(&self) -> Option<Symbol> {
        for [a, b, c] in LINES {
            let first = self.cells[a.0][a.1];
            if !first.is_empty() && first == self.cells[b.0][b.1] && first == self.cells[c.0][c.1] {
                return Some(first);
            }
        }
        None
    }
}

fn checked_index(value: i64) -> Option<usize> {
    usize::try_from(value).ok().filter(|&v| v < BOARD_SIZE)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parse nine glyphs (`.`, `X`, `O`), ignoring whitespace and `/`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [[Symbol::Empty; BOARD_SIZE]; BOARD_SIZE];
        let mut count = 0usize;
        for ch in s.chars() {
            if ch.is_whitespace() || ch == '/' {
                continue;
            }
            let symbol = Symbol::from_glyph(ch).ok_or(ParseBoardError::InvalidGlyph(ch))?;
            if count < NUM_CELLS {
                cells[count / BOARD_SIZE][count % BOARD_SIZE] = symbol;
            }
            count += 1;
        }
        if count != NUM_CELLS {
            return Err(ParseBoardError::WrongCellCount(count));
        }
        Ok(Board { cells })
    }
}

impl From<[[Symbol; BOARD_SIZE]; BOARD_SIZE]> for Board {
    fn from(cells: [[Symbol; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Board::from_rows(cells)
    }
}
