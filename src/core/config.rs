use super::common::Symbol;

pub const BOARD_SIZE: usize = 3;

/// Total number of cells on the board.
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Symbol played by the human side.
pub const HUMAN: Symbol = Symbol::Cross;

/// Symbol played by the automated opponent.
pub const OPPONENT: Symbol = Symbol::Naught;

/// Every winning line as (row, col) triples, in evaluation order:
/// rows top to bottom, columns left to right, main diagonal, anti-diagonal.
pub const LINES: [[(usize, usize); BOARD_SIZE]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];
