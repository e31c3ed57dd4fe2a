//! Core tic-tac-toe engine (no_std compatible)
//!
//! This module contains the pure game logic: the board, outcome evaluation
//! and the random opponent. It only needs `alloc` and `rand`.

pub mod ai;
pub mod board;
pub mod common;
pub mod config;

// Re-export commonly used types
pub use ai::{select_and_apply, MovePicker, RandomPicker};
pub use board::Board;
pub use common::{Move, MoveError, Outcome, ParseBoardError, Symbol};
pub use config::*;
