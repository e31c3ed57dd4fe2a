//! Player trait and implementations
//!
//! A Player is responsible for:
//! - Knowing which symbol it places
//! - Taking one turn on a board it is handed

use crate::core::{Board, Move, Symbol};

/// Interface implemented by automated players.
pub trait Player: Send {
    /// Symbol this player places.
    fn symbol(&self) -> Symbol;

    /// Make exactly one move on `board`, or return `None` if no move is possible.
    fn take_turn(&mut self, board: &mut Board) -> Option<Move>;
}

impl<T: Player + ?Sized> Player for alloc::boxed::Box<T> {
    fn symbol(&self) -> Symbol {
        (**self).symbol()
    }

    fn take_turn(&mut self, board: &mut Board) -> Option<Move> {
        (**self).take_turn(board)
    }
}

// Re-export implementations
mod ai;
pub use ai::AiPlayer;
