use crate::core::{ai, Board, Move, MovePicker, RandomPicker, Symbol, OPPONENT};

use super::Player;

/// Opponent that plays a uniformly random free cell.
pub struct AiPlayer<P = RandomPicker> {
    symbol: Symbol,
    picker: P,
}

impl AiPlayer<RandomPicker> {
    /// Naught player with a reproducible picker.
    pub fn seeded(seed: u64) -> Self {
        Self::with_picker(OPPONENT, RandomPicker::seeded(seed))
    }

    /// Naught player seeded from the thread-local generator.
    #[cfg(feature = "std")]
    pub fn new() -> Self {
        Self::with_picker(OPPONENT, RandomPicker::from_entropy())
    }
}

impl<P: MovePicker> AiPlayer<P> {
    pub fn with_picker(symbol: Symbol, picker: P) -> Self {
        Self { symbol, picker }
    }
}

impl<P: MovePicker + Send> Player for AiPlayer<P> {
    fn symbol(&self) -> Symbol {
        self.symbol
    }

    fn take_turn(&mut self, board: &mut Board) -> Option<Move> {
        ai::select_and_apply(board, self.symbol, &mut self.picker)
    }
}
