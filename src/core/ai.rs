// Opponent move selection: a uniformly random pick among the free cells.
// The randomness sits behind `MovePicker` so callers can inject a seeded or
// scripted source.

use crate::core::{
    board::Board,
    common::{Move, Symbol},
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of choices for the opponent.
pub trait MovePicker {
    /// Return an index in `0..candidates`. Only called with `candidates >= 1`.
    fn pick(&mut self, candidates: usize) -> usize;
}

impl<P: MovePicker + ?Sized> MovePicker for &mut P {
    fn pick(&mut self, candidates: usize) -> usize {
        (**self).pick(candidates)
    }
}

impl<P: MovePicker + ?Sized> MovePicker for alloc::boxed::Box<P> {
    fn pick(&mut self, candidates: usize) -> usize {
        (**self).pick(candidates)
    }
}

/// Uniform picker backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomPicker<R = SmallRng> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<SmallRng> {
    /// Reproducible picker for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Picker seeded from the thread-local generator.
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        let mut seed_rng = rand::rng();
        Self::new(SmallRng::from_rng(&mut seed_rng))
    }
}

impl<R: Rng> MovePicker for RandomPicker<R> {
    fn pick(&mut self, candidates: usize) -> usize {
        self.rng.random_range(0..candidates)
    }
}

/// Choose one free cell with `picker`, place `symbol` there and return the move.
///
/// Returns `None` without touching the board when no cell is free.
pub fn select_and_apply<P: MovePicker + ?Sized>(
    board: &mut Board,
    symbol: Symbol,
    picker: &mut P,
) -> Option<Move> {
    let free = board.free_cells();
    if free.is_empty() {
        return None;
    }
    // a picker returning an out-of-range index still lands on a free cell
    let (row, col) = free[picker.pick(free.len()) % free.len()];
    if !board.apply_move(row as i64, col as i64, symbol) {
        log::warn!("free cell ({}, {}) rejected a move", row, col);
        return None;
    }
    Some(Move::new(row, col, symbol))
}
