use proptest::prelude::*;
use tictactoe::{select_and_apply, Board, Outcome, RandomPicker, Symbol, OPPONENT};

fn symbol() -> impl Strategy<Value = Symbol> {
    prop_oneof![Just(Symbol::Cross), Just(Symbol::Naught)]
}

/// Board reached by `moves` alternating random moves from an empty board.
fn random_board(seed: u64, moves: usize) -> Board {
    let mut picker = RandomPicker::seeded(seed);
    let mut board = Board::new();
    let mut symbol = Symbol::Cross;
    for _ in 0..moves {
        if board.evaluate().is_finished() {
            break;
        }
        select_and_apply(&mut board, symbol, &mut picker);
        symbol = symbol.opponent();
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn move_on_empty_cell_changes_only_that_cell(row in 0..3i64, col in 0..3i64, sym in symbol()) {
        let mut board = Board::create_empty();
        prop_assert!(board.apply_move(row, col, sym));
        for r in 0..3usize {
            for c in 0..3usize {
                let expected = if (r as i64, c as i64) == (row, col) { sym } else { Symbol::Empty };
                prop_assert_eq!(board.get(r, c), Some(expected));
            }
        }
    }

    #[test]
    fn second_move_idempotent(seed in any::<u64>(), moves in 0..9usize, row in 0..3i64, col in 0..3i64, sym in symbol()) {
        let mut board = random_board(seed, moves);
        let _ = board.apply_move(row, col, sym);
        let after_first = board;
        prop_assert!(!board.apply_move(row, col, sym.opponent()));
        prop_assert_eq!(board, after_first);
    }

    #[test]
    fn out_of_range_never_mutates(seed in any::<u64>(), moves in 0..9usize, row in any::<i64>(), col in 3..i64::MAX, sym in symbol()) {
        let mut board = random_board(seed, moves);
        let before = board;
        prop_assert!(!board.apply_move(row, col, sym));
        prop_assert!(!board.apply_move(col, row, sym));
        prop_assert!(!board.apply_move(-1 - col, 0, sym));
        prop_assert_eq!(board, before);
    }

    #[test]
    fn evaluate_is_idempotent(seed in any::<u64>(), moves in 0..9usize) {
        let board = random_board(seed, moves);
        prop_assert_eq!(board.evaluate(), board.evaluate());
    }

    #[test]
    fn draw_only_when_full(seed in any::<u64>(), moves in 0..10usize) {
        let board = random_board(seed, moves);
        match board.evaluate() {
            Outcome::Draw => prop_assert!(board.free_cells().is_empty()),
            Outcome::Ongoing => prop_assert!(!board.free_cells().is_empty()),
            Outcome::Won(s) => prop_assert!(!s.is_empty()),
        }
    }

    #[test]
    fn free_cells_match_empty_cells(seed in any::<u64>(), moves in 0..10usize) {
        let board = random_board(seed, moves);
        let free = board.free_cells();
        let empties = board.rows().iter().flatten().filter(|s| s.is_empty()).count();
        prop_assert_eq!(free.len(), empties);
        for (r, c) in free {
            prop_assert_eq!(board.get(r, c), Some(Symbol::Empty));
        }
    }

    #[test]
    fn opponent_fills_exactly_one_free_cell(seed in any::<u64>(), moves in 0..9usize) {
        let mut board = random_board(seed, moves);
        let before = board;
        let free_before = before.free_cells();
        let mut picker = RandomPicker::seeded(seed ^ 0x5eed);
        match select_and_apply(&mut board, OPPONENT, &mut picker) {
            Some(mv) => {
                prop_assert!(free_before.contains(&mv.coord()));
                prop_assert_eq!(board.get(mv.row, mv.col), Some(OPPONENT));
                prop_assert_eq!(board.free_cells().len(), free_before.len() - 1);
            }
            None => {
                prop_assert!(free_before.is_empty());
                prop_assert_eq!(board, before);
            }
        }
    }

    #[test]
    fn snapshot_mutation_leaves_source(seed in any::<u64>(), moves in 0..8usize) {
        let board = random_board(seed, moves);
        let mut copy = board.snapshot();
        let mut picker = RandomPicker::seeded(seed);
        select_and_apply(&mut copy, Symbol::Naught, &mut picker);
        prop_assert_eq!(board, random_board(seed, moves));
    }
}
