use tictactoe::{
    select_and_apply, AiPlayer, Board, Move, MovePicker, Player, RandomPicker, Symbol, OPPONENT,
};

/// Always answers with the same index.
struct Fixed(usize);

impl MovePicker for Fixed {
    fn pick(&mut self, _candidates: usize) -> usize {
        self.0
    }
}

/// Always picks the last candidate.
struct Last;

impl MovePicker for Last {
    fn pick(&mut self, candidates: usize) -> usize {
        candidates - 1
    }
}

#[test]
fn test_full_board_gives_no_move() {
    let mut board: Board = "XOX XXO OXO".parse().unwrap();
    let before = board;
    assert_eq!(select_and_apply(&mut board, OPPONENT, &mut Last), None);
    assert_eq!(board, before);
}

#[test]
fn test_single_free_cell_filled_regardless_of_picker() {
    let start: Board = "XOX XX. OXO".parse().unwrap();
    let mut pickers: Vec<Box<dyn MovePicker>> = vec![
        Box::new(Fixed(0)),
        Box::new(Fixed(usize::MAX)),
        Box::new(Last),
        Box::new(RandomPicker::seeded(7)),
    ];
    for picker in pickers.iter_mut() {
        let mut board = start;
        let mv = select_and_apply(&mut board, Symbol::Naught, picker);
        assert_eq!(mv, Some(Move::new(1, 2, Symbol::Naught)));
        assert!(board.is_full());
    }
}

#[test]
fn test_stub_picker_controls_choice() {
    let mut board = Board::new();
    assert_eq!(
        select_and_apply(&mut board, Symbol::Naught, &mut Fixed(0)),
        Some(Move::new(0, 0, Symbol::Naught))
    );
    assert_eq!(
        select_and_apply(&mut board, Symbol::Cross, &mut Last),
        Some(Move::new(2, 2, Symbol::Cross))
    );
    assert_eq!(
        select_and_apply(&mut board, Symbol::Naught, &mut Fixed(0)),
        Some(Move::new(0, 1, Symbol::Naught))
    );
}

#[test]
fn test_seeded_picker_is_reproducible() {
    let play = |seed| {
        let mut picker = RandomPicker::seeded(seed);
        let mut board = Board::new();
        let mut moves = Vec::new();
        while let Some(mv) = select_and_apply(&mut board, Symbol::Naught, &mut picker) {
            moves.push(mv.coord());
        }
        moves
    };
    let first = play(42);
    assert_eq!(first.len(), 9);
    assert_eq!(first, play(42));
}

#[test]
fn test_random_picks_cover_every_cell() {
    let mut picker = RandomPicker::seeded(2024);
    let mut counts = [[0u32; 3]; 3];
    for _ in 0..9000 {
        let mut board = Board::new();
        let mv = select_and_apply(&mut board, Symbol::Naught, &mut picker).unwrap();
        counts[mv.row][mv.col] += 1;
    }
    for row in counts {
        for n in row {
            assert!((600..1400).contains(&n), "skewed pick count {}", n);
        }
    }
}

#[test]
fn test_ai_player_moves_on_free_cell() {
    let mut ai = AiPlayer::seeded(3);
    assert_eq!(ai.symbol(), Symbol::Naught);

    let mut board = Board::new();
    for _ in 0..4 {
        let mv = ai.take_turn(&mut board).unwrap();
        assert_eq!(board.get(mv.row, mv.col), Some(Symbol::Naught));
    }
    assert_eq!(board.free_cells().len(), 5);
}

#[test]
fn test_ai_player_on_full_board() {
    let mut ai = AiPlayer::with_picker(Symbol::Cross, Last);
    let mut board: Board = "XOX XXO OXO".parse().unwrap();
    assert_eq!(ai.take_turn(&mut board), None);
}
