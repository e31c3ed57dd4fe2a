use tictactoe::{AiPlayer, Board, Outcome, Player, Symbol};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    tictactoe::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <games>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: u32 = args[2].parse()?;

    let mut cross = AiPlayer::with_picker(Symbol::Cross, tictactoe::RandomPicker::seeded(seed));
    let mut naught = AiPlayer::seeded(seed.wrapping_add(1));

    let (mut cross_wins, mut naught_wins, mut draws) = (0u32, 0u32, 0u32);
    for _ in 0..games {
        match play_one(&mut cross, &mut naught)? {
            Outcome::Won(Symbol::Cross) => cross_wins += 1,
            Outcome::Won(_) => naught_wins += 1,
            _ => draws += 1,
        }
    }

    let result = json!({
        "games": games,
        "cross_wins": cross_wins,
        "naught_wins": naught_wins,
        "draws": draws,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

/// Alternate moves, Cross first, until the board is decided.
fn play_one<'a>(first: &'a mut dyn Player, second: &'a mut dyn Player) -> anyhow::Result<Outcome> {
    let mut board = Board::create_empty();
    let players = [first, second];
    let mut turn = 0usize;
    loop {
        let outcome = board.evaluate();
        if outcome.is_finished() {
            log::debug!("game over after {} moves: {:?}\n{}", turn, outcome, board);
            return Ok(outcome);
        }
        players[turn % 2]
            .take_turn(&mut board)
            .ok_or_else(|| anyhow::anyhow!("no move on an undecided board"))?;
        turn += 1;
    }
}
