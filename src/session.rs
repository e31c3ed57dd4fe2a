#![cfg(feature = "std")]

//! Per-chat game sessions and the manager that routes chat events to them.

use std::collections::HashMap;

use crate::{
    core::{Board, Move, MoveError, Outcome, Symbol, HUMAN},
    player::{AiPlayer, Player},
    protocol::{parse_callback, ChatId, Inbound, Keyboard, Outbound},
};

pub const GREETING: &str = "Tic-tac-toe! You play X. Your move!";
pub const YOUR_MOVE: &str = "Your move! Put an X on a free cell.";
pub const CELL_TAKEN: &str = "This cell is already taken!";
pub const INVALID_CELL: &str = "That cell is not on the board.";
pub const UNKNOWN_BUTTON: &str = "Unknown button.";
pub const NO_GAME: &str = "No game in progress. Send /start to play.";
pub const UNKNOWN_COMMAND: &str = "Unknown command. Send /start or /help.";
pub const GAME_CLOSED: &str = "Game over! Send /start for a new game.";
pub const HELP: &str = "Send /start to begin a game, then press a free cell to place your X.";
pub const DRAW: &str = "Draw! Press any button to finish.";
pub const HUMAN_WON: &str = "Congratulations, you won! Press any button.";
pub const BOT_WON: &str = "The bot won! Try again.";

/// Where a session is in its conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the human's next move.
    InProgress,
    /// The game ended; the next button press closes the session.
    Finished(Outcome),
}

/// Result of one human move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnReport {
    /// Move refused; board unchanged.
    Rejected(MoveError),
    /// Both sides moved and play continues.
    Continue { opponent_move: Option<Move> },
    /// The game ended on the human's move or the opponent's reply.
    Finished {
        outcome: Outcome,
        opponent_move: Option<Move>,
    },
    /// The game had already ended before this move.
    AlreadyOver(Outcome),
}

/// One game owned by one chat.
pub struct GameSession {
    board: Board,
    human: Symbol,
    opponent: Box<dyn Player>,
    phase: Phase,
}

impl GameSession {
    pub fn new(opponent: Box<dyn Player>) -> Self {
        Self {
            board: Board::create_empty(),
            human: HUMAN,
            opponent,
            phase: Phase::InProgress,
        }
    }

    /// Copy of the current board.
    pub fn board(&self) -> Board {
        self.board.snapshot()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Start over on an empty board with the same opponent.
    pub fn reset(&mut self) {
        self.board = Board::create_empty();
        self.phase = Phase::InProgress;
    }

    /// Apply the human move at (row, col) and, if the game goes on, the
    /// opponent's reply.
    pub fn play(&mut self, row: i64, col: i64) -> TurnReport {
        if let Phase::Finished(outcome) = self.phase {
            return TurnReport::AlreadyOver(outcome);
        }
        if let Err(err) = self.board.try_move(row, col, self.human) {
            return TurnReport::Rejected(err);
        }

        let outcome = self.board.evaluate();
        if outcome.is_finished() {
            self.phase = Phase::Finished(outcome);
            return TurnReport::Finished {
                outcome,
                opponent_move: None,
            };
        }

        let opponent_move = self.opponent.take_turn(&mut self.board);
        let outcome = self.board.evaluate();
        if outcome.is_finished() {
            self.phase = Phase::Finished(outcome);
            TurnReport::Finished {
                outcome,
                opponent_move,
            }
        } else {
            TurnReport::Continue { opponent_move }
        }
    }
}

type OpponentFactory = Box<dyn FnMut() -> Box<dyn Player> + Send>;

/// Holds one [`GameSession`] per chat and turns chat events into replies.
pub struct SessionManager {
    sessions: HashMap<ChatId, GameSession>,
    new_opponent: OpponentFactory,
}

impl SessionManager {
    /// Manager whose opponents are random players seeded from entropy.
    pub fn new() -> Self {
        Self::with_opponents(|| Box::new(AiPlayer::new()))
    }

    /// Manager whose opponents derive their seeds from `seed`, one per game.
    pub fn seeded(seed: u64) -> Self {
        let mut next = seed;
        Self::with_opponents(move || {
            let player = AiPlayer::seeded(next);
            next = next.wrapping_add(1);
            Box::new(player)
        })
    }

    /// Manager that calls `factory` for the opponent of every new game.
    pub fn with_opponents<F>(factory: F) -> Self
    where
        F: FnMut() -> Box<dyn Player> + Send + 'static,
    {
        Self {
            sessions: HashMap::new(),
            new_opponent: Box::new(factory),
        }
    }

    pub fn active_sessions(&self) -> usize {
        self.sessions.len()
    }

    pub fn session(&self, chat: ChatId) -> Option<&GameSession> {
        self.sessions.get(&chat)
    }

    /// Handle one inbound event and return the replies to send.
    pub fn handle(&mut self, msg: Inbound) -> Vec<Outbound> {
        match msg {
            Inbound::Command { chat, name } => self.handle_command(chat, &name),
            Inbound::Callback { chat, data } => self.handle_callback(chat, &data),
        }
    }

    fn handle_command(&mut self, chat: ChatId, name: &str) -> Vec<Outbound> {
        match name.trim_start_matches('/') {
            "start" => {
                let session = GameSession::new((self.new_opponent)());
                let keyboard = Keyboard::for_board(&session.board());
                self.sessions.insert(chat, session);
                log::info!("chat {}: new game", chat.0);
                vec![reply(chat, GREETING, Some(keyboard))]
            }
            "help" => vec![reply(chat, HELP, None)],
            other => {
                log::debug!("chat {}: unknown command {:?}", chat.0, other);
                vec![reply(chat, UNKNOWN_COMMAND, None)]
            }
        }
    }

    fn handle_callback(&mut self, chat: ChatId, data: &str) -> Vec<Outbound> {
        let Some(session) = self.sessions.get_mut(&chat) else {
            return vec![reply(chat, NO_GAME, None)];
        };
        let Some((row, col)) = parse_callback(data) else {
            log::warn!("chat {}: malformed callback data {:?}", chat.0, data);
            return vec![alert(chat, UNKNOWN_BUTTON)];
        };

        let report = session.play(row as i64, col as i64);
        let keyboard = Some(Keyboard::for_board(&session.board()));
        match report {
            TurnReport::Rejected(MoveError::Occupied { .. }) => vec![alert(chat, CELL_TAKEN)],
            TurnReport::Rejected(MoveError::OutOfBounds { .. }) => vec![alert(chat, INVALID_CELL)],
            TurnReport::Continue { opponent_move } => {
                if let Some(mv) = opponent_move {
                    log::debug!("chat {}: opponent played ({}, {})", chat.0, mv.row, mv.col);
                }
                vec![reply(chat, YOUR_MOVE, keyboard)]
            }
            TurnReport::Finished { outcome, .. } => {
                log::info!("chat {}: game finished with {:?}", chat.0, outcome);
                vec![reply(chat, outcome_text(outcome), keyboard)]
            }
            TurnReport::AlreadyOver(outcome) => {
                self.sessions.remove(&chat);
                log::debug!("chat {}: session closed after {:?}", chat.0, outcome);
                vec![reply(chat, GAME_CLOSED, None)]
            }
        }
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Message shown when a game ends with `outcome`.
pub fn outcome_text(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Won(symbol) if symbol == HUMAN => HUMAN_WON,
        Outcome::Won(_) => BOT_WON,
        Outcome::Draw => DRAW,
        Outcome::Ongoing => YOUR_MOVE,
    }
}

fn reply(chat: ChatId, text: &str, keyboard: Option<Keyboard>) -> Outbound {
    Outbound::Reply {
        chat,
        text: text.to_string(),
        keyboard,
    }
}

fn alert(chat: ChatId, text: &str) -> Outbound {
    Outbound::Alert {
        chat,
        text: text.to_string(),
    }
}
