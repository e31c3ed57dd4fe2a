#![cfg(feature = "std")]

//! Messages exchanged between a chat transport and the session manager.

use serde::{Deserialize, Serialize};

use crate::core::{Board, BOARD_SIZE};

/// Identifier of one chat conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChatId(pub i64);

/// Events delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inbound {
    /// A slash command such as `/start`. `name` excludes the leading slash.
    Command { chat: ChatId, name: String },
    /// An inline keyboard button press carrying the button's data.
    Callback { chat: ChatId, data: String },
}

impl Inbound {
    pub fn chat(&self) -> ChatId {
        match self {
            Inbound::Command { chat, .. } | Inbound::Callback { chat, .. } => *chat,
        }
    }

    pub fn command(chat: ChatId, name: impl Into<String>) -> Self {
        Inbound::Command {
            chat,
            name: name.into(),
        }
    }

    /// Button press for the cell at (row, col).
    pub fn cell(chat: ChatId, row: usize, col: usize) -> Self {
        Inbound::Callback {
            chat,
            data: callback_data(row, col),
        }
    }
}

/// Messages sent back through the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outbound {
    /// Show (or replace) the chat's game message.
    Reply {
        chat: ChatId,
        text: String,
        keyboard: Option<Keyboard>,
    },
    /// Popup answering a button press; the game message stays as it was.
    Alert { chat: ChatId, text: String },
}

impl Outbound {
    pub fn chat(&self) -> ChatId {
        match self {
            Outbound::Reply { chat, .. } | Outbound::Alert { chat, .. } => *chat,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Outbound::Reply { text, .. } | Outbound::Alert { text, .. } => text,
        }
    }

    pub fn keyboard(&self) -> Option<&Keyboard> {
        match self {
            Outbound::Reply { keyboard, .. } => keyboard.as_ref(),
            Outbound::Alert { .. } => None,
        }
    }
}

/// One inline keyboard button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub label: String,
    pub data: String,
}

/// 3x3 inline keyboard mirroring the board: each button shows the cell glyph
/// and carries its coordinates as callback data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

impl Keyboard {
    pub fn for_board(board: &Board) -> Self {
        let rows = board
            .rows()
            .iter()
            .enumerate()
            .map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .map(|(c, cell)| Button {
                        label: cell.glyph().to_string(),
                        data: callback_data(r, c),
                    })
                    .collect()
            })
            .collect();
        Keyboard { rows }
    }

    /// Buttons in row-major order.
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }
}

/// Callback data for the cell at (row, col), e.g. `"12"`.
pub fn callback_data(row: usize, col: usize) -> String {
    format!("{}{}", row, col)
}

/// Decode callback data produced by [`callback_data`].
pub fn parse_callback(data: &str) -> Option<(usize, usize)> {
    let mut digits = data.chars().map(|ch| ch.to_digit(10));
    let (row, col) = match (digits.next(), digits.next(), digits.next()) {
        (Some(Some(r)), Some(Some(c)), None) => (r as usize, c as usize),
        _ => return None,
    };
    if row < BOARD_SIZE && col < BOARD_SIZE {
        Some((row, col))
    } else {
        None
    }
}
