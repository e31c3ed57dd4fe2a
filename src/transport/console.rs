//! Terminal stand-in for a chat client: one conversation over stdin/stdout.

use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin, Stdout};

use crate::protocol::{ChatId, Inbound, Keyboard, Outbound};
use crate::transport::ChatTransport;

/// Chat id used for the single console conversation.
pub const CONSOLE_CHAT: ChatId = ChatId(0);

pub struct ConsoleTransport {
    lines: Lines<BufReader<Stdin>>,
    stdout: Stdout,
}

impl ConsoleTransport {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(io::stdin()).lines(),
            stdout: io::stdout(),
        }
    }
}

impl Default for ConsoleTransport {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a typed line into an inbound event. Commands start with `/`; anything
/// else is treated as a button press, with separators between the row and
/// column digits dropped (`"1 2"`, `"1,2"` and `"12"` all press cell (1, 2)).
pub fn parse_line(line: &str) -> Option<Inbound> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if let Some(name) = line.strip_prefix('/') {
        return Some(Inbound::command(CONSOLE_CHAT, name));
    }
    let data: String = line
        .chars()
        .filter(|ch| !ch.is_whitespace() && *ch != ',')
        .collect();
    Some(Inbound::Callback {
        chat: CONSOLE_CHAT,
        data,
    })
}

/// Text shown in the terminal for one outbound message.
pub fn render(msg: &Outbound) -> String {
    match msg {
        Outbound::Alert { text, .. } => format!("! {}\n", text),
        Outbound::Reply { text, keyboard, .. } => {
            let mut out = format!("{}\n", text);
            if let Some(kb) = keyboard {
                out.push_str(&render_keyboard(kb));
            }
            out
        }
    }
}

fn render_keyboard(kb: &Keyboard) -> String {
    let mut out = String::from("    0   1   2\n");
    for (r, row) in kb.rows.iter().enumerate() {
        let cells: Vec<&str> = row.iter().map(|b| b.label.as_str()).collect();
        out.push_str(&format!("{}   {}\n", r, cells.join(" | ")));
    }
    out
}

#[async_trait::async_trait]
impl ChatTransport for ConsoleTransport {
    async fn recv(&mut self) -> anyhow::Result<Inbound> {
        loop {
            let line = self
                .lines
                .next_line()
                .await?
                .ok_or_else(|| anyhow::anyhow!("Console input closed"))?;
            if let Some(msg) = parse_line(&line) {
                return Ok(msg);
            }
        }
    }

    async fn send(&mut self, msg: Outbound) -> anyhow::Result<()> {
        self.stdout.write_all(render(&msg).as_bytes()).await?;
        self.stdout.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_and_cells() {
        assert_eq!(parse_line("/start"), Some(Inbound::command(CONSOLE_CHAT, "start")));
        assert_eq!(parse_line(" 1 2 "), Some(Inbound::cell(CONSOLE_CHAT, 1, 2)));
        assert_eq!(parse_line("2,0"), Some(Inbound::cell(CONSOLE_CHAT, 2, 0)));
        assert_eq!(parse_line("   "), None);
    }

    #[test]
    fn render_alert_and_board() {
        let alert = Outbound::Alert {
            chat: CONSOLE_CHAT,
            text: "taken".to_string(),
        };
        assert_eq!(render(&alert), "! taken\n");

        let reply = Outbound::Reply {
            chat: CONSOLE_CHAT,
            text: "hi".to_string(),
            keyboard: Some(Keyboard::for_board(&crate::core::Board::new())),
        };
        let text = render(&reply);
        assert!(text.starts_with("hi\n"));
        assert!(text.contains("0   . | . | .\n"));
    }
}
