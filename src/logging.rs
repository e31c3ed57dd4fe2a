#![cfg(feature = "std")]

//! Minimal stderr logger for the bot binaries.

use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", render(record));
        }
    }

    fn flush(&self) {}
}

/// `[tictactoe LEVEL module] message`, with the crate prefix cut from the target.
fn render(record: &Record) -> String {
    let module = record.target().trim_start_matches("tictactoe::");
    format!("[tictactoe {:<5} {}] {}", record.level(), module, record.args())
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Environment variable holding the log level (`error` .. `trace`, or `off`).
pub const LOG_ENV: &str = "TICTACTOE_LOG";

/// Initialize logging with a level taken from [`LOG_ENV`].
/// Defaults to `info` if the variable is not set or invalid.
pub fn init_logging() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn render_strips_crate_prefix() {
        let line = render(
            &Record::builder()
                .level(Level::Info)
                .target("tictactoe::session")
                .args(format_args!("chat 7: new game"))
                .build(),
        );
        assert_eq!(line, "[tictactoe INFO  session] chat 7: new game");

        let line = render(
            &Record::builder()
                .level(Level::Warn)
                .target("sim")
                .args(format_args!("done"))
                .build(),
        );
        assert_eq!(line, "[tictactoe WARN  sim] done");
    }
}
