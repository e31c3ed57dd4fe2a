#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{
    init_logging,
    session::{BOT_WON, DRAW, GAME_CLOSED, HUMAN_WON},
    transport::{console::ConsoleTransport, in_memory::InMemoryClient, in_memory::InMemoryTransport},
    BotConfig, BotNode, ChatId, Inbound, Outbound,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Chat with the bot in this terminal. Type /start, then "row col" to move.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Let a scripted random client play the bot over an in-memory chat.
    Local {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1)]
        games: u32,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed } => {
            let config = BotConfig::from_env()?.with_seed(seed);
            if let Some(s) = config.seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            println!("Type /start to begin, /help for help. Ctrl-D quits.");
            let mut node = BotNode::new(config.session_manager(), ConsoleTransport::new());
            node.run().await?;
        }
        Commands::Local { seed, games } => {
            let config = BotConfig::from_env()?.with_seed(seed);
            println!("Starting local game(s) against the bot...");
            if let Some(s) = config.seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut client_rng = match config.seed {
                Some(s) => SmallRng::seed_from_u64(s.wrapping_add(1)),
                None => {
                    let mut seed_rng = rand::rng();
                    SmallRng::from_rng(&mut seed_rng)
                }
            };

            let (bot_side, client) = InMemoryTransport::pair();
            let mut node = BotNode::new(config.session_manager(), bot_side);
            let bot_future = async move { node.run().await };
            // the client is dropped when it finishes, which closes the bot's channel
            let client_future = async move { run_client(client, &mut client_rng, games).await };

            let ((), ()) = tokio::try_join!(bot_future, client_future)?;
        }
    }
    Ok(())
}

/// Play `games` games as a user pressing random free buttons.
#[cfg(feature = "std")]
async fn run_client(mut client: InMemoryClient, rng: &mut SmallRng, games: u32) -> anyhow::Result<()> {
    let chat = ChatId(1);
    for game in 1..=games {
        client.push(Inbound::command(chat, "start"))?;
        let mut reply = client.pop().await?;
        loop {
            let text = reply.text().to_string();
            if [DRAW, HUMAN_WON, BOT_WON].contains(&text.as_str()) {
                println!("Game {}: {}", game, text);
                print_board(&reply);
                client.push(Inbound::cell(chat, 0, 0))?;
                let closed = client.pop().await?;
                if closed.text() != GAME_CLOSED {
                    return Err(anyhow::anyhow!("unexpected reply after game end: {:?}", closed));
                }
                break;
            }
            let free: Vec<String> = reply
                .keyboard()
                .ok_or_else(|| anyhow::anyhow!("reply without keyboard: {:?}", reply))?
                .buttons()
                .filter(|b| b.label == ".")
                .map(|b| b.data.clone())
                .collect();
            if free.is_empty() {
                return Err(anyhow::anyhow!("no free cell but game not over"));
            }
            let data = free[rng.random_range(0..free.len())].clone();
            client.push(Inbound::Callback { chat, data })?;
            reply = client.pop().await?;
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn print_board(reply: &Outbound) {
    if let Some(kb) = reply.keyboard() {
        for row in &kb.rows {
            let line: String = row.iter().map(|b| b.label.as_str()).collect();
            println!("  {}", line);
        }
    }
}
