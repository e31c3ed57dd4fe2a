#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod core;
mod player;
#[cfg(feature = "std")]
mod bot;
#[cfg(feature = "std")]
mod bot_config;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod protocol;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
pub mod transport;

pub use crate::core::*;
pub use player::*;
#[cfg(feature = "std")]
pub use bot::BotNode;
#[cfg(feature = "std")]
pub use bot_config::{BotConfig, SEED_ENV};
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
#[cfg(feature = "std")]
pub use protocol::{ChatId, Inbound, Keyboard, Outbound};
#[cfg(feature = "std")]
pub use session::{GameSession, Phase, SessionManager, TurnReport};
