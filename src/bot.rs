#![cfg(feature = "std")]

use crate::{protocol::Outbound, session::SessionManager, transport::ChatTransport};

/// Pumps chat events from a transport through the session manager.
pub struct BotNode<T: ChatTransport> {
    sessions: SessionManager,
    transport: T,
    handled: usize,
}

impl<T: ChatTransport> BotNode<T> {
    pub fn new(sessions: SessionManager, transport: T) -> Self {
        Self {
            sessions,
            transport,
            handled: 0,
        }
    }

    /// Serve until the transport stops delivering events.
    ///
    /// A failed `recv` is the chat side disconnecting and ends the loop
    /// normally; a failed `send` is returned as an error.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let msg = match self.transport.recv().await {
                Ok(msg) => msg,
                Err(e) => {
                    log::info!("[BotNode] transport closed: {}", e);
                    break;
                }
            };
            log::debug!("[BotNode] inbound {:?}", msg);
            let replies: Vec<Outbound> = self.sessions.handle(msg);
            self.handled += 1;
            for reply in replies {
                self.transport.send(reply).await?;
            }
        }
        Ok(())
    }

    /// Number of inbound events processed so far.
    pub fn handled(&self) -> usize {
        self.handled
    }
}
