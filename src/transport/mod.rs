use crate::protocol::{Inbound, Outbound};

/// Chat connectivity seen from the bot: a stream of inbound events and a sink
/// for replies. `recv` failing means the chat side has gone away.
#[async_trait::async_trait]
pub trait ChatTransport: Send {
    async fn recv(&mut self) -> anyhow::Result<Inbound>;
    async fn send(&mut self, msg: Outbound) -> anyhow::Result<()>;
}

#[async_trait::async_trait]
impl<T: ChatTransport + ?Sized> ChatTransport for Box<T> {
    async fn recv(&mut self) -> anyhow::Result<Inbound> {
        (**self).recv().await
    }

    async fn send(&mut self, msg: Outbound) -> anyhow::Result<()> {
        (**self).send(msg).await
    }
}

pub mod console;
pub mod in_memory;
