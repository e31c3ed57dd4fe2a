use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::task::yield_now;

use crate::protocol::{Inbound, Outbound};
use crate::transport::ChatTransport;

type Queue<T> = Arc<Mutex<VecDeque<T>>>;

/// One end of an in-process channel pair.
pub struct Endpoint<Tx, Rx> {
    recv_queue: Queue<Rx>,
    send_queue: Queue<Tx>,
}

/// Bot side of the pair.
pub type InMemoryTransport = Endpoint<Outbound, Inbound>;

/// Chat user side of the pair.
pub type InMemoryClient = Endpoint<Inbound, Outbound>;

impl InMemoryTransport {
    pub fn pair() -> (InMemoryTransport, InMemoryClient) {
        let inbound = Arc::new(Mutex::new(VecDeque::new()));
        let outbound = Arc::new(Mutex::new(VecDeque::new()));
        (
            Endpoint {
                recv_queue: inbound.clone(),
                send_queue: outbound.clone(),
            },
            Endpoint {
                recv_queue: outbound,
                send_queue: inbound,
            },
        )
    }
}

impl<Tx, Rx> Endpoint<Tx, Rx> {
    pub fn push(&mut self, msg: Tx) -> anyhow::Result<()> {
        let mut queue = self
            .send_queue
            .lock()
            .map_err(|_| anyhow::anyhow!("Queue lock poisoned"))?;
        queue.push_back(msg);
        Ok(())
    }

    pub async fn pop(&mut self) -> anyhow::Result<Rx> {
        loop {
            if let Some(msg) = {
                let mut queue = self
                    .recv_queue
                    .lock()
                    .map_err(|_| anyhow::anyhow!("Queue lock poisoned"))?;
                queue.pop_front()
            } {
                return Ok(msg);
            }
            if Arc::strong_count(&self.recv_queue) == 1 {
                return Err(anyhow::anyhow!("Channel closed"));
            }
            yield_now().await;
        }
    }
}

#[async_trait::async_trait]
impl ChatTransport for InMemoryTransport {
    async fn recv(&mut self) -> anyhow::Result<Inbound> {
        self.pop().await
    }

    async fn send(&mut self, msg: Outbound) -> anyhow::Result<()> {
        self.push(msg)
    }
}
