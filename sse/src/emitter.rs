use log::*;
use tokio::sync::broadcast;

/// Number of payloads a slow subscriber may fall behind before the channel
/// starts discarding its oldest entries.
const CHANNEL_CAPACITY: usize = 256;

/// Send side of the greeting stream.
///
/// Wraps a broadcast channel so that multiple downstream SSE connections can
/// each receive every payload published after they subscribed. Cloning an
/// `Emitter` shares the same underlying channel.
#[derive(Clone)]
pub struct Emitter {
    sender: broadcast::Sender<String>,
}

impl Emitter {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Publish a payload to all current subscribers.
    ///
    /// Returns the number of subscribers the payload was delivered to. A
    /// return of 0 means nobody was connected and the payload was dropped;
    /// callers decide whether that warrants a warning.
    pub fn publish(&self, payload: String) -> usize {
        match self.sender.send(payload) {
            Ok(delivered) => {
                debug!("Greeting delivered to {delivered} subscriber(s)");
                delivered
            }
            Err(_) => 0,
        }
    }

    /// True when at least one subscriber is currently connected.
    pub fn has_subscribers(&self) -> bool {
        self.sender.receiver_count() > 0
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Hand out an independent receiver. The receiver sees every payload
    /// published after this call, in publish order.
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.sender.subscribe()
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}
