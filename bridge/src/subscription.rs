use anyhow::Result;
use async_trait::async_trait;
use eventsource_client::{self as es, Client};
use futures_util::stream::{BoxStream, StreamExt};
use log::*;

/// Items surfaced by an event stream subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamItem {
    /// The underlying connection was established.
    Opened,
    /// A message event arrived; carries the event's data field verbatim.
    Message(String),
}

/// One-way inbound event stream. The production implementation is
/// [`SseSubscription`]; tests substitute a scripted stream that synthesizes
/// open and message items on demand.
#[async_trait]
pub trait EventStream: Send {
    /// Next item, or `None` once the stream has ended for good.
    async fn next_item(&mut self) -> Option<StreamItem>;
}

/// Live SSE subscription over HTTP.
///
/// Only the `data` field of each event is surfaced; event names, ids and
/// keep-alive comments are ignored. Transport errors are logged and the
/// client's automatic reconnection takes over.
pub struct SseSubscription {
    endpoint_url: String,
    stream: BoxStream<'static, std::result::Result<es::SSE, es::Error>>,
}

impl SseSubscription {
    /// Open a subscription to the given endpoint. Fails only on a malformed
    /// URL; connection establishment happens lazily on the first poll.
    pub fn open(endpoint_url: &str) -> Result<Self> {
        let client = es::ClientBuilder::for_url(endpoint_url)?.build();

        Ok(Self {
            endpoint_url: endpoint_url.to_string(),
            stream: client.stream(),
        })
    }
}

#[async_trait]
impl EventStream for SseSubscription {
    async fn next_item(&mut self) -> Option<StreamItem> {
        loop {
            match self.stream.next().await {
                Some(Ok(es::SSE::Connected(_))) => {
                    return Some(StreamItem::Opened);
                }
                Some(Ok(es::SSE::Event(event))) => {
                    return Some(StreamItem::Message(event.data));
                }
                Some(Ok(es::SSE::Comment(_))) => {
                    // Ignore comments (keep-alive)
                }
                Some(Err(e)) => {
                    warn!("SSE error for {}: {}", self.endpoint_url, e);
                }
                None => {
                    debug!("SSE stream ended for {}", self.endpoint_url);
                    return None;
                }
            }
        }
    }
}
