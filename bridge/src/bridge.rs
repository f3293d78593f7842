use crate::sink::OutputSink;
use crate::subscription::{EventStream, SseSubscription, StreamItem};
use anyhow::Result;
use log::*;
use std::sync::Arc;

/// Connection settings for one bridge instance.
///
/// The endpoint URL and separator are supplied by the caller rather than
/// hard-coded, so a bridge can be pointed at any stream (or at a scripted
/// one in tests).
#[derive(Debug, Clone)]
pub struct Settings {
    pub endpoint_url: String,
    pub separator: String,
}

impl Settings {
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            separator: "\n".to_string(),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

/// Owns one event stream subscription and forwards every payload to a sink.
///
/// Construction opens the subscription; from then on the bridge has a single
/// steady state: subscribed and forwarding. There is no close or unsubscribe
/// operation. Dropping a `Bridge` detaches the forwarding task without
/// aborting it, so the subscription lives until the stream ends or the
/// process exits.
pub struct Bridge {
    _handle: tokio::task::JoinHandle<()>,
}

impl Bridge {
    /// Open an SSE subscription to `settings.endpoint_url` and start
    /// forwarding payloads to `sink`. Each call opens its own independent
    /// connection.
    pub fn establish(settings: &Settings, sink: Arc<dyn OutputSink>) -> Result<Self> {
        let subscription = SseSubscription::open(&settings.endpoint_url)?;
        debug!("Subscribing to event stream at {}", settings.endpoint_url);

        Ok(Self::attach(
            Box::new(subscription),
            sink,
            settings.separator.clone(),
        ))
    }

    /// Start forwarding from an already-open stream. `establish` uses this
    /// with a live subscription; tests use it with a scripted stream.
    pub fn attach(
        stream: Box<dyn EventStream>,
        sink: Arc<dyn OutputSink>,
        separator: String,
    ) -> Self {
        Self {
            _handle: tokio::spawn(forward(stream, sink, separator)),
        }
    }
}

/// Forwarding loop: one append per message, open events are logged only.
async fn forward(mut stream: Box<dyn EventStream>, sink: Arc<dyn OutputSink>, separator: String) {
    while let Some(item) = stream.next_item().await {
        match item {
            StreamItem::Opened => {
                info!("Event stream opened");
            }
            StreamItem::Message(payload) => {
                sink.append(&format!("{payload}{separator}"));
            }
        }
    }

    debug!("Event stream ended");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::time::Duration;

    /// Stream that replays a fixed script of items, then ends.
    struct ScriptedStream {
        items: VecDeque<StreamItem>,
    }

    impl ScriptedStream {
        fn new(items: impl IntoIterator<Item = StreamItem>) -> Self {
            Self {
                items: items.into_iter().collect(),
            }
        }
    }

    #[async_trait]
    impl EventStream for ScriptedStream {
        async fn next_item(&mut self) -> Option<StreamItem> {
            self.items.pop_front()
        }
    }

    fn message(payload: &str) -> StreamItem {
        StreamItem::Message(payload.to_string())
    }

    #[tokio::test]
    async fn test_payloads_appended_in_delivery_order() {
        let sink = Arc::new(MemorySink::new());
        let stream = ScriptedStream::new([
            StreamItem::Opened,
            message("a"),
            message("b"),
            message("c"),
        ]);

        forward(Box::new(stream), sink.clone(), "<br>".to_string()).await;

        assert_eq!(sink.contents(), "a<br>b<br>c<br>");
    }

    #[tokio::test]
    async fn test_open_event_does_not_touch_the_sink() {
        let sink = Arc::new(MemorySink::new());
        let stream = ScriptedStream::new([StreamItem::Opened]);

        forward(Box::new(stream), sink.clone(), "\n".to_string()).await;

        assert_eq!(sink.contents(), "");
    }

    #[tokio::test]
    async fn test_empty_payload_appends_only_the_separator() {
        let sink = Arc::new(MemorySink::new());
        let stream = ScriptedStream::new([message("")]);

        forward(Box::new(stream), sink.clone(), "<br>".to_string()).await;

        assert_eq!(sink.contents(), "<br>");
    }

    #[tokio::test]
    async fn test_existing_sink_content_is_preserved() {
        let sink = Arc::new(MemorySink::new());
        sink.append("existing");

        let stream = ScriptedStream::new([message("a")]);
        forward(Box::new(stream), sink.clone(), "\n".to_string()).await;

        assert_eq!(sink.contents(), "existinga\n");
    }

    #[tokio::test]
    async fn test_attached_bridges_forward_to_independent_sinks() {
        let sink1 = Arc::new(MemorySink::new());
        let sink2 = Arc::new(MemorySink::new());

        let _bridge1 = Bridge::attach(
            Box::new(ScriptedStream::new([message("one")])),
            sink1.clone(),
            "\n".to_string(),
        );
        let _bridge2 = Bridge::attach(
            Box::new(ScriptedStream::new([message("two")])),
            sink2.clone(),
            "\n".to_string(),
        );

        wait_for(|| sink1.contents() == "one\n" && sink2.contents() == "two\n").await;
    }

    async fn wait_for(mut condition: impl FnMut() -> bool) {
        for _ in 0..100 {
            if condition() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("condition not met within timeout");
    }
}
