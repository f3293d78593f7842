//! Native client that bridges a server-sent-events subscription onto a local
//! output target.
//!
//! A [`Bridge`] owns exactly one stream subscription. Every received payload
//! is appended to an [`OutputSink`] followed by a separator; the stream-open
//! event is logged and nothing else. Transport failures are left to the SSE
//! client's built-in reconnection.

pub mod bridge;
pub mod sink;
pub mod subscription;

pub use bridge::{Bridge, Settings};
pub use sink::{MemorySink, OutputSink, StdoutSink};
pub use subscription::{EventStream, SseSubscription, StreamItem};
