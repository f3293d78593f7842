use async_stream::stream;
use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::Stream;
use log::*;
use service::AppState;
use std::convert::Infallible;
use tokio::sync::broadcast::error::RecvError;

/// SSE handler that establishes a long-lived connection carrying greeting
/// payloads. Each subscriber gets its own independent subscription; the
/// stream stays open until the client disconnects.
pub(crate) async fn hello_stream(
    State(app_state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    debug!("Establishing SSE connection");

    let mut greetings = app_state.emitter.subscribe();

    // Payloads arrive from the broadcast channel and are framed as
    // default-typed events, so the data field carries the greeting verbatim.
    let stream = stream! {
        loop {
            match greetings.recv().await {
                Ok(payload) => yield Ok(Event::default().data(payload)),
                Err(RecvError::Lagged(missed)) => {
                    warn!("SSE subscriber fell behind, {missed} greeting(s) skipped");
                }
                Err(RecvError::Closed) => break,
            }
        }

        debug!("SSE connection closed");
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}
