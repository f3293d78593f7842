use axum::extract::{Path, State};
use axum::response::IntoResponse;
use chrono::Local;
use log::*;
use service::AppState;

/// GET publish a timestamped greeting onto the stream.
///
/// The text is prefixed with the local time, pushed to every connected
/// subscriber, and echoed back to the caller as plain text. When no
/// subscriber is connected the payload is dropped.
pub(crate) async fn say(
    State(app_state): State<AppState>,
    Path(something): Path<String>,
) -> impl IntoResponse {
    let message = format!(
        "Message [{}] : {}",
        Local::now().format("%H:%M:%S%.3f"),
        something
    );

    if app_state.emitter.has_subscribers() {
        app_state.emitter.publish(message.clone());
        debug!("A message [{something}] sent to the greeting stream");
    } else {
        warn!("downstream subscriber not ready!");
    }

    message
}
