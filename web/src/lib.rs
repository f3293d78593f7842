//! HTTP surface for the greeting stream: a publish endpoint, an SSE
//! subscription endpoint, and a health check.

use log::info;
use service::AppState;
use tokio::net::TcpListener;

pub mod controller;
pub mod router;
pub(crate) mod sse;

/// Bind the interface/port from the configuration and serve until shutdown.
pub async fn init_server(app_state: AppState) -> std::io::Result<()> {
    let listen_addr = format!(
        "{}:{}",
        app_state.config.interface(),
        app_state.config.port
    );
    let listener = TcpListener::bind(&listen_addr).await?;
    info!("Server listening on {listen_addr}");

    serve(listener, app_state).await
}

/// Serve the router on an already-bound listener.
///
/// Split out from [`init_server`] so tests can bind to an ephemeral port.
pub async fn serve(listener: TcpListener, app_state: AppState) -> std::io::Result<()> {
    axum::serve(listener, router::define_routes(app_state)).await
}
