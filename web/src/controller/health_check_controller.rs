use axum::http::StatusCode;
use axum::response::IntoResponse;

/// GET the API router's health status
pub(crate) async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "healthy")
}
