use crate::controller::{greeting_controller, health_check_controller};
use crate::sse;
use axum::{routing::get, Router};
use service::AppState;

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(greeting_routes(app_state))
}

/// Routes for publishing to and subscribing to the greeting stream
fn greeting_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/hello", get(sse::handler::hello_stream))
        .route("/say/:something", get(greeting_controller::say))
        .with_state(app_state)
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_check_controller::health_check))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use clap::Parser;
    use http_body_util::BodyExt;
    use service::config::Config;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        AppState::new(Config::parse_from(["web"]))
    }

    #[tokio::test]
    async fn health_endpoint_returns_ok() {
        let app = define_routes(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"healthy");
    }

    #[tokio::test]
    async fn say_endpoint_echoes_prefixed_message() {
        let app = define_routes(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/say/greetings")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body_str = std::str::from_utf8(&body).unwrap();
        assert!(
            body_str.starts_with("Message ["),
            "Expected timestamp prefix, got: {body_str}"
        );
        assert!(
            body_str.ends_with("] : greetings"),
            "Expected echoed text, got: {body_str}"
        );
    }

    #[tokio::test]
    async fn hello_endpoint_responds_with_event_stream() {
        let app = define_routes(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/hello")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok()),
            Some("text/event-stream")
        );
    }

    #[tokio::test]
    async fn unknown_route_returns_not_found() {
        let app = define_routes(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/goodbye")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
