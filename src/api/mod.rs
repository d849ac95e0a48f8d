//! Reliefboard HTTP API
//!
//! HTTP layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - The dashboard page
//!
//! ## Data
//! - `GET /api/v1/overview` - Dataset summary
//! - `GET /api/v1/charts/genres` - Genre distribution donut
//! - `GET /api/v1/charts/categories?genre=` - Category distribution bar
//!
//! ## Callbacks
//! - `POST /api/v1/tokenize` - Tokenize a message and echo the tokens
//! - `POST /api/v1/classify` - Classify a message into categories
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{AppState, StaticFigures};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/overview", get(routes::overview::get_overview))
        .route("/charts/genres", get(routes::charts::genre_chart))
        .route("/charts/categories", get(routes::charts::category_chart))
        .route("/tokenize", post(routes::tokenize::tokenize_message))
        .route("/classify", post(routes::classify::classify_message));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::page::index))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Reliefboard listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Reliefboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, MessageRecord};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn record(id: i64, genre: &str, flags: &[u8]) -> MessageRecord {
        MessageRecord {
            id,
            message: format!("message {}", id),
            genre: genre.to_string(),
            flags: flags.to_vec(),
        }
    }

    fn create_test_app() -> Router {
        let dataset = Arc::new(Dataset::new(
            vec!["water".to_string(), "shelter".to_string()],
            vec![
                record(1, "direct", &[1, 0]),
                record(2, "direct", &[0, 1]),
                record(3, "news", &[1, 0]),
            ],
        ));
        let state = AppState::new(dataset, ApiConfig::default());
        build_router(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_page_served() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        for uri in ["/health/live", "/health/ready", "/health"] {
            let app = create_test_app();
            let response = app
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_overview() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/overview")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["samples"], 3);
        assert_eq!(json["category_count"], 2);
        assert_eq!(json["genres"][0], "direct");
    }

    #[tokio::test]
    async fn test_genre_chart() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/charts/genres")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["labels"][0], "direct");
        assert_eq!(json["values"][0], 2);
        assert_eq!(json["hole"], 0.25);
    }

    #[tokio::test]
    async fn test_category_chart_with_genre_param() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/charts/categories?genre=news")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["labels"][0], "Water");
        assert_eq!(json["values"][0], 1);
        assert_eq!(json["values"][1], 0);
    }

    #[tokio::test]
    async fn test_tokenize() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/tokenize")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"message": "We need Water!"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["echo"], "we, need, water");
    }

    #[tokio::test]
    async fn test_tokenize_empty_message() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/tokenize")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"message": ""}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_classify_demo_fallback() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/classify")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"message": "shelter collapsed"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["source"], "demo");
        assert_eq!(json["figure"]["orientation"], "horizontal");
        assert_eq!(json["figure"]["labels"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_classify_invalid_json() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/classify")
                    .header("Content-Type", "application/json")
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
