//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness probe.
/// The dataset is loaded before the server starts, so once we answer at all
/// we are ready to serve.
pub async fn readiness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// Full health status with component details. The classifier is an optional
/// dependency; a missing or unreachable classifier degrades but does not
/// fail the service.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let classifier_status = match &state.classifier {
        Some(classifier) => match classifier.health_check().await {
            Ok(()) => "ok",
            Err(_) => "unavailable",
        },
        None => "disabled",
    };

    let status = if classifier_status == "unavailable" {
        "degraded"
    } else {
        "healthy"
    };

    Json(HealthResponse {
        status: status.to_string(),
        dataset: "ok".to_string(),
        classifier: classifier_status.to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
