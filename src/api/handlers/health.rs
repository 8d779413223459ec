//! Handlers for the health check endpoints.

use axum::Json;

use crate::api::dto::health::HealthResponse;

fn health(service: &'static str) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Liveness probe for the exercise tracker.
///
/// # Endpoint
///
/// `GET /api/health`
pub async fn tracker_health_handler() -> Json<HealthResponse> {
    health("exercise-tracker")
}

/// Liveness probe for the URL shortener.
///
/// # Endpoint
///
/// `GET /api/health`
pub async fn shortener_health_handler() -> Json<HealthResponse> {
    health("url-shortener")
}
