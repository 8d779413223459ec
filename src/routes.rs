//! Top-level router configuration for both services.
//!
//! # Route Structure
//!
//! - `/api/*`     - REST API (JSON)
//! - `GET /`      - Static landing page
//! - `/public/*`  - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive, required by the freeCodeCamp test harness
//! - **Path normalization** - Trailing slash handling

use axum::Router;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::api;
use crate::api::middleware::tracing;
use crate::state::{ShortenerState, TrackerState};

/// Constructs the exercise tracker router with all routes and middleware.
pub fn tracker_router(state: TrackerState) -> NormalizePath<Router> {
    let router = Router::new()
        .nest("/api", api::routes::tracker_api_routes())
        .route_service("/", ServeFile::new("views/exercise-tracker.html"))
        .nest_service("/public", ServeDir::new("public"))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Constructs the URL shortener router with all routes and middleware.
pub fn shortener_router(state: ShortenerState) -> NormalizePath<Router> {
    let router = Router::new()
        .nest("/api", api::routes::shortener_api_routes())
        .route_service("/", ServeFile::new("views/url-shortener.html"))
        .nest_service("/public", ServeDir::new("public"))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
