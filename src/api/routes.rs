//! API route configuration for both services.

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{
    create_exercise_handler, create_user_handler, exercise_log_handler, hello_handler,
    list_users_handler, redirect_handler, shorten_url_handler, shortener_health_handler,
    tracker_health_handler,
};
use crate::state::{ShortenerState, TrackerState};

/// Exercise tracker API routes.
///
/// # Endpoints
///
/// - `GET  /users`                 - List all users
/// - `POST /users`                 - Create a user
/// - `POST /users/{id}/exercises`  - Record an exercise
/// - `GET  /users/{id}/logs`       - Query a user's exercise log
/// - `GET  /health`                - Liveness probe
pub fn tracker_api_routes() -> Router<TrackerState> {
    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route("/users/{id}/exercises", post(create_exercise_handler))
        .route("/users/{id}/logs", get(exercise_log_handler))
        .route("/health", get(tracker_health_handler))
}

/// URL shortener API routes.
///
/// # Endpoints
///
/// - `POST /shorturl`         - Create (or fetch) a short URL
/// - `GET  /shorturl/{code}`  - Redirect a short code to its origin
/// - `GET  /hello`            - Boilerplate greeting
/// - `GET  /health`           - Liveness probe
pub fn shortener_api_routes() -> Router<ShortenerState> {
    Router::new()
        .route("/shorturl", post(shorten_url_handler))
        .route("/shorturl/{code}", get(redirect_handler))
        .route("/hello", get(hello_handler))
        .route("/health", get(shortener_health_handler))
}
