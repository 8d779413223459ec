//! Handler for the hello endpoint kept from the original boilerplate.

use axum::Json;
use serde_json::{Value, json};

/// Returns the boilerplate greeting.
///
/// # Endpoint
///
/// `GET /api/hello`
pub async fn hello_handler() -> Json<Value> {
    Json(json!({ "greeting": "hello API" }))
}
