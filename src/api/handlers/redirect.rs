//! Handler for the short URL redirect endpoint.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::ShortenerState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{code}`
///
/// # Behavior
///
/// The path segment is parsed as an integer; parse failures and unknown
/// codes both answer `{"error": "No short URL found"}` and never redirect.
/// On a hit the response is an explicit `302 Found` with the original URL
/// in the `Location` header.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<ShortenerState>,
) -> Result<Response, AppError> {
    let short_code: i64 = code
        .parse()
        .map_err(|_| AppError::not_found("No short URL found"))?;

    let short = state.url_service.resolve(short_code).await?;

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, short.original_url)],
    )
        .into_response())
}
