//! Handler for the short URL creation endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorturl::{ShortenUrlRequest, ShortenUrlResponse};
use crate::api::extract::FormOrJson;
use crate::error::AppError;
use crate::state::ShortenerState;
use crate::utils::url_validator::parse_hostname;

/// Creates (or fetches) a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Validation
///
/// The submitted value must parse as an http(s) URL with a non-empty
/// hostname, and the hostname must resolve via name lookup. Both failures
/// answer `{"error": "invalid url"}` before any store interaction, so
/// invalid input never consumes a counter value.
///
/// # Idempotence
///
/// Repeated requests for the same URL return the same `short_url`.
///
/// # Response
///
/// ```json
/// { "original_url": "https://www.freecodecamp.org", "short_url": 1 }
/// ```
pub async fn shorten_url_handler(
    State(state): State<ShortenerState>,
    FormOrJson(payload): FormOrJson<ShortenUrlRequest>,
) -> Result<Json<ShortenUrlResponse>, AppError> {
    let hostname =
        parse_hostname(&payload.url).ok_or_else(|| AppError::bad_request("invalid url"))?;

    if !state.resolver.resolve(&hostname).await {
        return Err(AppError::bad_request("invalid url"));
    }

    let short = state.url_service.shorten(payload.url).await?;

    Ok(Json(short.into()))
}
