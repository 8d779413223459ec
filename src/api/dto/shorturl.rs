//! DTOs for the URL shortening endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::ShortUrl;

/// Request to create (or fetch) a short URL.
#[derive(Debug, Deserialize)]
pub struct ShortenUrlRequest {
    pub url: String,
}

/// Response for `POST /api/shorturl`.
#[derive(Debug, Serialize)]
pub struct ShortenUrlResponse {
    pub original_url: String,
    pub short_url: i64,
}

impl From<ShortUrl> for ShortenUrlResponse {
    fn from(short: ShortUrl) -> Self {
        Self {
            original_url: short.original_url,
            short_url: short.short_code,
        }
    }
}
