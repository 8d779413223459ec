//! Short URL entity for the URL shortener.

/// A long URL / short code mapping.
///
/// `original_url` is unique; `short_code` is unique and equals the counter
/// value at creation time. Created once per distinct original URL.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ShortUrl {
    pub original_url: String,
    pub short_code: i64,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(original_url: String, short_code: i64) -> Self {
        Self {
            original_url,
            short_code,
        }
    }
}

/// Input data for persisting a new mapping.
#[derive(Debug, Clone)]
pub struct NewShortUrl {
    pub original_url: String,
    pub short_code: i64,
}
