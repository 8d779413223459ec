//! Idempotent short URL allocation and lookup service.

use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::{CounterRepository, UrlRepository};
use crate::error::AppError;

/// Counter document key; a single row shared by all allocations.
const COUNTER_KEY: &str = "shortUrl";

/// Service for minting and resolving short codes.
///
/// Creation is idempotent: repeated requests for the same original URL
/// return the existing mapping instead of allocating a new code.
pub struct UrlService {
    urls: Arc<dyn UrlRepository>,
    counters: Arc<dyn CounterRepository>,
}

impl UrlService {
    /// Creates a new URL service.
    pub fn new(urls: Arc<dyn UrlRepository>, counters: Arc<dyn CounterRepository>) -> Self {
        Self { urls, counters }
    }

    /// Returns the mapping for `original_url`, creating it if absent.
    ///
    /// Looks up by original URL first; only a genuinely new URL consumes a
    /// counter value. Two concurrent creators for the same new URL can both
    /// pass the lookup and race to insert; the unique constraint rejects the
    /// loser, which then re-reads and returns the winner's record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn shorten(&self, original_url: String) -> Result<ShortUrl, AppError> {
        if let Some(existing) = self.urls.find_by_original_url(&original_url).await? {
            return Ok(existing);
        }

        let short_code = self.counters.next(COUNTER_KEY).await?;

        match self
            .urls
            .create(NewShortUrl {
                original_url: original_url.clone(),
                short_code,
            })
            .await
        {
            Ok(created) => Ok(created),
            Err(AppError::Conflict { .. }) => {
                // Lost the insert race; the counter value is abandoned and
                // the winner's mapping is returned instead.
                self.urls
                    .find_by_original_url(&original_url)
                    .await?
                    .ok_or_else(|| AppError::internal("server error"))
            }
            Err(e) => Err(e),
        }
    }

    /// Resolves a short code to its mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is not mapped.
    pub async fn resolve(&self, short_code: i64) -> Result<ShortUrl, AppError> {
        self.urls
            .find_by_short_code(short_code)
            .await?
            .ok_or_else(|| AppError::not_found("No short URL found"))
    }
}
