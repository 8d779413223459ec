//! Repository trait for short URL data access.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for long URL / short code mappings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Persists a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the original URL or short code is
    /// already mapped. Concurrent creators for the same new URL race to
    /// insert; the loser receives the conflict and must re-read the winner's
    /// record.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Finds a mapping by its original long URL.
    ///
    /// Used to keep creation idempotent: repeated requests for the same URL
    /// return the existing record instead of allocating a new code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_original_url(&self, url: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Finds a mapping by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_short_code(&self, code: i64) -> Result<Option<ShortUrl>, AppError>;
}
