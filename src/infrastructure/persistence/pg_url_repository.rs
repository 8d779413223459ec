//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// PostgreSQL repository for long URL / short code mappings.
///
/// The `urls.original_url` unique constraint arbitrates concurrent inserts
/// of the same URL; the losing writer surfaces [`AppError::Conflict`].
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let short_url = sqlx::query_as::<_, ShortUrl>(
            r"
            INSERT INTO urls (original_url, short_code)
            VALUES ($1, $2)
            RETURNING original_url, short_code
            ",
        )
        .bind(&new_url.original_url)
        .bind(new_url.short_code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(short_url)
    }

    async fn find_by_original_url(&self, url: &str) -> Result<Option<ShortUrl>, AppError> {
        let short_url = sqlx::query_as::<_, ShortUrl>(
            "SELECT original_url, short_code FROM urls WHERE original_url = $1",
        )
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(short_url)
    }

    async fn find_by_short_code(&self, code: i64) -> Result<Option<ShortUrl>, AppError> {
        let short_url = sqlx::query_as::<_, ShortUrl>(
            "SELECT original_url, short_code FROM urls WHERE short_code = $1",
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(short_url)
    }
}
