//! PostgreSQL implementation of the counter repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::CounterRepository;
use crate::error::AppError;

/// PostgreSQL repository for the monotonic short-code counter.
pub struct PgCounterRepository {
    pool: Arc<PgPool>,
}

impl PgCounterRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CounterRepository for PgCounterRepository {
    async fn next(&self, key: &str) -> Result<i64, AppError> {
        // Single-statement upsert-increment. The row lock taken by
        // ON CONFLICT DO UPDATE serializes concurrent allocators, so every
        // caller observes a distinct post-increment value.
        let count = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO counters (key, count)
            VALUES ($1, 1)
            ON CONFLICT (key) DO UPDATE SET count = counters.count + 1
            RETURNING count
            ",
        )
        .bind(key)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }
}
