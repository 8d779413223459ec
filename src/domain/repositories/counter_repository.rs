//! Repository trait for atomic counter allocation.

use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the monotonic short-code counter.
///
/// This is the one concurrency-sensitive contract in the repository: if N
/// callers invoke [`CounterRepository::next`] concurrently they must receive
/// N distinct consecutive integers with no gaps and no duplicates,
/// regardless of arrival order. Implementations must perform the increment
/// as a single atomic read-modify-write against the store; a separate read
/// followed by a separate write is not an acceptable substitute.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CounterRepository: Send + Sync {
    /// Atomically increments the named counter and returns the new value.
    ///
    /// If the counter does not yet exist it is initialized to 1 (upsert
    /// semantics) and 1 is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn next(&self, key: &str) -> Result<i64, AppError>;
}
