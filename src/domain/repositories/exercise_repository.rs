//! Repository trait for exercise log data access.

use crate::domain::entities::{Exercise, LogQuery, NewExercise};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for exercise records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgExerciseRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Persists a new exercise record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_exercise: NewExercise) -> Result<Exercise, AppError>;

    /// Fetches a user's exercises, filtered and truncated by `query`.
    ///
    /// The `from`/`to` bounds are applied as an inclusive predicate over the
    /// exercise date; `limit` caps the number of returned rows. Results come
    /// back in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_for_user(
        &self,
        user_id: i64,
        query: LogQuery,
    ) -> Result<Vec<Exercise>, AppError>;
}
