//! Exercise logging and log query service.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::domain::entities::{Exercise, LogQuery, NewExercise, User};
use crate::domain::repositories::{ExerciseRepository, UserRepository};
use crate::error::AppError;

/// Service for recording exercises and querying a user's log.
///
/// Every operation first resolves the owning user; exercises carry a
/// snapshot of the username taken at creation time.
pub struct ExerciseService {
    users: Arc<dyn UserRepository>,
    exercises: Arc<dyn ExerciseRepository>,
}

impl ExerciseService {
    /// Creates a new exercise service.
    pub fn new(users: Arc<dyn UserRepository>, exercises: Arc<dyn ExerciseRepository>) -> Self {
        Self { users, exercises }
    }

    /// Records an exercise for a user.
    ///
    /// When `date` is `None` the current calendar date is used.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user id does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn add_exercise(
        &self,
        user_id: i64,
        description: String,
        duration: i32,
        date: Option<NaiveDate>,
    ) -> Result<Exercise, AppError> {
        let user = self.get_user(user_id).await?;

        let new_exercise = NewExercise {
            user_id: user.id,
            username: user.username,
            date: date.unwrap_or_else(|| Utc::now().date_naive()),
            duration,
            description,
        };

        self.exercises.create(new_exercise).await
    }

    /// Fetches a user's exercise log, bounded by the query's inclusive date
    /// range and truncated to its limit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user id does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_log(
        &self,
        user_id: i64,
        query: LogQuery,
    ) -> Result<(User, Vec<Exercise>), AppError> {
        let user = self.get_user(user_id).await?;
        let exercises = self.exercises.find_for_user(user.id, query).await?;

        Ok((user, exercises))
    }

    async fn get_user(&self, user_id: i64) -> Result<User, AppError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
