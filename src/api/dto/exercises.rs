//! DTOs for the exercise creation endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Exercise;
use crate::utils::date::format_human;

/// Request to record an exercise.
///
/// `duration` arrives as a string (form fields are untyped) and is coerced
/// to an integer by the handler. `date` is an optional `YYYY-MM-DD` value
/// defaulting to the current date.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateExerciseRequest {
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    pub duration: String,
    pub date: Option<String>,
}

/// Response for a recorded exercise.
///
/// `id` is the owning user's identifier and `date` is rendered
/// human-readable, e.g. `Mon May 15 2023`.
#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    pub id: i64,
    pub username: String,
    pub date: String,
    pub duration: i32,
    pub description: String,
}

impl From<Exercise> for ExerciseResponse {
    fn from(exercise: Exercise) -> Self {
        Self {
            id: exercise.user_id,
            username: exercise.username,
            date: format_human(exercise.date),
            duration: exercise.duration,
            description: exercise.description,
        }
    }
}
