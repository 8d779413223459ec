//! Handler for the exercise creation endpoint.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::exercises::{CreateExerciseRequest, ExerciseResponse};
use crate::api::extract::FormOrJson;
use crate::error::AppError;
use crate::state::TrackerState;
use crate::utils::date::parse_calendar_date;

/// Records an exercise for a user.
///
/// # Endpoint
///
/// `POST /api/users/{id}/exercises`
///
/// # Behavior
///
/// - The user id must exist (otherwise `User not found`)
/// - `duration` is coerced to an integer (`invalid duration` on failure)
/// - `date` is optional `YYYY-MM-DD`; absent means the current date,
///   unparsable means `invalid date`
///
/// # Response
///
/// ```json
/// {
///   "id": 1,
///   "username": "fcc_test",
///   "date": "Mon May 15 2023",
///   "duration": 30,
///   "description": "test run"
/// }
/// ```
pub async fn create_exercise_handler(
    State(state): State<TrackerState>,
    Path(user_id): Path<i64>,
    FormOrJson(payload): FormOrJson<CreateExerciseRequest>,
) -> Result<Json<ExerciseResponse>, AppError> {
    payload.validate()?;

    let duration: i32 = payload
        .duration
        .trim()
        .parse()
        .map_err(|_| AppError::bad_request("invalid duration"))?;

    // Empty form fields count as absent.
    let date = match payload.date.as_deref().map(str::trim) {
        Some("") | None => None,
        Some(raw) => Some(parse_calendar_date(raw).ok_or_else(|| {
            AppError::bad_request("invalid date")
        })?),
    };

    let exercise = state
        .exercise_service
        .add_exercise(user_id, payload.description, duration, date)
        .await?;

    Ok(Json(exercise.into()))
}
