//! Handler for the exercise log endpoint.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::logs::{LogParams, LogResponse};
use crate::error::AppError;
use crate::state::TrackerState;

/// Returns a user's exercise log, optionally bounded and truncated.
///
/// # Endpoint
///
/// `GET /api/users/{id}/logs?from&to&limit`
///
/// # Behavior
///
/// - The user id must exist (otherwise `User not found`)
/// - `from`/`to` are inclusive `YYYY-MM-DD` bounds applied as a filter
///   predicate over the exercise date; unparsable values are ignored
/// - `limit` truncates the result set; absent, unparsable, or zero means
///   no truncation
///
/// # Response
///
/// ```json
/// {
///   "id": 1,
///   "username": "fcc_test",
///   "count": 1,
///   "log": [
///     { "description": "test run", "duration": 30, "date": "Mon May 15 2023" }
///   ]
/// }
/// ```
pub async fn exercise_log_handler(
    State(state): State<TrackerState>,
    Path(user_id): Path<i64>,
    Query(params): Query<LogParams>,
) -> Result<Json<LogResponse>, AppError> {
    let (user, exercises) = state
        .exercise_service
        .get_log(user_id, params.into_query())
        .await?;

    Ok(Json(LogResponse::new(user, exercises)))
}
