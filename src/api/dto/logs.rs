//! DTOs for the exercise log endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Exercise, LogQuery, User};
use crate::utils::date::{format_human, parse_calendar_date};

/// Raw query parameters for `GET /api/users/{id}/logs`.
///
/// All fields arrive as strings and are parsed with explicit defaults:
/// unparsable `from`/`to` values leave the corresponding bound open, and an
/// absent, unparsable, or zero `limit` means no truncation.
#[derive(Debug, Default, Deserialize)]
pub struct LogParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

impl LogParams {
    /// Parses the raw parameters into a [`LogQuery`].
    pub fn into_query(self) -> LogQuery {
        let limit = self
            .limit
            .as_deref()
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|&limit| limit > 0);

        LogQuery {
            from: self.from.as_deref().and_then(parse_calendar_date),
            to: self.to.as_deref().and_then(parse_calendar_date),
            limit,
        }
    }
}

/// One entry in a user's exercise log.
#[derive(Debug, Serialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i32,
    pub date: String,
}

impl From<Exercise> for LogEntry {
    fn from(exercise: Exercise) -> Self {
        Self {
            description: exercise.description,
            duration: exercise.duration,
            date: format_human(exercise.date),
        }
    }
}

/// Response for `GET /api/users/{id}/logs`.
#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub id: i64,
    pub username: String,
    pub count: usize,
    pub log: Vec<LogEntry>,
}

impl LogResponse {
    pub fn new(user: User, exercises: Vec<Exercise>) -> Self {
        let log: Vec<LogEntry> = exercises.into_iter().map(LogEntry::from).collect();

        Self {
            id: user.id,
            username: user.username,
            count: log.len(),
            log,
        }
    }
}
