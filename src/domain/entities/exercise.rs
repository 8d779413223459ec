//! Exercise entity and log query parameters.

use chrono::NaiveDate;

/// A single logged exercise.
///
/// `username` is a snapshot taken when the exercise is created, not a live
/// join against the user record. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Exercise {
    pub id: i64,
    pub user_id: i64,
    pub username: String,
    pub date: NaiveDate,
    pub duration: i32,
    pub description: String,
}

/// Input data for creating a new exercise.
#[derive(Debug, Clone)]
pub struct NewExercise {
    pub user_id: i64,
    pub username: String,
    pub date: NaiveDate,
    pub duration: i32,
    pub description: String,
}

/// Filter parameters for an exercise log query.
///
/// `from` and `to` are inclusive calendar-date bounds. `None` leaves the
/// corresponding bound open. `limit` truncates the result set; `None` means
/// no truncation.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<i64>,
}

impl LogQuery {
    /// Returns true if `date` falls within the inclusive `[from, to]` range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(from) = self.from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if date > to {
                return false;
            }
        }
        true
    }
}
