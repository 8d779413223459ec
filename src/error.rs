//! Application error type shared by both services.
//!
//! Every failure is scoped to a single request: handlers return
//! `Result<_, AppError>` and the [`IntoResponse`] impl renders the error as
//! the services' wire-contract body `{"error": "<message>"}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Request-scoped error kinds.
///
/// - `Validation` - bad or missing input (invalid URL, unparsable date)
/// - `NotFound` - a referenced record does not exist
/// - `Conflict` - uniqueness violation on concurrent creation; callers are
///   expected to recover by re-reading the winning record
/// - `Internal` - any underlying persistence failure, surfaced generically
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Conflict { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // The public contract sticks to 200/302/400/500: validation and
        // not-found failures both answer 400, everything else 500.
        let (status, message) = match self {
            AppError::Validation { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Conflict { .. } | AppError::Internal { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "server error".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Maps a SQLx error onto the application error taxonomy.
///
/// Unique-constraint violations become [`AppError::Conflict`] so callers can
/// recover from insert races; anything else is logged and surfaced as a
/// generic internal error without leaking database details.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            return AppError::conflict(format!(
                "unique constraint violation: {}",
                db.constraint().unwrap_or("unknown")
            ));
        }
    }

    tracing::error!("database error: {e}");
    AppError::internal("server error")
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let response = AppError::bad_request("invalid url").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_400() {
        let response = AppError::not_found("User not found").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_is_generic() {
        let response = AppError::internal("connection pool exhausted").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_display_carries_message() {
        let err = AppError::conflict("duplicate original_url");
        assert_eq!(err.to_string(), "duplicate original_url");
    }
}
