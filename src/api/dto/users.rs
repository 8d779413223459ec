//! DTOs for user endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::User;

/// Request to create a user.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
}

/// A user as returned by `GET /api/users` and `POST /api/users`.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub id: i64,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            id: user.id,
        }
    }
}
