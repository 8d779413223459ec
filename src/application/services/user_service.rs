//! Tracker account creation and lookup service.

use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for creating and listing tracker users.
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Creates a user from a username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_user(&self, username: &str) -> Result<User, AppError> {
        self.users.create(username).await
    }

    /// Lists all users in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.users.list().await
    }

    /// Retrieves a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not exist.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
