//! Shared application state for each service.
//!
//! State is constructed explicitly at startup and injected into route
//! handlers via axum state; there are no module-level singletons. Services
//! hold repository trait objects so tests can substitute mocks or in-memory
//! implementations.

use std::sync::Arc;

use crate::application::services::{ExerciseService, UrlService, UserService};
use crate::utils::url_validator::HostResolver;

/// State for the exercise tracker service.
#[derive(Clone)]
pub struct TrackerState {
    pub user_service: Arc<UserService>,
    pub exercise_service: Arc<ExerciseService>,
}

impl TrackerState {
    pub fn new(user_service: Arc<UserService>, exercise_service: Arc<ExerciseService>) -> Self {
        Self {
            user_service,
            exercise_service,
        }
    }
}

/// State for the URL shortener service.
#[derive(Clone)]
pub struct ShortenerState {
    pub url_service: Arc<UrlService>,
    pub resolver: Arc<dyn HostResolver>,
}

impl ShortenerState {
    pub fn new(url_service: Arc<UrlService>, resolver: Arc<dyn HostResolver>) -> Self {
        Self {
            url_service,
            resolver,
        }
    }
}
