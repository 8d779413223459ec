//! Business logic services for the application layer.

pub mod exercise_service;
pub mod url_service;
pub mod user_service;

pub use exercise_service::ExerciseService;
pub use url_service::UrlService;
pub use user_service::UserService;
