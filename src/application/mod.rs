//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository
//! calls, validation, and business rules. Services consume repository traits
//! and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - Tracker account management
//! - [`services::exercise_service::ExerciseService`] - Exercise logging and queries
//! - [`services::url_service::UrlService`] - Idempotent short URL allocation

pub mod services;
