//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data
//! access operations following the Repository pattern. These traits are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Tracker account creation and lookup
//! - [`ExerciseRepository`] - Exercise log writes and filtered reads
//! - [`UrlRepository`] - Short URL mapping CRUD
//! - [`CounterRepository`] - Atomic short-code allocation

pub mod counter_repository;
pub mod exercise_repository;
pub mod url_repository;
pub mod user_repository;

pub use counter_repository::CounterRepository;
pub use exercise_repository::ExerciseRepository;
pub use url_repository::UrlRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use counter_repository::MockCounterRepository;
#[cfg(test)]
pub use exercise_repository::MockExerciseRepository;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
