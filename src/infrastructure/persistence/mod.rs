//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! runtime-checked queries, so the crate builds without a live database.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - Tracker account storage
//! - [`PgExerciseRepository`] - Exercise log storage and filtered reads
//! - [`PgUrlRepository`] - Short URL mapping storage
//! - [`PgCounterRepository`] - Atomic counter allocation

pub mod pg_counter_repository;
pub mod pg_exercise_repository;
pub mod pg_url_repository;
pub mod pg_user_repository;

pub use pg_counter_repository::PgCounterRepository;
pub use pg_exercise_repository::PgExerciseRepository;
pub use pg_url_repository::PgUrlRepository;
pub use pg_user_repository::PgUserRepository;
