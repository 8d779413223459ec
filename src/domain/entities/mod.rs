//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation
//! inputs use separate `New*` structs so generated identifiers stay owned
//! by the stores.
//!
//! # Entity Types
//!
//! - [`User`] - An exercise tracker account
//! - [`Exercise`] - A single logged exercise, owned by a user
//! - [`ShortUrl`] - A long URL / short code mapping

pub mod exercise;
pub mod short_url;
pub mod user;

pub use exercise::{Exercise, LogQuery, NewExercise};
pub use short_url::{NewShortUrl, ShortUrl};
pub use user::User;
