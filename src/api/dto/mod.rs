//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON/form (de)serialization and validator for
//! input validation.

pub mod exercises;
pub mod health;
pub mod logs;
pub mod shorturl;
pub mod users;
