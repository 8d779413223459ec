//! User entity for the exercise tracker.

/// A tracker account: a username plus a store-generated identifier.
///
/// Immutable after creation; the identifier is generated by the store on
/// insert.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
}

impl User {
    /// Creates a new User instance.
    pub fn new(id: i64, username: String) -> Self {
        Self { id, username }
    }
}
