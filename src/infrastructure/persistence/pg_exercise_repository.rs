//! PostgreSQL implementation of the exercise repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Exercise, LogQuery, NewExercise};
use crate::domain::repositories::ExerciseRepository;
use crate::error::AppError;

/// PostgreSQL repository for exercise records.
pub struct PgExerciseRepository {
    pool: Arc<PgPool>,
}

impl PgExerciseRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExerciseRepository for PgExerciseRepository {
    async fn create(&self, new_exercise: NewExercise) -> Result<Exercise, AppError> {
        let exercise = sqlx::query_as::<_, Exercise>(
            r"
            INSERT INTO exercises (user_id, username, date, duration, description)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, username, date, duration, description
            ",
        )
        .bind(new_exercise.user_id)
        .bind(&new_exercise.username)
        .bind(new_exercise.date)
        .bind(new_exercise.duration)
        .bind(&new_exercise.description)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exercise)
    }

    async fn find_for_user(
        &self,
        user_id: i64,
        query: LogQuery,
    ) -> Result<Vec<Exercise>, AppError> {
        // NULL bounds leave the range open; a NULL limit means LIMIT ALL.
        let exercises = sqlx::query_as::<_, Exercise>(
            r"
            SELECT id, user_id, username, date, duration, description
            FROM exercises
            WHERE user_id = $1
              AND ($2::date IS NULL OR date >= $2)
              AND ($3::date IS NULL OR date <= $3)
            ORDER BY id
            LIMIT $4
            ",
        )
        .bind(user_id)
        .bind(query.from)
        .bind(query.to)
        .bind(query.limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(exercises)
    }
}
