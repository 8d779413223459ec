#![allow(dead_code)]

//! Shared test fixtures: in-memory repository implementations and state
//! builders, so the handler suites run without a database.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;

use fcc_microservices::application::services::{ExerciseService, UrlService, UserService};
use fcc_microservices::domain::entities::{
    Exercise, LogQuery, NewExercise, NewShortUrl, ShortUrl, User,
};
use fcc_microservices::domain::repositories::{
    CounterRepository, ExerciseRepository, UrlRepository, UserRepository,
};
use fcc_microservices::error::AppError;
use fcc_microservices::state::{ShortenerState, TrackerState};
use fcc_microservices::utils::url_validator::HostResolver;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, username: &str) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        let user = User::new(users.len() as i64 + 1, username.to_string());
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|user| user.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct InMemoryExerciseRepository {
    exercises: Mutex<Vec<Exercise>>,
}

#[async_trait]
impl ExerciseRepository for InMemoryExerciseRepository {
    async fn create(&self, new_exercise: NewExercise) -> Result<Exercise, AppError> {
        let mut exercises = self.exercises.lock().unwrap();
        let exercise = Exercise {
            id: exercises.len() as i64 + 1,
            user_id: new_exercise.user_id,
            username: new_exercise.username,
            date: new_exercise.date,
            duration: new_exercise.duration,
            description: new_exercise.description,
        };
        exercises.push(exercise.clone());
        Ok(exercise)
    }

    async fn find_for_user(
        &self,
        user_id: i64,
        query: LogQuery,
    ) -> Result<Vec<Exercise>, AppError> {
        let exercises = self.exercises.lock().unwrap();
        let mut matching: Vec<Exercise> = exercises
            .iter()
            .filter(|exercise| exercise.user_id == user_id && query.contains(exercise.date))
            .cloned()
            .collect();

        if let Some(limit) = query.limit {
            matching.truncate(limit as usize);
        }

        Ok(matching)
    }
}

#[derive(Default)]
pub struct InMemoryUrlRepository {
    urls: Mutex<Vec<ShortUrl>>,
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let mut urls = self.urls.lock().unwrap();

        // Mirror the unique constraints on original_url and short_code.
        if urls.iter().any(|existing| {
            existing.original_url == new_url.original_url
                || existing.short_code == new_url.short_code
        }) {
            return Err(AppError::conflict("duplicate url mapping"));
        }

        let short_url = ShortUrl::new(new_url.original_url, new_url.short_code);
        urls.push(short_url.clone());
        Ok(short_url)
    }

    async fn find_by_original_url(&self, url: &str) -> Result<Option<ShortUrl>, AppError> {
        let urls = self.urls.lock().unwrap();
        Ok(urls.iter().find(|short| short.original_url == url).cloned())
    }

    async fn find_by_short_code(&self, code: i64) -> Result<Option<ShortUrl>, AppError> {
        let urls = self.urls.lock().unwrap();
        Ok(urls.iter().find(|short| short.short_code == code).cloned())
    }
}

/// Atomic in-process counter with the same contract as the PostgreSQL
/// upsert-increment.
#[derive(Default)]
pub struct InMemoryCounterRepository {
    count: AtomicI64,
}

#[async_trait]
impl CounterRepository for InMemoryCounterRepository {
    async fn next(&self, _key: &str) -> Result<i64, AppError> {
        Ok(self.count.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

/// Resolver stub: every hostname resolves (or none, when constructed with
/// `refusing()`), keeping the suite independent of real DNS.
pub struct StubResolver {
    resolvable: bool,
}

impl StubResolver {
    pub fn resolving() -> Self {
        Self { resolvable: true }
    }

    pub fn refusing() -> Self {
        Self { resolvable: false }
    }
}

#[async_trait]
impl HostResolver for StubResolver {
    async fn resolve(&self, _hostname: &str) -> bool {
        self.resolvable
    }
}

pub fn tracker_state() -> TrackerState {
    let user_repository = Arc::new(InMemoryUserRepository::default());
    let exercise_repository = Arc::new(InMemoryExerciseRepository::default());

    TrackerState::new(
        Arc::new(UserService::new(user_repository.clone())),
        Arc::new(ExerciseService::new(user_repository, exercise_repository)),
    )
}

pub fn shortener_state(resolver: StubResolver) -> ShortenerState {
    let url_repository = Arc::new(InMemoryUrlRepository::default());
    let counter_repository = Arc::new(InMemoryCounterRepository::default());

    ShortenerState::new(
        Arc::new(UrlService::new(url_repository, counter_repository)),
        Arc::new(resolver),
    )
}

pub fn tracker_server() -> TestServer {
    let app = Router::new()
        .nest("/api", fcc_microservices::api::routes::tracker_api_routes())
        .with_state(tracker_state());

    TestServer::new(app).unwrap()
}

pub fn shortener_server(resolver: StubResolver) -> TestServer {
    let app = Router::new()
        .nest(
            "/api",
            fcc_microservices::api::routes::shortener_api_routes(),
        )
        .with_state(shortener_state(resolver));

    TestServer::new(app).unwrap()
}
