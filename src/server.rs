//! HTTP server initialization and runtime setup.
//!
//! Handles tracing setup, database connections, migrations, state wiring,
//! and the Axum server lifecycle for both services.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tower_http::normalize_path::NormalizePath;
use tracing_subscriber::EnvFilter;

use crate::application::services::{ExerciseService, UrlService, UserService};
use crate::config::Config;
use crate::infrastructure::persistence::{
    PgCounterRepository, PgExerciseRepository, PgUrlRepository, PgUserRepository,
};
use crate::routes::{shortener_router, tracker_router};
use crate::state::{ShortenerState, TrackerState};
use crate::utils::url_validator::DnsResolver;

/// Initializes the global tracing subscriber from the configuration.
///
/// `RUST_LOG` takes precedence over the configured level; `LOG_FORMAT=json`
/// switches to structured JSON output.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Runs the exercise tracker service.
///
/// Initializes the PostgreSQL pool, applies migrations, wires the user and
/// exercise services, and serves HTTP until shutdown.
///
/// # Errors
///
/// Returns an error if the database connection, bind, or server runtime
/// fails.
pub async fn run_tracker(config: Config) -> Result<()> {
    let pool = Arc::new(connect_pool(&config).await?);

    let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
    let exercise_repository = Arc::new(PgExerciseRepository::new(pool.clone()));

    let state = TrackerState::new(
        Arc::new(UserService::new(user_repository.clone())),
        Arc::new(ExerciseService::new(user_repository, exercise_repository)),
    );

    serve(config, tracker_router(state)).await
}

/// Runs the URL shortener service.
///
/// Initializes the PostgreSQL pool, applies migrations, wires the URL
/// service with the atomic counter allocator and the system DNS resolver,
/// and serves HTTP until shutdown.
///
/// # Errors
///
/// Returns an error if the database connection, bind, or server runtime
/// fails.
pub async fn run_shortener(config: Config) -> Result<()> {
    let pool = Arc::new(connect_pool(&config).await?);

    let url_repository = Arc::new(PgUrlRepository::new(pool.clone()));
    let counter_repository = Arc::new(PgCounterRepository::new(pool.clone()));

    let state = ShortenerState::new(
        Arc::new(UrlService::new(url_repository, counter_repository)),
        Arc::new(DnsResolver),
    );

    serve(config, shortener_router(state)).await
}

/// Connects the PostgreSQL pool with the configured tuning and applies
/// embedded migrations.
async fn connect_pool(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    Ok(pool)
}

async fn serve(config: Config, app: NormalizePath<axum::Router>) -> Result<()> {
    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
