//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache setup, background reclaimer spawning,
//! and Axum server lifecycle.

use crate::application::services::{ResolutionService, ShorteningService};
use crate::config::Config;
use crate::domain::reclaimer::run_reclaimer;
use crate::domain::repositories::UrlRepository;
use crate::domain::validator::ReachabilityValidator;
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::persistence::PgUrlRepository;
use crate::infrastructure::validation::HttpReachabilityValidator;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Redis cache (or NullCache fallback)
/// - Background expired-record reclaimer
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
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

    let cache: Arc<dyn CacheService> = if let Some(redis_url) = &config.redis_url {
        match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
            Ok(redis) => {
                tracing::info!("Cache enabled (Redis)");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
                Arc::new(NullCache::new())
            }
        }
    } else {
        tracing::info!("Cache disabled (NullCache)");
        Arc::new(NullCache::new())
    };

    let repository: Arc<dyn UrlRepository> = Arc::new(PgUrlRepository::new(Arc::new(pool)));

    let validator: Arc<dyn ReachabilityValidator> = Arc::new(
        HttpReachabilityValidator::new(Duration::from_secs(config.validation_timeout_seconds))
            .context("Failed to build reachability probe client")?,
    );

    let shortener = Arc::new(ShorteningService::new(
        repository.clone(),
        validator,
        chrono::Duration::days(config.url_lifetime_days),
    ));
    let resolver = Arc::new(ResolutionService::new(repository.clone(), cache.clone()));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let reclaimer = tokio::spawn(run_reclaimer(
        repository.clone(),
        Duration::from_secs(config.cleanup_interval_seconds),
        shutdown_rx,
    ));
    tracing::info!(
        "Expired URL reclaimer started (every {}s)",
        config.cleanup_interval_seconds
    );

    let state = AppState::new(shortener, resolver, repository, cache);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Stop the reclaimer once the server has drained.
    let _ = shutdown_tx.send(true);
    let _ = reclaimer.await;
    tracing::info!("Shutdown complete");

    Ok(())
}

/// Resolves when the process receives SIGINT (Ctrl+C) or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
