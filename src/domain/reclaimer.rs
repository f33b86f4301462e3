//! Periodic reclamation of expired URL records.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;

use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Runs one reclamation sweep: bulk-deletes every record whose expiry is at
/// or before the current time and returns the number removed.
pub async fn sweep_expired(repository: &dyn UrlRepository) -> Result<u64, AppError> {
    repository.delete_expired(Utc::now()).await
}

/// Background task sweeping expired records on a fixed interval.
///
/// The first sweep runs immediately at startup, then once per `period`.
/// A failed sweep logs a warning and waits for the next tick; there is no
/// retry. The cache is never touched here: stale entries expire on their own
/// TTL or are lazily invalidated on the next resolve.
///
/// The task exits when the shutdown channel changes or its sender is dropped.
pub async fn run_reclaimer(
    repository: Arc<dyn UrlRepository>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match sweep_expired(repository.as_ref()).await {
                    Ok(count) => tracing::info!("Deleted {} expired URLs", count),
                    Err(e) => tracing::warn!("Expired URL sweep failed: {}", e),
                }
            }
            _ = shutdown.changed() => {
                tracing::info!("Reclaimer stopped");
                return;
            }
        }
    }
}
