//! Cache service trait and error types.

use crate::domain::entities::UrlRecord;
use async_trait::async_trait;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    Connection(String),

    #[error("Cache operation error: {0}")]
    Operation(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Cache of URL record snapshots keyed by short code.
///
/// Entries are derived, disposable copies of store rows with an independent
/// TTL; the store remains the source of truth. Implementations must be
/// fail-open: a cache failure degrades to a store lookup, it never fails the
/// request.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - no-op for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the cached record snapshot for a short code.
    ///
    /// Returns `Ok(None)` on a miss, and also on backend errors (fail-open).
    async fn get_record(&self, code: &str) -> CacheResult<Option<UrlRecord>>;

    /// Stores a record snapshot under its short code.
    ///
    /// `ttl_seconds = None` applies the implementation's configured default.
    /// Errors are logged and swallowed so the request flow is never
    /// disrupted.
    async fn set_record(
        &self,
        code: &str,
        record: &UrlRecord,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()>;

    /// Removes a cached snapshot. Used for lazy invalidation of entries
    /// whose record expiry has passed.
    async fn invalidate(&self, code: &str) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;
}
