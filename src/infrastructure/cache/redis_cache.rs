//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use crate::domain::entities::UrlRecord;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info, warn};

/// Redis cache for resolved URL records.
///
/// Values are JSON snapshots of [`UrlRecord`], so the cached expiry can be
/// checked without touching the store; RFC 3339 timestamps keep their
/// offsets through the round trip. Uses `ConnectionManager` for connection
/// reuse. All operations are fail-open: errors are logged but don't
/// propagate to callers.
pub struct RedisCache {
    client: ConnectionManager,
    default_ttl: u64,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis, validates the connection with a PING, and
    /// configures the default entry TTL.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Connection`] if the URL is invalid, the
    /// connection cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        let client = Client::open(redis_url)
            .map_err(|e| CacheError::Connection(format!("Failed to create Redis client: {}", e)))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            default_ttl: default_ttl_seconds,
            key_prefix: "url:".to_string(),
        })
    }

    fn build_key(&self, code: &str) -> String {
        format!("{}{}", self.key_prefix, code)
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_record(&self, code: &str) -> CacheResult<Option<UrlRecord>> {
        let key = self.build_key(code);
        let mut conn = self.client.clone();

        let payload = match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                debug!("Cache MISS: {}", code);
                return Ok(None);
            }
            Err(e) => {
                error!("Redis GET error for {}: {}", code, e);
                return Ok(None);
            }
        };

        match serde_json::from_str::<UrlRecord>(&payload) {
            Ok(record) => {
                debug!("Cache HIT: {}", code);
                Ok(Some(record))
            }
            Err(e) => {
                // An undecodable entry is useless; drop it and treat as miss.
                warn!("Discarding corrupt cache entry for {}: {}", code, e);
                let _ = conn.del::<_, i32>(&key).await;
                Ok(None)
            }
        }
    }

    async fn set_record(
        &self,
        code: &str,
        record: &UrlRecord,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        let key = self.build_key(code);
        let mut conn = self.client.clone();
        let ttl = ttl_seconds.unwrap_or(self.default_ttl);

        let payload = match serde_json::to_string(record) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Failed to serialize record for {}: {}", code, e);
                return Ok(());
            }
        };

        match conn.set_ex::<_, _, ()>(&key, payload, ttl).await {
            Ok(_) => {
                debug!("Cache SET: {} (TTL: {}s)", code, ttl);
                Ok(())
            }
            Err(e) => {
                warn!("Redis SET error for {}: {}", code, e);
                Ok(())
            }
        }
    }

    async fn invalidate(&self, code: &str) -> CacheResult<()> {
        let key = self.build_key(code);
        let mut conn = self.client.clone();

        match conn.del::<_, i32>(&key).await {
            Ok(deleted) => {
                if deleted > 0 {
                    debug!("Cache INVALIDATE: {}", code);
                }
                Ok(())
            }
            Err(e) => {
                warn!("Redis DEL error for {}: {}", code, e);
                Ok(())
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
