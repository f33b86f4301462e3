//! Short-code resolution service, the read path.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Resolves short codes through the cache with store fallback (cache-aside).
///
/// Stale cache entries are removed lazily when a lookup finds them expired.
/// The entry TTL and the record expiry are independent clocks: an entry may
/// be evicted by its TTL long before the record expires, which just costs a
/// store re-fetch on the next resolve.
pub struct ResolutionService {
    repository: Arc<dyn UrlRepository>,
    cache: Arc<dyn CacheService>,
}

impl ResolutionService {
    pub fn new(repository: Arc<dyn UrlRepository>, cache: Arc<dyn CacheService>) -> Self {
        Self { repository, cache }
    }

    /// Resolves `code` to its URL record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the code is unknown or the record
    /// has expired; the two cases are deliberately indistinguishable to the
    /// caller. Expired records still present in the store are never written
    /// back into the cache.
    pub async fn resolve(&self, code: &str) -> Result<UrlRecord, AppError> {
        let now = Utc::now();

        // Cache errors surface as misses, so an unavailable cache degrades
        // to store-only resolution.
        if let Ok(Some(cached)) = self.cache.get_record(code).await {
            if !cached.is_expired_at(now) {
                return Ok(cached);
            }
            let _ = self.cache.invalidate(code).await;
        }

        let record = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| Self::unknown_code(code))?;

        if record.is_expired_at(now) {
            return Err(Self::unknown_code(code));
        }

        if let Err(e) = self.cache.set_record(code, &record, None).await {
            tracing::warn!("Failed to cache record for {}: {}", code, e);
        }

        Ok(record)
    }

    /// Absent and expired codes produce the same error shape on purpose.
    fn unknown_code(code: &str) -> AppError {
        AppError::not_found(
            format!("Short URL '{}' not found", code),
            json!({ "code": code }),
        )
    }
}
