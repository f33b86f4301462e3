//! URL shortening service, the write path.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde_json::json;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::domain::validator::ReachabilityValidator;
use crate::error::AppError;
use crate::utils::base62;

/// Creates URL records and derives their short codes.
///
/// The code is a deterministic function of the store-assigned identity, so
/// the identity must exist before the code can be computed. The repository
/// runs the insert and the code assignment as one atomic unit, with the
/// derivation passed in as a callback; a failure at either step leaves no
/// row behind.
pub struct ShorteningService {
    repository: Arc<dyn UrlRepository>,
    validator: Arc<dyn ReachabilityValidator>,
    lifetime: Duration,
}

impl ShorteningService {
    /// Creates the service. `lifetime` is how long new records stay
    /// resolvable before the reclaimer may remove them.
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        validator: Arc<dyn ReachabilityValidator>,
        lifetime: Duration,
    ) -> Self {
        Self {
            repository,
            validator,
            lifetime,
        }
    }

    /// Shortens `original_url` and returns the fully populated record.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] when the URL fails the reachability probe;
    ///   nothing is written to the store
    /// - [`AppError::Conflict`] when the URL is already shortened; no retry,
    ///   no dedup-and-return
    /// - [`AppError::Internal`] when the code assignment matches zero rows;
    ///   the insert is rolled back, so the same URL can be retried
    pub async fn shorten(&self, original_url: &str) -> Result<UrlRecord, AppError> {
        if !self.validator.is_reachable(original_url).await {
            return Err(AppError::bad_request(
                "Original URL is not valid or accessible",
                json!({ "url": original_url }),
            ));
        }

        let created_at = Utc::now();
        let new_record = NewUrlRecord {
            original_url: original_url.to_string(),
            created_at,
            expires_at: Some(created_at + self.lifetime),
        };

        // id is a BIGSERIAL starting at 1; the cast cannot wrap.
        self.repository
            .create(new_record, &|id| base62::encode(id as u64))
            .await
    }
}
