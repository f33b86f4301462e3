//! URL record entity, the sole persisted entity of the service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shortened URL mapping as stored in the `urls` table.
///
/// `short_url_code` is nullable in the store: the record is first inserted
/// without a code, then updated once the store-assigned `id` is known and the
/// code can be derived from it. The same shape is serialized into the cache,
/// so cached snapshots carry the expiry and can be checked without a store
/// round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UrlRecord {
    pub id: i64,
    pub original_url: String,
    pub short_url_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl UrlRecord {
    /// Returns true if the record's expiry has passed at `now`.
    ///
    /// A null `expires_at` means the record never expires.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| e <= now)
    }

    /// Returns true if the record can be served for a redirect at `now`:
    /// its code is set and it has not expired.
    pub fn is_resolvable_at(&self, now: DateTime<Utc>) -> bool {
        self.short_url_code.is_some() && !self.is_expired_at(now)
    }
}

/// Input for inserting a new URL record. The store assigns the identity;
/// the short code is derived and persisted in a follow-up update.
#[derive(Debug, Clone)]
pub struct NewUrlRecord {
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}
