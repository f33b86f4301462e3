//! DTOs for the URL shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::UrlRecord;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenUrlRequest {
    /// The original URL to shorten (must be absolute HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub original_url: String,
}

/// A URL record as returned by the API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlResponse {
    pub id: i64,
    pub original_url: String,
    pub short_url_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<UrlRecord> for UrlResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            id: record.id,
            original_url: record.original_url,
            short_url_code: record.short_url_code,
            created_at: record.created_at,
            expires_at: record.expires_at,
        }
    }
}
