//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::urls::{ShortenUrlRequest, UrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /api/v1/urls`
///
/// # Request Body
///
/// ```json
/// { "originalUrl": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// `201 Created` with the stored record, including the derived code and the
/// expiry (creation time plus the configured lifetime):
///
/// ```json
/// {
///   "id": 1,
///   "originalUrl": "https://example.com/some/long/path",
///   "shortUrlCode": "1",
///   "createdAt": "2025-01-01T12:00:00Z",
///   "expiresAt": "2025-01-08T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 when the URL is malformed or fails the reachability probe,
/// 409 when the URL has already been shortened.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenUrlRequest>,
) -> Result<(StatusCode, Json<UrlResponse>), AppError> {
    payload.validate()?;

    let record = state.shortener.shorten(&payload.original_url).await?;

    Ok((StatusCode::CREATED, Json(record.into())))
}
