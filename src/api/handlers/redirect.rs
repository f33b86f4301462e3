//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Check the cache for a live record snapshot
/// 2. On miss (or stale snapshot), query the store and repopulate the cache
/// 3. Return `302 Found` with `Location` set to the original URL
///
/// # Errors
///
/// Returns 404 when the code is unknown or the record has expired; the two
/// cases look identical to the caller.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let record = state.resolver.resolve(&code).await?;

    let location = HeaderValue::from_str(&record.original_url).map_err(|_| {
        AppError::internal(
            "Stored URL is not a valid Location header",
            json!({ "code": code }),
        )
    })?;

    let mut response = StatusCode::FOUND.into_response();
    response.headers_mut().insert(header::LOCATION, location);

    Ok(response)
}
