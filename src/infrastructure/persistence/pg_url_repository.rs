//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::{CodeFn, UrlRepository};
use crate::error::AppError;

/// PostgreSQL repository for URL record storage and retrieval.
///
/// Queries are bound at runtime and rows map through `FromRow`. The write
/// path runs insert and code assignment on one transaction: any failure
/// rolls the insert back, so no committed row is ever left without a code.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

const RECORD_COLUMNS: &str = "id, original_url, short_url_code, created_at, expires_at";

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(
        &self,
        new_record: NewUrlRecord,
        derive_code: &CodeFn,
    ) -> Result<UrlRecord, AppError> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query_as::<_, UrlRecord>(&format!(
            "INSERT INTO urls (original_url, short_url_code, created_at, expires_at) \
             VALUES ($1, NULL, $2, $3) \
             RETURNING {RECORD_COLUMNS}"
        ))
        .bind(&new_record.original_url)
        .bind(new_record.created_at)
        .bind(new_record.expires_at)
        .fetch_one(&mut *tx)
        .await?;

        let code = derive_code(inserted.id);

        // Single statement: the updated row comes back with the UPDATE
        // itself, and None means the row vanished mid-transaction.
        let record = sqlx::query_as::<_, UrlRecord>(&format!(
            "UPDATE urls SET short_url_code = $1 WHERE id = $2 RETURNING {RECORD_COLUMNS}"
        ))
        .bind(&code)
        .bind(inserted.id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| {
            AppError::internal(
                "Record disappeared between insert and code assignment",
                json!({ "id": inserted.id }),
            )
        })?;

        tx.commit().await?;

        Ok(record)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(&format!(
            "SELECT {RECORD_COLUMNS} FROM urls WHERE short_url_code = $1"
        ))
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn delete_expired(&self, cutoff: DateTime<Utc>) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM urls WHERE expires_at IS NOT NULL AND expires_at <= $1")
            .bind(cutoff)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
            .is_ok()
    }
}
