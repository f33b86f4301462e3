//! Repository trait for URL record storage.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Derives the short code from a store-assigned identity. Invoked by the
/// repository between insert and code assignment, inside the same atomic
/// scope, because the identity does not exist before the insert.
pub type CodeFn = dyn Fn(i64) -> String + Send + Sync;

/// Narrow storage interface for URL records.
///
/// The write path is a single `create` call; the read path uses
/// `find_by_code`; the reclaimer uses `delete_expired`. The engines depend
/// only on this trait, so tests can substitute mocks or an in-memory fake.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new record, derives its code from the store-assigned
    /// identity via `derive_code`, persists the code, and returns the
    /// completed record.
    ///
    /// Both statements run in one atomic unit: if the code assignment
    /// fails, the insert is rolled back and no row survives, so the caller
    /// may retry the same URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the original URL is already
    /// shortened (unique constraint), [`AppError::Internal`] when the code
    /// assignment matches zero rows or on other database errors.
    async fn create(
        &self,
        new_record: NewUrlRecord,
        derive_code: &CodeFn,
    ) -> Result<UrlRecord, AppError>;

    /// Finds a record by its short code.
    ///
    /// Records whose code is still unset are never returned: a NULL code
    /// cannot match any lookup value.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Bulk-deletes records whose expiry is at or before `cutoff` and
    /// returns the number removed. Records with a null expiry are kept.
    async fn delete_expired(&self, cutoff: DateTime<Utc>) -> Result<u64, AppError>;

    /// Reports whether the store is reachable. Used by the health endpoint.
    async fn ping(&self) -> bool;
}
