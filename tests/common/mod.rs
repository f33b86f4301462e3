#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde_json::json;

use urlite::domain::entities::{NewUrlRecord, UrlRecord};
use urlite::domain::repositories::{CodeFn, UrlRepository};
use urlite::domain::validator::ReachabilityValidator;
use urlite::error::AppError;
use urlite::infrastructure::cache::{CacheResult, CacheService};
use urlite::prelude::*;

/// In-memory stand-in for the Postgres repository.
///
/// Ids are assigned sequentially starting at 1, matching BIGSERIAL.
/// `find_by_code_calls` counts store lookups so tests can assert that
/// cached resolutions skip the store. `fail_code_assignment_once` makes the
/// next `create` fail its code-assignment step; like the rolled-back
/// transaction it models, the failed create leaves no row behind.
#[derive(Default)]
pub struct InMemoryUrlRepository {
    records: Mutex<Vec<UrlRecord>>,
    next_id: AtomicI64,
    pub find_by_code_calls: AtomicUsize,
    pub healthy: std::sync::atomic::AtomicBool,
    pub fail_code_assignment_once: std::sync::atomic::AtomicBool,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            find_by_code_calls: AtomicUsize::new(0),
            healthy: std::sync::atomic::AtomicBool::new(true),
            fail_code_assignment_once: std::sync::atomic::AtomicBool::new(false),
        }
    }

    /// Inserts a fully-formed record directly, bypassing the two-phase
    /// write. Useful for seeding redirect and reclaimer tests.
    pub fn seed(&self, original_url: &str, code: &str, expires_at: Option<DateTime<Utc>>) -> UrlRecord {
        let record = UrlRecord {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            original_url: original_url.to_string(),
            short_url_code: Some(code.to_string()),
            created_at: Utc::now(),
            expires_at,
        };
        self.records.lock().unwrap().push(record.clone());
        record
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn create(
        &self,
        new_record: NewUrlRecord,
        derive_code: &CodeFn,
    ) -> Result<UrlRecord, AppError> {
        let mut records = self.records.lock().unwrap();

        if records
            .iter()
            .any(|r| r.original_url == new_record.original_url)
        {
            return Err(AppError::conflict(
                "URL has already been shortened",
                json!({ "originalUrl": new_record.original_url }),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);

        if self.fail_code_assignment_once.swap(false, Ordering::SeqCst) {
            // Nothing is pushed: the whole create rolls back as one unit.
            return Err(AppError::internal(
                "Record disappeared between insert and code assignment",
                json!({ "id": id }),
            ));
        }

        let record = UrlRecord {
            id,
            original_url: new_record.original_url,
            short_url_code: Some(derive_code(id)),
            created_at: new_record.created_at,
            expires_at: new_record.expires_at,
        };
        records.push(record.clone());
        Ok(record)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        self.find_by_code_calls.fetch_add(1, Ordering::SeqCst);
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .find(|r| r.short_url_code.as_deref() == Some(code))
            .cloned())
    }

    async fn delete_expired(&self, cutoff: DateTime<Utc>) -> Result<u64, AppError> {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| match r.expires_at {
            Some(expiry) => expiry > cutoff,
            None => true,
        });
        Ok((before - records.len()) as u64)
    }

    async fn ping(&self) -> bool {
        self.healthy.load(Ordering::SeqCst)
    }
}

/// In-memory cache keyed by short code. TTLs are ignored; entries live
/// until invalidated.
#[derive(Default)]
pub struct InMemoryCache {
    entries: Mutex<HashMap<String, UrlRecord>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, code: &str, record: UrlRecord) {
        self.entries.lock().unwrap().insert(code.to_string(), record);
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.lock().unwrap().contains_key(code)
    }
}

#[async_trait]
impl CacheService for InMemoryCache {
    async fn get_record(&self, code: &str) -> CacheResult<Option<UrlRecord>> {
        Ok(self.entries.lock().unwrap().get(code).cloned())
    }

    async fn set_record(
        &self,
        code: &str,
        record: &UrlRecord,
        _ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(code.to_string(), record.clone());
        Ok(())
    }

    async fn invalidate(&self, code: &str) -> CacheResult<()> {
        self.entries.lock().unwrap().remove(code);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// Reachability probe stub with a fixed verdict.
pub struct StubValidator {
    pub reachable: bool,
}

#[async_trait]
impl ReachabilityValidator for StubValidator {
    async fn is_reachable(&self, _url: &str) -> bool {
        self.reachable
    }
}

/// Builds an [`AppState`] over in-memory fakes, returning handles to the
/// repository and cache so tests can seed and inspect them.
pub fn create_test_state(reachable: bool) -> (AppState, Arc<InMemoryUrlRepository>, Arc<InMemoryCache>) {
    let repository = Arc::new(InMemoryUrlRepository::new());
    let cache = Arc::new(InMemoryCache::new());
    let validator = Arc::new(StubValidator { reachable });

    let shortener = Arc::new(ShorteningService::new(
        repository.clone(),
        validator,
        Duration::days(7),
    ));
    let resolver = Arc::new(ResolutionService::new(repository.clone(), cache.clone()));

    let state = AppState::new(shortener, resolver, repository.clone(), cache.clone());

    (state, repository, cache)
}
