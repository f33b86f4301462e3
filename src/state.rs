use std::sync::Arc;

use crate::application::services::{ResolutionService, ShorteningService};
use crate::domain::repositories::UrlRepository;
use crate::infrastructure::cache::CacheService;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShorteningService>,
    pub resolver: Arc<ResolutionService>,
    pub repository: Arc<dyn UrlRepository>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    pub fn new(
        shortener: Arc<ShorteningService>,
        resolver: Arc<ResolutionService>,
        repository: Arc<dyn UrlRepository>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        Self {
            shortener,
            resolver,
            repository,
            cache,
        }
    }
}
