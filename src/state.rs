//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::SongService;
use crate::infrastructure::enrichment::HttpEnrichmentClient;
use crate::infrastructure::persistence::PgSongRepository;

/// Song service wired to PostgreSQL and the HTTP metadata service.
pub type CatalogService = SongService<PgSongRepository, HttpEnrichmentClient>;

#[derive(Clone)]
pub struct AppState {
    pub song_service: Arc<CatalogService>,
}

impl AppState {
    pub fn new(song_service: Arc<CatalogService>) -> Self {
        Self { song_service }
    }
}
