// Library exports for testing and reusability

pub mod cache;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod h3_index;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

// Re-export commonly used types
pub use cache::{CacheStats, KeyValueCache};
pub use error::{AppError, Result};

use db::PoiRepository;
use h3_index::H3Index;
use services::{MultiQueryOrchestrator, PoiInfoStore, ReplacementService, SemanticSearchClient};
use std::sync::Arc;

/// Shared application state handed to every route handler.
pub struct AppState {
    pub poi_repo: Arc<dyn PoiRepository>,
    pub cache: Arc<dyn KeyValueCache>,
    pub h3_index: Arc<H3Index>,
    pub poi_store: Arc<PoiInfoStore>,
    pub semantic: Arc<SemanticSearchClient>,
    pub orchestrator: Arc<MultiQueryOrchestrator>,
    pub replacement_service: Arc<ReplacementService>,
    pub config: Arc<config::Config>,
}
