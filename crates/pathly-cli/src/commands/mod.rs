pub mod catalog;
pub mod config;
pub mod quiz;
pub mod recommend;
pub mod results;

use std::sync::Arc;

use pathly_core::{Config, FallbackStore, JsonFileStore, QuizEngine};

/// Engine over the configured catalog.
pub fn engine(config: &Config) -> Result<QuizEngine, Box<dyn std::error::Error>> {
    let catalog = config.load_catalog()?;
    Ok(QuizEngine::new(Arc::new(catalog), config.engine.clone()))
}

/// Results file in the data directory, with a second file in the system
/// temp directory when the first cannot be written.
pub fn result_store(
    config: &Config,
) -> Result<FallbackStore<JsonFileStore, JsonFileStore>, Box<dyn std::error::Error>> {
    let path = config.results_path()?;
    let fallback = std::env::temp_dir().join("pathly-results.json");
    Ok(FallbackStore::new(JsonFileStore::new(path), JsonFileStore::new(fallback)))
}
