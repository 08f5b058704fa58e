//! CLI command implementations.

pub mod artists;
pub mod names;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use crate::adapters::catalog::{CatalogFallbackResolver, InMemoryArtistCatalog};
use crate::domain::models::Config;
use crate::domain::ports::ArtistResolver;
use crate::infrastructure::postgrest::PostgrestArtistStore;
use crate::services::ArtistCacheService;

/// Service type shared by all commands
pub type CliService = ArtistCacheService<dyn ArtistResolver>;

/// Wire the PostgREST store, the optional offline catalog and the cache
/// service from configuration.
pub fn build_service(config: &Config) -> Result<CliService> {
    let store = PostgrestArtistStore::new(&config.store)
        .context("Failed to initialize PostgREST artist store")?;

    let resolver: Arc<dyn ArtistResolver> = match &config.store.offline_catalog {
        Some(path) => {
            let catalog = InMemoryArtistCatalog::load(path)?;
            info!(path = %path.display(), artists = catalog.len(), "offline catalog loaded");
            Arc::new(CatalogFallbackResolver::new(Arc::new(store), catalog))
        }
        None => Arc::new(store),
    };

    Ok(ArtistCacheService::with_config(resolver, &config.cache))
}
