//! Offline fallback decorator for artist resolvers.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::domain::errors::ResolveResult;
use crate::domain::models::{Artist, ArtistId};
use crate::domain::ports::ArtistResolver;

use super::InMemoryArtistCatalog;

/// Wraps a primary resolver and answers from a local catalog when the primary
/// fails.
///
/// A not-found answer from the primary is authoritative and passed through
/// unchanged. When the primary fails and the catalog has no record either, the
/// primary's error is returned.
pub struct CatalogFallbackResolver<P: ?Sized> {
    primary: Arc<P>,
    catalog: InMemoryArtistCatalog,
}

impl<P: ArtistResolver + ?Sized> CatalogFallbackResolver<P> {
    pub fn new(primary: Arc<P>, catalog: InMemoryArtistCatalog) -> Self {
        Self { primary, catalog }
    }
}

#[async_trait]
impl<P: ArtistResolver + ?Sized> ArtistResolver for CatalogFallbackResolver<P> {
    async fn fetch_artist(&self, id: ArtistId) -> ResolveResult<Option<Artist>> {
        match self.primary.fetch_artist(id).await {
            Err(err) => match self.catalog.get(id) {
                Some(artist) => {
                    debug!(artist_id = %id, error = %err, "serving artist from offline catalog");
                    Ok(Some(artist.clone()))
                }
                None => Err(err),
            },
            found => found,
        }
    }

    async fn fetch_display_name(&self, id: ArtistId) -> ResolveResult<Option<String>> {
        match self.primary.fetch_display_name(id).await {
            Err(err) => match self.catalog.get(id) {
                Some(artist) => {
                    debug!(artist_id = %id, error = %err, "serving name from offline catalog");
                    Ok(Some(artist.name.clone()))
                }
                None => Err(err),
            },
            found => found,
        }
    }
}
