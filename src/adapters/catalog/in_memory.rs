//! Fixed, in-memory artist catalog.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;

use crate::domain::errors::ResolveResult;
use crate::domain::models::{Artist, ArtistId};
use crate::domain::ports::ArtistResolver;

/// Resolver over a fixed set of artist records. Lookups never fail.
#[derive(Debug, Clone, Default)]
pub struct InMemoryArtistCatalog {
    artists: HashMap<ArtistId, Artist>,
}

impl InMemoryArtistCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_artists(artists: impl IntoIterator<Item = Artist>) -> Self {
        Self {
            artists: artists.into_iter().map(|a| (a.id, a)).collect(),
        }
    }

    /// Parse a YAML sequence of artist records.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        let artists: Vec<Artist> = serde_yaml::from_str(yaml)?;
        Ok(Self::from_artists(artists))
    }

    /// Load a YAML sequence of artist records from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read artist catalog {}", path.display()))?;
        Self::from_yaml_str(&yaml)
            .with_context(|| format!("Failed to parse artist catalog {}", path.display()))
    }

    /// Add or replace a record.
    pub fn insert(&mut self, artist: Artist) {
        self.artists.insert(artist.id, artist);
    }

    pub fn get(&self, id: ArtistId) -> Option<&Artist> {
        self.artists.get(&id)
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }
}

#[async_trait]
impl ArtistResolver for InMemoryArtistCatalog {
    async fn fetch_artist(&self, id: ArtistId) -> ResolveResult<Option<Artist>> {
        Ok(self.get(id).cloned())
    }

    async fn fetch_display_name(&self, id: ArtistId) -> ResolveResult<Option<String>> {
        Ok(self.get(id).map(|a| a.name.clone()))
    }
}
