//! Batch artist resolution with a process-lifetime cache.
//!
//! Lookups go through two unbounded `moka` caches (artist records and display
//! names). Cache misses in a batch are spawned onto the runtime, one task per
//! distinct identifier, and joined before the batch returns. Concurrent
//! lookups for the same identifier share a single resolver call.
//!
//! Only successful lookups are cached. Not-found results and failures degrade
//! to a placeholder name or to omission and are retried on the next access.

use moka::future::Cache;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, instrument, trace, warn};

use crate::domain::errors::{ResolveError, ResolveResult};
use crate::domain::models::{Artist, ArtistId, CacheConfig};
use crate::domain::ports::ArtistResolver;

/// Name returned when an artist cannot be resolved.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Name returned when no artist is associated at all.
pub const NO_ARTIST: &str = "No Artist";

/// Point-in-time entry counts of both caches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub display_names: usize,
    pub artists: usize,
}

/// Why a lookup produced nothing cacheable.
#[derive(Debug)]
enum Unresolved {
    NotFound,
    Failed(ResolveError),
}

/// Resolves artist identifiers to names and records, caching successes.
///
/// Cloning is cheap and every clone shares the same caches and limiter.
pub struct ArtistCacheService<R: ?Sized> {
    resolver: Arc<R>,
    names: Cache<ArtistId, String>,
    artists: Cache<ArtistId, Artist>,
    /// Bounds resolver calls in flight across all batches.
    limiter: Arc<Semaphore>,
    lookup_timeout: Duration,
}

impl<R: ?Sized> Clone for ArtistCacheService<R> {
    fn clone(&self) -> Self {
        Self {
            resolver: Arc::clone(&self.resolver),
            names: self.names.clone(),
            artists: self.artists.clone(),
            limiter: Arc::clone(&self.limiter),
            lookup_timeout: self.lookup_timeout,
        }
    }
}

impl<R> ArtistCacheService<R>
where
    R: ArtistResolver + ?Sized + 'static,
{
    /// Create a service with default concurrency and timeout settings.
    pub fn new(resolver: Arc<R>) -> Self {
        Self::with_config(resolver, &CacheConfig::default())
    }

    /// Create a service tuned by `config`.
    pub fn with_config(resolver: Arc<R>, config: &CacheConfig) -> Self {
        Self {
            resolver,
            names: Cache::builder().name("artist-display-names").build(),
            artists: Cache::builder().name("artist-records").build(),
            limiter: Arc::new(Semaphore::new(config.max_concurrent_lookups.max(1))),
            lookup_timeout: Duration::from_millis(config.lookup_timeout_ms),
        }
    }

    // ========================================================================
    // Display names
    // ========================================================================

    /// Resolve one display name, falling back to [`UNKNOWN_ARTIST`].
    #[instrument(skip_all, fields(artist_id = %id))]
    pub async fn display_name(&self, id: ArtistId) -> String {
        self.lookup_display_name(id)
            .await
            .unwrap_or_else(|| UNKNOWN_ARTIST.to_string())
    }

    /// Resolve a name for an optional association, using [`NO_ARTIST`] when
    /// there is none.
    pub async fn display_name_or_placeholder(&self, id: Option<ArtistId>) -> String {
        match id {
            Some(id) => self.display_name(id).await,
            None => NO_ARTIST.to_string(),
        }
    }

    /// Resolve display names for every identifier in `ids`.
    ///
    /// The result holds exactly one entry per distinct identifier. Unresolvable
    /// identifiers map to [`UNKNOWN_ARTIST`].
    #[instrument(skip(self, ids), fields(requested = ids.len()))]
    pub async fn display_names(&self, ids: &[ArtistId]) -> HashMap<ArtistId, String> {
        let mut names = HashMap::with_capacity(ids.len());
        let mut pending = HashSet::new();
        let mut tasks = JoinSet::new();

        for &id in ids {
            if names.contains_key(&id) || pending.contains(&id) {
                continue;
            }
            if let Some(name) = self.names.get(&id).await {
                names.insert(id, name);
                continue;
            }

            pending.insert(id);
            let service = self.clone();
            tasks.spawn(async move { (id, service.lookup_display_name(id).await) });
        }

        let dispatched = pending.len();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((id, name)) => {
                    names.insert(id, name.unwrap_or_else(|| UNKNOWN_ARTIST.to_string()));
                }
                Err(err) => warn!(error = %err, "display name task did not complete"),
            }
        }

        // A task that panicked still owes its identifier an entry.
        for id in pending {
            names
                .entry(id)
                .or_insert_with(|| UNKNOWN_ARTIST.to_string());
        }

        debug!(resolved = names.len(), dispatched, "display names resolved");
        names
    }

    /// Resolve one name per element of `ids`, duplicates included.
    pub async fn display_name_list(&self, ids: &[ArtistId]) -> Vec<String> {
        let names = self.display_names(ids).await;
        ids.iter()
            .map(|id| {
                names
                    .get(id)
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_ARTIST.to_string())
            })
            .collect()
    }

    // ========================================================================
    // Artist records
    // ========================================================================

    /// Resolve one artist record, or `None` if it cannot be resolved.
    #[instrument(skip_all, fields(artist_id = %id))]
    pub async fn artist(&self, id: ArtistId) -> Option<Artist> {
        self.lookup_artist(id).await
    }

    /// Resolve artist records for `ids`.
    ///
    /// Unresolvable identifiers are omitted, so the result can be shorter than
    /// the input. Order is unspecified.
    #[instrument(skip(self, ids), fields(requested = ids.len()))]
    pub async fn artists(&self, ids: &[ArtistId]) -> Vec<Artist> {
        let mut artists = Vec::with_capacity(ids.len());
        let mut seen = HashSet::with_capacity(ids.len());
        let mut tasks = JoinSet::new();

        for &id in ids {
            if !seen.insert(id) {
                continue;
            }
            if let Some(artist) = self.artists.get(&id).await {
                artists.push(artist);
                continue;
            }

            let service = self.clone();
            tasks.spawn(async move { service.lookup_artist(id).await });
        }

        let dispatched = tasks.len();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Some(artist)) => artists.push(artist),
                Ok(None) => {}
                Err(err) => warn!(error = %err, "artist task did not complete"),
            }
        }

        debug!(resolved = artists.len(), dispatched, "artists resolved");
        artists
    }

    // ========================================================================
    // Cache management
    // ========================================================================

    /// Drop every cached name and record.
    ///
    /// Lookups completing concurrently may repopulate their entry.
    pub fn clear_cache(&self) {
        self.names.invalidate_all();
        self.artists.invalidate_all();
        debug!("artist caches cleared");
    }

    pub async fn cached_display_name(&self, id: ArtistId) -> Option<String> {
        self.names.get(&id).await
    }

    pub async fn cached_artist(&self, id: ArtistId) -> Option<Artist> {
        self.artists.get(&id).await
    }

    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            display_names: self.names.iter().count(),
            artists: self.artists.iter().count(),
        }
    }

    // ========================================================================
    // Lookup internals
    // ========================================================================

    async fn lookup_display_name(&self, id: ArtistId) -> Option<String> {
        if let Some(name) = self.names.get(&id).await {
            trace!(artist_id = %id, "display name cache hit");
            return Some(name);
        }

        // A cached record already knows the name.
        if let Some(artist) = self.artists.get(&id).await {
            return Some(self.names.entry(id).or_insert(artist.name).await.into_value());
        }

        let result = self
            .names
            .try_get_with(id, async {
                match self.bounded(self.resolver.fetch_display_name(id)).await {
                    Ok(Some(name)) => Ok(name),
                    Ok(None) => Err(Unresolved::NotFound),
                    Err(err) => Err(Unresolved::Failed(err)),
                }
            })
            .await;

        match result {
            Ok(name) => Some(name),
            Err(reason) => {
                log_unresolved(id, "display_name", &reason);
                None
            }
        }
    }

    async fn lookup_artist(&self, id: ArtistId) -> Option<Artist> {
        if let Some(artist) = self.artists.get(&id).await {
            trace!(artist_id = %id, "artist cache hit");
            return Some(artist);
        }

        let result = self
            .artists
            .try_get_with(id, async {
                match self.bounded(self.resolver.fetch_artist(id)).await {
                    Ok(Some(artist)) => Ok(artist),
                    Ok(None) => Err(Unresolved::NotFound),
                    Err(err) => Err(Unresolved::Failed(err)),
                }
            })
            .await;

        match result {
            Ok(artist) => {
                self.names.entry(id).or_insert(artist.name.clone()).await;
                Some(artist)
            }
            Err(reason) => {
                log_unresolved(id, "artist", &reason);
                None
            }
        }
    }

    /// Run one resolver call under the concurrency limit and lookup timeout.
    async fn bounded<T, F>(&self, lookup: F) -> ResolveResult<Option<T>>
    where
        F: Future<Output = ResolveResult<Option<T>>>,
    {
        let _permit = self
            .limiter
            .acquire()
            .await
            .map_err(|_| ResolveError::Transport("lookup limiter closed".to_string()))?;

        tokio::time::timeout(self.lookup_timeout, lookup)
            .await
            .map_err(|_| ResolveError::Timeout(self.lookup_timeout))?
    }
}

fn log_unresolved(id: ArtistId, lookup: &'static str, reason: &Unresolved) {
    match reason {
        Unresolved::NotFound => debug!(artist_id = %id, lookup, "artist not found"),
        Unresolved::Failed(err) => {
            warn!(artist_id = %id, lookup, error = %err, "artist lookup failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct SingleArtist(Artist);

    #[async_trait]
    impl ArtistResolver for SingleArtist {
        async fn fetch_artist(&self, id: ArtistId) -> ResolveResult<Option<Artist>> {
            Ok((id == self.0.id).then(|| self.0.clone()))
        }

        async fn fetch_display_name(&self, id: ArtistId) -> ResolveResult<Option<String>> {
            Ok((id == self.0.id).then(|| self.0.name.clone()))
        }
    }

    fn service() -> (ArtistCacheService<SingleArtist>, ArtistId) {
        let id = ArtistId::new();
        let resolver = Arc::new(SingleArtist(Artist::new(id, "IVE")));
        (ArtistCacheService::new(resolver), id)
    }

    #[tokio::test]
    async fn test_placeholder_for_missing_association() {
        let (service, id) = service();
        assert_eq!(service.display_name_or_placeholder(None).await, NO_ARTIST);
        assert_eq!(service.display_name_or_placeholder(Some(id)).await, "IVE");
    }

    #[tokio::test]
    async fn test_resolved_artist_seeds_name_cache() {
        let (service, id) = service();
        service.artist(id).await.expect("artist should resolve");
        assert_eq!(service.cached_display_name(id).await.as_deref(), Some("IVE"));
    }

    #[tokio::test]
    async fn test_display_name_list_keeps_duplicates() {
        let (service, id) = service();
        let other = ArtistId::new();
        let names = service.display_name_list(&[id, other, id]).await;
        assert_eq!(names, vec!["IVE", UNKNOWN_ARTIST, "IVE"]);
    }

    #[tokio::test]
    async fn test_zero_concurrency_is_clamped() {
        let id = ArtistId::new();
        let resolver = Arc::new(SingleArtist(Artist::new(id, "aespa")));
        let config = CacheConfig {
            max_concurrent_lookups: 0,
            lookup_timeout_ms: 1_000,
        };
        let service = ArtistCacheService::with_config(resolver, &config);
        assert_eq!(service.display_name(id).await, "aespa");
    }

    #[test]
    fn test_empty_stats() {
        let (service, _) = service();
        assert_eq!(service.cache_stats(), CacheStats::default());
    }
}
