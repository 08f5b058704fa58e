//! Artist resolver port.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::errors::ResolveResult;
use crate::domain::models::{Artist, ArtistId};

/// Single-identifier lookups against an artist store.
///
/// Each call performs exactly one lookup. A missing record is `Ok(None)`;
/// `Err` is reserved for transport and decode failures.
#[async_trait]
pub trait ArtistResolver: Send + Sync {
    /// Fetch the full artist record.
    async fn fetch_artist(&self, id: ArtistId) -> ResolveResult<Option<Artist>>;

    /// Fetch only the display name.
    async fn fetch_display_name(&self, id: ArtistId) -> ResolveResult<Option<String>>;
}

#[async_trait]
impl<R: ArtistResolver + ?Sized> ArtistResolver for Arc<R> {
    async fn fetch_artist(&self, id: ArtistId) -> ResolveResult<Option<Artist>> {
        (**self).fetch_artist(id).await
    }

    async fn fetch_display_name(&self, id: ArtistId) -> ResolveResult<Option<String>> {
        (**self).fetch_display_name(id).await
    }
}
