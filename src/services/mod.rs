//! Service layer: business logic coordinating domain ports.

pub mod artist_cache_service;

pub use artist_cache_service::{ArtistCacheService, CacheStats, NO_ARTIST, UNKNOWN_ARTIST};
