//! Artist Cache - Artist Identity Resolution
//!
//! Resolves opaque artist identifiers to display names and full artist records
//! against a remote PostgREST store, fanning batch lookups out concurrently and
//! caching every successful resolution for the life of the process.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Artist models, resolver errors and the resolver port
//! - **Service Layer** (`services`): Batch resolution and caching
//! - **Adapters** (`adapters`): In-memory and offline-fallback resolvers
//! - **Infrastructure Layer** (`infrastructure`): PostgREST client, configuration, logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use artist_cache::{ArtistCacheService, ArtistId, ConfigLoader, PostgrestArtistStore};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::load()?;
//!     let store = Arc::new(PostgrestArtistStore::new(&config.store)?);
//!     let service = ArtistCacheService::with_config(store, &config.cache);
//!
//!     let ids: Vec<ArtistId> = vec!["6f1c8a52-3e0b-4c1e-9a57-5d2b8f0e7a11".parse()?];
//!     let names = service.display_names(&ids).await;
//!     println!("{names:?}");
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::catalog::{CatalogFallbackResolver, InMemoryArtistCatalog};
pub use domain::models::{Artist, ArtistId, CacheConfig, Config, StoreConfig};
pub use domain::ports::ArtistResolver;
pub use domain::{ResolveError, ResolveResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::logging::{LogConfig, LoggerImpl};
pub use infrastructure::postgrest::PostgrestArtistStore;
pub use services::{ArtistCacheService, CacheStats, NO_ARTIST, UNKNOWN_ARTIST};
