//! In-process artist catalogs.
//!
//! An [`InMemoryArtistCatalog`] answers lookups from a fixed set of records,
//! and [`CatalogFallbackResolver`] decorates a remote resolver so that lookups
//! fall back to such a catalog when the remote store cannot be reached.

pub mod fallback;
pub mod in_memory;

pub use fallback::CatalogFallbackResolver;
pub use in_memory::InMemoryArtistCatalog;
