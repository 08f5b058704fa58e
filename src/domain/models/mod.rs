//! Domain models.

pub mod artist;
pub mod config;

pub use artist::{Artist, ArtistId};
pub use config::{CacheConfig, Config, StoreConfig};
