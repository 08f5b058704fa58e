use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::infrastructure::logging::LogConfig;

/// Main configuration structure for artist-cache
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Remote store connection settings
    #[serde(default)]
    pub store: StoreConfig,

    /// Batch cache service tuning
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LogConfig,
}

/// PostgREST store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StoreConfig {
    /// Project URL, without the `/rest/v1` suffix
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Anonymous API key sent as `apikey`
    #[serde(default)]
    pub api_key: String,

    /// Bearer token for authenticated reads; the API key is used when absent
    #[serde(default)]
    pub access_token: Option<String>,

    /// Table holding artist rows
    #[serde(default = "default_table")]
    pub table: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Client-side request rate limit; unlimited when absent
    #[serde(default)]
    pub rate_limit_rps: Option<u32>,

    /// YAML list of artists served when the store cannot be reached
    #[serde(default)]
    pub offline_catalog: Option<PathBuf>,
}

fn default_base_url() -> String {
    "http://localhost:54321".to_string()
}

fn default_table() -> String {
    "artists".to_string()
}

const fn default_timeout_secs() -> u64 {
    35
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            access_token: None,
            table: default_table(),
            timeout_secs: default_timeout_secs(),
            rate_limit_rps: None,
            offline_catalog: None,
        }
    }
}

/// Batch cache service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CacheConfig {
    /// Maximum resolver calls in flight at once (1-1024)
    #[serde(default = "default_max_concurrent_lookups")]
    pub max_concurrent_lookups: usize,

    /// Upper bound on a single resolver call, in milliseconds
    #[serde(default = "default_lookup_timeout_ms")]
    pub lookup_timeout_ms: u64,
}

const fn default_max_concurrent_lookups() -> usize {
    32
}

const fn default_lookup_timeout_ms() -> u64 {
    35_000
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_concurrent_lookups: default_max_concurrent_lookups(),
            lookup_timeout_ms: default_lookup_timeout_ms(),
        }
    }
}
