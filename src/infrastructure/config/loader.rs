use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::Config;
use crate::infrastructure::logging::parse_log_level;

/// Project-local configuration directory
pub const CONFIG_DIR: &str = ".artist-cache";

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "ARTIST_CACHE_";

/// Upper bound for `cache.max_concurrent_lookups`
pub const MAX_CONCURRENT_LOOKUPS_LIMIT: usize = 1024;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Store base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("Invalid store base_url: {0}. Must be an http or https URL")]
    InvalidBaseUrl(String),

    #[error("Store table cannot be empty")]
    EmptyTable,

    #[error("Invalid timeout_secs: 0. Must be at least 1")]
    ZeroTimeout,

    #[error("Invalid rate_limit_rps: 0. Omit it to disable rate limiting")]
    ZeroRateLimit,

    #[error("Invalid max_concurrent_lookups: {0}. Must be between 1 and 1024")]
    InvalidMaxConcurrentLookups(usize),

    #[error("Invalid lookup_timeout_ms: 0. Must be at least 1")]
    ZeroLookupTimeout,

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .artist-cache/config.yaml
    /// 3. .artist-cache/local.yaml (optional overrides)
    /// 4. Environment variables (`ARTIST_CACHE_*`, `__` for nesting)
    pub fn load() -> Result<Config> {
        Self::load_from_dir(CONFIG_DIR)
    }

    /// Same as [`ConfigLoader::load`], rooted at `dir` instead of the
    /// working directory's `.artist-cache`
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Config> {
        let dir = dir.as_ref();
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(dir.join("config.yaml")))
            .merge(Yaml::file(dir.join("local.yaml")))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// Environment variables still take precedence over the file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let store = &config.store;

        if store.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }

        match reqwest::Url::parse(&store.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => return Err(ConfigError::InvalidBaseUrl(store.base_url.clone())),
        }

        if store.table.trim().is_empty() {
            return Err(ConfigError::EmptyTable);
        }

        if store.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        if store.rate_limit_rps == Some(0) {
            return Err(ConfigError::ZeroRateLimit);
        }

        let max = config.cache.max_concurrent_lookups;
        if max == 0 || max > MAX_CONCURRENT_LOOKUPS_LIMIT {
            return Err(ConfigError::InvalidMaxConcurrentLookups(max));
        }

        if config.cache.lookup_timeout_ms == 0 {
            return Err(ConfigError::ZeroLookupTimeout);
        }

        if parse_log_level(&config.logging.level).is_err() {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        Ok(())
    }
}
