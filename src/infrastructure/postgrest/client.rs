use anyhow::{Context, Result};
use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use reqwest::{header, Client as ReqwestClient, StatusCode};
use serde::de::DeserializeOwned;
use std::num::NonZeroU32;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use super::types::{ArtistRow, NameRow};
use crate::domain::errors::{ResolveError, ResolveResult};
use crate::domain::models::{Artist, ArtistId, StoreConfig};
use crate::domain::ports::ArtistResolver;

/// Artist resolver backed by a PostgREST (Supabase) table
///
/// Every lookup is a single `GET {base_url}/rest/v1/{table}` filtered by
/// primary key. There is no retry layer; a failed request is reported to the
/// caller as-is.
pub struct PostgrestArtistStore {
    /// Reusable HTTP client with connection pooling
    http_client: ReqwestClient,

    /// Fully qualified table endpoint
    endpoint: String,

    /// Per-request timeout, reported in `ResolveError::Timeout`
    timeout: Duration,

    /// Optional client-side request throttle
    rate_limiter: Option<DefaultDirectRateLimiter>,
}

impl PostgrestArtistStore {
    /// Build a store client from configuration
    ///
    /// # Errors
    /// Fails if a credential is not a valid header value or the HTTP client
    /// cannot be built
    pub fn new(config: &StoreConfig) -> Result<Self> {
        info!(
            base_url = %config.base_url,
            table = %config.table,
            timeout_secs = config.timeout_secs,
            rate_limit_rps = ?config.rate_limit_rps,
            api_key = %redact(&config.api_key),
            "Initializing PostgREST artist store"
        );

        let mut headers = header::HeaderMap::new();
        if !config.api_key.is_empty() {
            headers.insert("apikey", sensitive_header(&config.api_key)?);
        }
        let bearer = config
            .access_token
            .as_deref()
            .filter(|token| !token.is_empty())
            .unwrap_or(&config.api_key);
        if !bearer.is_empty() {
            headers.insert(
                header::AUTHORIZATION,
                sensitive_header(&format!("Bearer {bearer}"))?,
            );
        }
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let timeout = Duration::from_secs(config.timeout_secs);
        let http_client = ReqwestClient::builder()
            .pool_max_idle_per_host(10)
            .timeout(timeout)
            .tcp_nodelay(true)
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        let rate_limiter = config
            .rate_limit_rps
            .and_then(NonZeroU32::new)
            .map(|rps| RateLimiter::direct(Quota::per_second(rps)));

        Ok(Self {
            http_client,
            endpoint: format!(
                "{}/rest/v1/{}",
                config.base_url.trim_end_matches('/'),
                config.table
            ),
            timeout,
            rate_limiter,
        })
    }

    /// Fetch at most one row by primary key, projected onto `columns`
    #[instrument(level = "debug", skip(self, id), fields(artist_id = %id))]
    async fn select_one<T: DeserializeOwned>(
        &self,
        id: ArtistId,
        columns: &str,
    ) -> ResolveResult<Option<T>> {
        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }

        let response = self
            .http_client
            .get(&self.endpoint)
            .query(&[
                ("id", format!("eq.{id}")),
                ("select", columns.to_string()),
                ("limit", "1".to_string()),
            ])
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        debug!(%status, "PostgREST response");

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            warn!(%status, body = %body, "PostgREST request rejected");
            return Err(ResolveError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await.map_err(|e| self.classify(e))?;
        let mut rows: Vec<T> = serde_json::from_slice(&body)?;

        if rows.is_empty() {
            Ok(None)
        } else {
            Ok(Some(rows.swap_remove(0)))
        }
    }

    /// Map a reqwest failure onto the resolver error model
    fn classify(&self, err: reqwest::Error) -> ResolveError {
        if err.is_timeout() {
            ResolveError::Timeout(self.timeout)
        } else if err.is_decode() {
            ResolveError::Decode(err.to_string())
        } else {
            ResolveError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl ArtistResolver for PostgrestArtistStore {
    async fn fetch_artist(&self, id: ArtistId) -> ResolveResult<Option<Artist>> {
        let row: Option<ArtistRow> = self.select_one(id, "*").await?;
        Ok(row.map(ArtistRow::into_artist))
    }

    async fn fetch_display_name(&self, id: ArtistId) -> ResolveResult<Option<String>> {
        let row: Option<NameRow> = self.select_one(id, "name").await?;
        Ok(row.map(|r| r.name))
    }
}

fn sensitive_header(value: &str) -> Result<header::HeaderValue> {
    let mut value =
        header::HeaderValue::from_str(value).context("Credential is not a valid header value")?;
    value.set_sensitive(true);
    Ok(value)
}

/// Keep a short prefix of a credential for log correlation
fn redact(secret: &str) -> String {
    if secret.chars().count() > 8 {
        let prefix: String = secret.chars().take(8).collect();
        format!("{prefix}...[REDACTED]")
    } else {
        "[REDACTED]".to_string()
    }
}
