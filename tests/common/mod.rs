//! Common test utilities for integration tests
//!
//! Provides a scriptable in-process resolver shared by the service and
//! concurrency test suites.

#![allow(dead_code)]

use artist_cache::{Artist, ArtistId, ArtistResolver, ResolveError, ResolveResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// How the fake answers for one identifier
#[derive(Debug, Clone)]
pub enum Behavior {
    Found(Artist),
    NotFound,
    TransportFailure,
    DecodeFailure,
    /// Never completes
    Hang,
}

/// Scriptable resolver with call counters and in-flight tracking
///
/// Identifiers without a scripted behavior are not found, unless the fake was
/// built with [`FakeArtistResolver::echo`], in which case they resolve to
/// [`echo_name`].
pub struct FakeArtistResolver {
    behaviors: Mutex<HashMap<ArtistId, Behavior>>,
    echo: bool,
    latency: Duration,
    name_calls: AtomicUsize,
    artist_calls: AtomicUsize,
    calls_by_id: Mutex<HashMap<ArtistId, usize>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

/// Name the echo fake gives an otherwise unknown identifier
pub fn echo_name(id: ArtistId) -> String {
    format!("Artist {id}")
}

impl FakeArtistResolver {
    pub fn new() -> Self {
        Self {
            behaviors: Mutex::new(HashMap::new()),
            echo: false,
            latency: Duration::ZERO,
            name_calls: AtomicUsize::new(0),
            artist_calls: AtomicUsize::new(0),
            calls_by_id: Mutex::new(HashMap::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    /// Resolve every unscripted identifier to [`echo_name`]
    pub fn echo() -> Self {
        Self {
            echo: true,
            ..Self::new()
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_artist(self, artist: Artist) -> Self {
        self.set(artist.id, Behavior::Found(artist));
        self
    }

    pub fn with_behavior(self, id: ArtistId, behavior: Behavior) -> Self {
        self.set(id, behavior);
        self
    }

    /// Change the behavior for `id` after construction
    pub fn set(&self, id: ArtistId, behavior: Behavior) {
        self.behaviors.lock().unwrap().insert(id, behavior);
    }

    pub fn name_calls(&self) -> usize {
        self.name_calls.load(Ordering::SeqCst)
    }

    pub fn artist_calls(&self) -> usize {
        self.artist_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.name_calls() + self.artist_calls()
    }

    pub fn calls_for(&self, id: ArtistId) -> usize {
        self.calls_by_id
            .lock()
            .unwrap()
            .get(&id)
            .copied()
            .unwrap_or(0)
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn behavior(&self, id: ArtistId) -> Behavior {
        match self.behaviors.lock().unwrap().get(&id) {
            Some(behavior) => behavior.clone(),
            None if self.echo => Behavior::Found(Artist::new(id, echo_name(id))),
            None => Behavior::NotFound,
        }
    }

    async fn respond(&self, id: ArtistId) -> ResolveResult<Option<Artist>> {
        *self.calls_by_id.lock().unwrap().entry(id).or_insert(0) += 1;

        let _guard = InFlightGuard::enter(self);

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        match self.behavior(id) {
            Behavior::Found(artist) => Ok(Some(artist)),
            Behavior::NotFound => Ok(None),
            Behavior::TransportFailure => {
                Err(ResolveError::Transport("connection reset by peer".to_string()))
            }
            Behavior::DecodeFailure => Err(ResolveError::Decode("expected array".to_string())),
            Behavior::Hang => std::future::pending().await,
        }
    }
}

impl Default for FakeArtistResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Decrements the in-flight counter even when the call is cancelled
struct InFlightGuard<'a> {
    counter: &'a AtomicUsize,
}

impl<'a> InFlightGuard<'a> {
    fn enter(fake: &'a FakeArtistResolver) -> Self {
        let now = fake.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        fake.max_in_flight.fetch_max(now, Ordering::SeqCst);
        Self {
            counter: &fake.in_flight,
        }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ArtistResolver for FakeArtistResolver {
    async fn fetch_artist(&self, id: ArtistId) -> ResolveResult<Option<Artist>> {
        self.artist_calls.fetch_add(1, Ordering::SeqCst);
        self.respond(id).await
    }

    async fn fetch_display_name(&self, id: ArtistId) -> ResolveResult<Option<String>> {
        self.name_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.respond(id).await?.map(|artist| artist.name))
    }
}

/// Generate `n` distinct identifiers
pub fn ids(n: usize) -> Vec<ArtistId> {
    (0..n).map(|_| ArtistId::new()).collect()
}
