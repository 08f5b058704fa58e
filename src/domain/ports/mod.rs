//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the async trait interfaces that infrastructure adapters
//! must implement:
//! - ArtistResolver: single-identifier artist and display-name lookups
//!
//! The batch cache service depends only on these traits, so any store (HTTP,
//! in-memory, test fake) can sit behind it.

pub mod artist_resolver;

pub use artist_resolver::ArtistResolver;
