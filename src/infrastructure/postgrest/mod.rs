//! PostgREST artist store
//!
//! Resolves artists against a Supabase/PostgREST `artists` table over HTTP.

pub mod client;
pub mod types;

pub use client::PostgrestArtistStore;
pub use types::{ArtistRow, NameRow};
