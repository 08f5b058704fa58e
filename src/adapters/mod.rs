//! Infrastructure adapters for artist stores.

pub mod catalog;
