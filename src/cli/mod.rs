//! Command-line interface
//!
//! Thin layer over [`ArtistCacheService`](crate::services::ArtistCacheService):
//! argument parsing, service wiring and output rendering.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands};

/// Report a command failure and exit with a non-zero status.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let error = serde_json::json!({
            "error": err.to_string(),
            "causes": err.chain().skip(1).map(ToString::to_string).collect::<Vec<_>>(),
        });
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&error).unwrap_or_default()
        );
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
