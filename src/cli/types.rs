//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::models::ArtistId;

#[derive(Parser, Debug)]
#[command(name = "artist-cache")]
#[command(about = "Resolve artist identifiers to names and records", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to .artist-cache/config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve display names
    Names {
        /// Artist identifiers (UUIDs)
        #[arg(required = true)]
        ids: Vec<ArtistId>,
    },

    /// Resolve full artist records
    Artists {
        /// Artist identifiers (UUIDs)
        #[arg(required = true)]
        ids: Vec<ArtistId>,
    },
}
