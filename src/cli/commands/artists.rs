//! `artists` command: resolve full artist records.

use anyhow::Result;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

use super::CliService;
use crate::cli::output::{list_table, output, truncate, CommandOutput};
use crate::domain::models::{Artist, ArtistId};

#[derive(Debug, Serialize)]
pub struct ArtistsOutput {
    pub artists: Vec<Artist>,
    /// Identifiers that could not be resolved
    pub missing: Vec<String>,
    pub total: usize,
}

impl CommandOutput for ArtistsOutput {
    fn to_human(&self) -> String {
        let mut lines = Vec::new();

        if self.artists.is_empty() {
            lines.push("No artists found.".to_string());
        } else {
            let mut table = list_table(&["id", "name", "group", "agency", "debut"]);
            for artist in &self.artists {
                table.add_row(vec![
                    artist.id.to_string(),
                    truncate(&artist.name, 30),
                    truncate(artist.group.as_deref().unwrap_or("-"), 30),
                    truncate(artist.agency.as_deref().unwrap_or("-"), 24),
                    artist
                        .debut_year
                        .map_or_else(|| "-".to_string(), |year| year.to_string()),
                ]);
            }
            lines.push(format!("{} artist(s):", self.total));
            lines.push(table.to_string());
        }

        if !self.missing.is_empty() {
            lines.push(format!("Unresolved: {}", self.missing.join(", ")));
        }

        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Resolve records for `ids`, listed in first-seen input order.
pub async fn build_output(service: &CliService, ids: &[ArtistId]) -> ArtistsOutput {
    let mut by_id: HashMap<ArtistId, Artist> = service
        .artists(ids)
        .await
        .into_iter()
        .map(|artist| (artist.id, artist))
        .collect();

    let mut seen = HashSet::new();
    let mut artists = Vec::with_capacity(by_id.len());
    let mut missing = Vec::new();
    for &id in ids {
        if !seen.insert(id) {
            continue;
        }
        match by_id.remove(&id) {
            Some(artist) => artists.push(artist),
            None => missing.push(id.to_string()),
        }
    }

    ArtistsOutput {
        total: artists.len(),
        artists,
        missing,
    }
}

pub async fn execute(service: &CliService, ids: &[ArtistId], json_mode: bool) -> Result<()> {
    let result = build_output(service, ids).await;
    output(&result, json_mode);
    Ok(())
}
