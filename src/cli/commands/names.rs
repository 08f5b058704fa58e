//! `names` command: resolve display names.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashSet;

use super::CliService;
use crate::cli::output::{list_table, output, CommandOutput};
use crate::domain::models::ArtistId;

#[derive(Debug, Serialize)]
pub struct NameOutput {
    pub id: String,
    pub name: String,
    /// False when `name` is the fallback placeholder
    pub resolved: bool,
}

#[derive(Debug, Serialize)]
pub struct NamesOutput {
    pub names: Vec<NameOutput>,
    pub total: usize,
    pub unresolved: usize,
}

impl CommandOutput for NamesOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["id", "name"]);
        for entry in &self.names {
            let name = if entry.resolved {
                entry.name.clone()
            } else {
                format!("{} (unresolved)", entry.name)
            };
            table.add_row(vec![entry.id.clone(), name]);
        }

        format!(
            "{} name(s), {} unresolved:\n{}",
            self.total, self.unresolved, table
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Resolve names for `ids`, listed in first-seen input order.
pub async fn build_output(service: &CliService, ids: &[ArtistId]) -> NamesOutput {
    let resolved = service.display_names(ids).await;

    let mut seen = HashSet::new();
    let mut names = Vec::with_capacity(resolved.len());
    for &id in ids {
        if !seen.insert(id) {
            continue;
        }
        let Some(name) = resolved.get(&id) else {
            continue;
        };
        // Only successful lookups are cached.
        let cached = service.cached_display_name(id).await.is_some();
        names.push(NameOutput {
            id: id.to_string(),
            name: name.clone(),
            resolved: cached,
        });
    }

    let unresolved = names.iter().filter(|n| !n.resolved).count();
    NamesOutput {
        total: names.len(),
        unresolved,
        names,
    }
}

pub async fn execute(service: &CliService, ids: &[ArtistId], json_mode: bool) -> Result<()> {
    let result = build_output(service, ids).await;
    output(&result, json_mode);
    Ok(())
}
