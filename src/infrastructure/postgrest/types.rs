/// Row types returned by the PostgREST artists table
use serde::Deserialize;

use crate::domain::models::{Artist, ArtistId};

/// Full artist row (`select=*`)
///
/// Columns the crate does not model (popularity, keywords, timestamps, ...)
/// are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistRow {
    pub id: ArtistId,

    pub name: String,

    /// Parent group for members; null for solo acts and groups
    #[serde(default)]
    pub group_name: Option<String>,

    #[serde(default)]
    pub agency: Option<String>,

    #[serde(default)]
    pub debut_year: Option<i32>,

    /// Nullable text[] column
    #[serde(default)]
    pub genres: Option<Vec<String>>,

    #[serde(default)]
    pub image_url: Option<String>,
}

impl ArtistRow {
    /// Convert into the domain record; an artist without a parent group is
    /// its own group.
    pub fn into_artist(self) -> Artist {
        let group = self.group_name.unwrap_or_else(|| self.name.clone());
        Artist {
            id: self.id,
            name: self.name,
            group: Some(group),
            image_url: self.image_url,
            agency: self.agency,
            debut_year: self.debut_year,
            genres: self.genres.unwrap_or_default(),
        }
    }
}

/// Projection used for name-only lookups (`select=name`)
#[derive(Debug, Clone, Deserialize)]
pub struct NameRow {
    pub name: String,
}
