//! Artist identity and record types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque identifier of an artist in the remote store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtistId(Uuid);

impl ArtistId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ArtistId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ArtistId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<ArtistId> for Uuid {
    fn from(id: ArtistId) -> Self {
        id.0
    }
}

impl FromStr for ArtistId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for ArtistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A resolved artist record.
///
/// Records are treated as immutable snapshots of the remote store; nothing in
/// this crate mutates one after it has been fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: ArtistId,

    /// Canonical display name.
    pub name: String,

    /// Group or affiliation. Solo acts and groups are their own affiliation.
    #[serde(default)]
    pub group: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,

    /// Management agency, e.g. "HYBE".
    #[serde(default)]
    pub agency: Option<String>,

    #[serde(default)]
    pub debut_year: Option<i32>,

    #[serde(default)]
    pub genres: Vec<String>,
}

impl Artist {
    /// Create an artist with only the required fields set.
    pub fn new(id: ArtistId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            group: None,
            image_url: None,
            agency: None,
            debut_year: None,
            genres: Vec::new(),
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_agency(mut self, agency: impl Into<String>) -> Self {
        self.agency = Some(agency.into());
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}
