//! Domain errors for artist resolution.

use std::time::Duration;
use thiserror::Error;

/// Failure of a single resolver lookup.
///
/// "Not found" is deliberately absent: resolvers report a missing record as
/// `Ok(None)`, so every variant here is a genuine failure to reach or
/// interpret the remote store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// Network or connection-level failure.
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The store answered with a non-success HTTP status.
    #[error("Remote store returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The lookup did not complete in time.
    #[error("Lookup timed out after {0:?}")]
    Timeout(Duration),

    /// The store answered but the payload had an unexpected shape.
    #[error("Decode failure: {0}")]
    Decode(String),
}

impl ResolveError {
    /// Returns true for failures reaching the store (network, status, timeout).
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Status { .. } | Self::Timeout(_)
        )
    }

    /// Returns true when the store responded with an unreadable payload.
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

pub type ResolveResult<T> = Result<T, ResolveError>;

impl From<serde_json::Error> for ResolveError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
