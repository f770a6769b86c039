//! Normalizes responses from YouTube's internal query API into a small set
//! of stable, strongly-typed entities: [`Video`], [`Playlist`],
//! [`PlaylistItem`], [`SearchResult`] and [`SearchListResponse`]. The raw
//! payload is deeply nested and polymorphic; only the paths this crate
//! consumes are modeled, everything else is ignored so upstream schema drift
//! stays harmless.

use thiserror::Error;

#[cfg(test)]
mod tests;

pub mod model;

mod assemble;
mod client;
mod extract;
mod transport;

pub use client::{Client, SearchOptions};
pub use model::{
    Playlist, PlaylistItem, SearchListResponse, SearchResult, Video,
};
pub use transport::{Fetch, InnerTube, Request, SearchKind};

/// The only hard failures: normalization itself never raises on partial or
/// missing data.
#[derive(Debug, Error)]
pub enum Error {
    /// The transport collaborator could not produce a payload.
    #[error("transport failure: {0}")]
    Transport(anyhow::Error),
    /// The payload is not a JSON tree at all.
    #[error("undecodable payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Transport(err)
    }
}
