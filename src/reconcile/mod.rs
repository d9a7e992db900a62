//! # Playlist Reconcilers
//!
//! Each reconciler fetches the current state of a remote playlist through a
//! [`PlaylistClient`], computes the desired state locally and applies the
//! difference with the coarse mutations the API offers: insert at a position
//! and remove every occurrence of a track id.
//!
//! - [`deduplicate`] - keeps the first occurrence of every track
//! - [`sort_playlist`] - reorders by title, popularity, duration or randomly
//! - [`import_rows`] - resolves CSV rows via search and adds them in bulk
//! - [`export_playlist`] - writes the playlist to CSV in playlist order
//! - [`export_album_covers`] - downloads one cover per distinct album
//!
//! None of the mutating reconcilers is atomic. Calls are issued one after the
//! other and a failure aborts the remaining steps, so an interrupted run may
//! leave the playlist partially deduplicated, or in the case of sorting,
//! partially emptied. They also assume nobody else edits the playlist while
//! they run.

mod covers;
mod dedup;
mod export;
mod import;
mod snapshot;
mod sort;

use std::{fmt, io};

pub use covers::{AlbumCover, CoverOutcome, collect_album_covers, export_album_covers};
pub use dedup::{DedupOutcome, deduplicate};
pub use export::export_playlist;
pub use import::{ImportOutcome, import_rows, target_playlist};
pub use snapshot::{DuplicateGroup, PlaylistSnapshot, fetch_snapshot};
pub use sort::{SortOutcome, sort_playlist, sort_tracks};

use crate::{
    management::CsvError,
    remote::{ClientError, PlaylistClient},
    types::PlaylistRef,
};

#[derive(Debug)]
pub enum ReconcileError {
    PlaylistNotFound(String),
    Client(ClientError),
    Csv(CsvError),
    Io(io::Error),
}

impl fmt::Display for ReconcileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconcileError::PlaylistNotFound(name) => write!(f, "Playlist {} not found.", name),
            ReconcileError::Client(e) => write!(f, "Spotify API error: {}", e),
            ReconcileError::Csv(e) => write!(f, "CSV error: {}", e),
            ReconcileError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ReconcileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReconcileError::PlaylistNotFound(_) => None,
            ReconcileError::Client(e) => Some(e),
            ReconcileError::Csv(e) => Some(e),
            ReconcileError::Io(e) => Some(e),
        }
    }
}

impl From<ClientError> for ReconcileError {
    fn from(err: ClientError) -> Self {
        ReconcileError::Client(err)
    }
}

impl From<CsvError> for ReconcileError {
    fn from(err: CsvError) -> Self {
        ReconcileError::Csv(err)
    }
}

impl From<io::Error> for ReconcileError {
    fn from(err: io::Error) -> Self {
        ReconcileError::Io(err)
    }
}

/// Resolves a playlist that must already exist.
pub async fn resolve_playlist(
    client: &dyn PlaylistClient,
    name: &str,
) -> Result<PlaylistRef, ReconcileError> {
    client
        .find_playlist(name)
        .await?
        .ok_or_else(|| ReconcileError::PlaylistNotFound(name.to_string()))
}
