//! # Remote Playlist Client
//!
//! The small capability set every playlist command needs from the music service.
//! The Spotify Web API implementation lives in [`crate::spotify::SpotifyClient`];
//! tests substitute an in-memory implementation.
//!
//! All calls are awaited one after another by the callers. Nothing here retries:
//! any transport or API failure surfaces as a [`ClientError`] and aborts the
//! current command.

use std::fmt;

use async_trait::async_trait;

use crate::types::{PlaylistRef, TrackPage, TrackQuery};

#[derive(Debug)]
pub enum ClientError {
    Http(reqwest::Error),
    Api { status: u16, message: String },
    Auth(String),
    Decode(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Http(e) => write!(f, "request failed: {}", e),
            ClientError::Api { status, message } => {
                write!(f, "API responded with {}: {}", status, message)
            }
            ClientError::Auth(msg) => write!(f, "not authorized: {}", msg),
            ClientError::Decode(msg) => write!(f, "unexpected response: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Http(err)
        }
    }
}

#[async_trait]
pub trait PlaylistClient: Send + Sync {
    /// Looks up one of the current user's playlists by exact name.
    async fn find_playlist(&self, name: &str) -> Result<Option<PlaylistRef>, ClientError>;

    /// Creates a private playlist owned by the current user.
    async fn create_playlist(&self, name: &str) -> Result<PlaylistRef, ClientError>;

    /// Fetches one page of playlist items. `cursor` is the `next` value of the
    /// previous page, `None` for the first page.
    async fn playlist_page(
        &self,
        playlist_id: &str,
        cursor: Option<String>,
    ) -> Result<TrackPage, ClientError>;

    /// Inserts `track_ids` in order at `position`, or appends when `None`.
    async fn add_tracks(
        &self,
        playlist_id: &str,
        track_ids: &[String],
        position: Option<usize>,
    ) -> Result<(), ClientError>;

    /// Removes every occurrence of each of `track_ids`.
    async fn remove_tracks(&self, playlist_id: &str, track_ids: &[String])
    -> Result<(), ClientError>;

    /// Returns the id of the top search result, if any.
    async fn search_track(&self, query: &TrackQuery) -> Result<Option<String>, ClientError>;

    /// Downloads a resource such as an album cover image.
    async fn download(&self, url: &str) -> Result<Vec<u8>, ClientError>;
}
