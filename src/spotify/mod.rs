//! # Spotify Integration Module
//!
//! Implements [`PlaylistClient`] on top of the Spotify Web API and provides the
//! OAuth 2.0 PKCE flow that yields the access token every other call needs.
//!
//! ## Architecture
//!
//! ```text
//! Reconcilers (dedup, sort, import, export)
//!          ↓
//! PlaylistClient trait
//!          ↓
//! SpotifyClient
//!     ├── playlist - lookup, create, paging, add, remove
//!     └── search   - track search
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## API Coverage
//!
//! - `GET /me` - Current user id for playlist creation
//! - `GET /me/playlists` - Playlist lookup by name
//! - `POST /users/{user_id}/playlists` - Create private playlists
//! - `GET /playlists/{playlist_id}/tracks` - Paginated playlist items
//! - `POST /playlists/{playlist_id}/tracks` - Insert tracks (100 per request)
//! - `DELETE /playlists/{playlist_id}/tracks` - Remove all occurrences (100 per request)
//! - `GET /search` - Track search
//! - `POST /api/token` - Token exchange and refresh
//!
//! ## Error Handling
//!
//! Non-success responses are turned into [`ClientError::Api`] (or
//! [`ClientError::Auth`] for 401) with the response body as message. There is
//! no retry logic: a `429 Too Many Requests` reports its `Retry-After` value and
//! aborts the command like any other failure.

pub mod auth;
mod playlist;
mod search;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::{
    config,
    management::TokenManager,
    remote::{ClientError, PlaylistClient},
    types::{PlaylistRef, TrackPage, TrackQuery},
};

/// Maximum number of track URIs the API accepts in one add or remove request.
pub const MAX_ITEMS_PER_REQUEST: usize = 100;

/// Spotify Web API client holding the user's token for one command invocation.
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    token_mgr: Mutex<TokenManager>,
}

impl SpotifyClient {
    pub fn new(token_mgr: TokenManager, api_url: String) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            token_mgr: Mutex::new(token_mgr),
        }
    }

    /// Builds a client from the token stored by `spotlistcli auth`.
    pub async fn connect() -> Result<Self, ClientError> {
        let token_mgr = TokenManager::load().await.map_err(|e| {
            ClientError::Auth(format!(
                "failed to load token, please run spotlistcli auth ({})",
                e
            ))
        })?;

        Ok(Self::new(token_mgr, config::spotify_apiurl()))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    async fn authorized(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let token = self.token_mgr.lock().await.get_valid_token().await;
        let response = request.bearer_auth(token).send().await?;
        check_status(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        let response = self.authorized(self.http.get(url)).await?;
        Ok(response.json::<T>().await?)
    }
}

async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
            .to_string();
        return Err(ClientError::Api {
            status: status.as_u16(),
            message: format!("rate limited, retry after {} seconds", retry_after),
        });
    }

    let message = response.text().await.unwrap_or_default();
    if status == StatusCode::UNAUTHORIZED {
        return Err(ClientError::Auth(message));
    }

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

fn track_uri(id: &str) -> String {
    format!("spotify:track:{}", id)
}

#[async_trait]
impl PlaylistClient for SpotifyClient {
    async fn find_playlist(&self, name: &str) -> Result<Option<PlaylistRef>, ClientError> {
        playlist::find_by_name(self, name).await
    }

    async fn create_playlist(&self, name: &str) -> Result<PlaylistRef, ClientError> {
        playlist::create(self, name).await
    }

    async fn playlist_page(
        &self,
        playlist_id: &str,
        cursor: Option<String>,
    ) -> Result<TrackPage, ClientError> {
        playlist::get_items_page(self, playlist_id, cursor).await
    }

    async fn add_tracks(
        &self,
        playlist_id: &str,
        track_ids: &[String],
        position: Option<usize>,
    ) -> Result<(), ClientError> {
        playlist::add_tracks(self, playlist_id, track_ids, position).await
    }

    async fn remove_tracks(
        &self,
        playlist_id: &str,
        track_ids: &[String],
    ) -> Result<(), ClientError> {
        playlist::remove_tracks(self, playlist_id, track_ids).await
    }

    async fn search_track(&self, query: &TrackQuery) -> Result<Option<String>, ClientError> {
        search::first_track_id(self, query).await
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, ClientError> {
        let response = self.http.get(url).send().await?;
        let response = check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }
}
