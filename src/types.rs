use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// A track as seen in a playlist. Identity is the Spotify id.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artists: Vec<String>,
    pub album: AlbumInfo,
    pub duration_ms: u64,
    pub popularity: u32,
}

impl Track {
    /// First credited artist, or an empty string for tracks without artists.
    pub fn main_artist(&self) -> &str {
        self.artists.first().map(String::as_str).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlbumInfo {
    pub id: String,
    pub name: String,
    /// Image URLs, largest first as delivered by the API.
    pub images: Vec<String>,
}

/// A playlist resolved on the remote service.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistRef {
    pub id: String,
    pub name: String,
}

/// One page of playlist items. `None` entries are local or unavailable
/// tracks without a Spotify id; they still occupy a position.
#[derive(Debug, Clone, Default)]
pub struct TrackPage {
    pub items: Vec<Option<Track>>,
    pub next: Option<String>,
}

/// Search parameters for resolving a CSV row to a Spotify track.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackQuery {
    pub artist: String,
    pub title: String,
    pub album: Option<String>,
    pub release_year: Option<String>,
}

impl TrackQuery {
    /// Spotify search syntax, e.g. `artist:Air track:La Femme d'Argent year:1998`.
    pub fn to_search_string(&self) -> String {
        let mut query = format!("artist:{} track:{}", self.artist, self.title);
        if let Some(album) = &self.album {
            query.push_str(&format!(" album:{}", album));
        }
        if let Some(year) = &self.release_year {
            query.push_str(&format!(" year:{}", year));
        }
        query
    }
}

/// A row of an import file. Header names are matched case-insensitively and
/// all values are trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvRow {
    pub artist: String,
    pub title: String,
    pub album: Option<String>,
    pub release_year: Option<String>,
    /// Every cleaned value in header order, used to write the unresolved report
    /// with the same columns as the input.
    pub values: Vec<String>,
}

impl CsvRow {
    pub fn query(&self) -> TrackQuery {
        TrackQuery {
            artist: self.artist.clone(),
            title: self.title.clone(),
            album: self.album.clone(),
            release_year: self.release_year.clone(),
        }
    }
}

/// Parsed import file: normalized headers plus rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrackSheet {
    pub headers: Vec<String>,
    pub rows: Vec<CsvRow>,
}

#[derive(Tabled)]
pub struct UnresolvedTableRow {
    pub artist: String,
    pub title: String,
    pub album: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    Title,
    Popularity,
    Duration,
    Random,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::Title => "title",
            SortKey::Popularity => "popularity",
            SortKey::Duration => "duration",
            SortKey::Random => "random",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

// Spotify Web API payloads

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<ApiTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiTrack {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<ApiArtist>,
    pub album: Option<ApiAlbum>,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub popularity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiAlbum {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub images: Vec<ApiImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiImage {
    pub url: String,
}

impl ApiTrack {
    /// Converts into a domain [`Track`]; tracks without an id (local files)
    /// yield `None`.
    pub fn into_track(self) -> Option<Track> {
        let id = self.id?;
        let album = self
            .album
            .map(|a| AlbumInfo {
                id: a.id.unwrap_or_default(),
                name: a.name,
                images: a.images.into_iter().map(|i| i.url).collect(),
            })
            .unwrap_or_default();

        Some(Track {
            id,
            name: self.name,
            artists: self.artists.into_iter().map(|a| a.name).collect(),
            album,
            duration_ms: self.duration_ms,
            popularity: self.popularity,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: Paging<ApiTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveTracksRequest {
    pub tracks: Vec<TrackUri>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackUri {
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotResponse {
    pub snapshot_id: String,
}
