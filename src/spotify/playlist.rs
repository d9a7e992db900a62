use reqwest::Url;

use super::{MAX_ITEMS_PER_REQUEST, SpotifyClient, track_uri};
use crate::{
    remote::ClientError,
    types::{
        AddTracksRequest, CreatePlaylistRequest, CurrentUser, Paging, Playlist, PlaylistItem,
        PlaylistRef, RemoveTracksRequest, SnapshotResponse, TrackPage, TrackUri,
    },
};

const ITEM_FIELDS: &str = "next,items(track(id,name,popularity,duration_ms,artists(name),album(id,name,images(url))))";

/// Walks every page of `/me/playlists` until a playlist named exactly `name`
/// shows up.
pub(super) async fn find_by_name(
    client: &SpotifyClient,
    name: &str,
) -> Result<Option<PlaylistRef>, ClientError> {
    let mut next = Some(client.endpoint("/me/playlists?limit=50"));

    while let Some(url) = next {
        let page = client.get_json::<Paging<Playlist>>(&url).await?;
        if let Some(found) = page.items.into_iter().find(|p| p.name == name) {
            return Ok(Some(PlaylistRef {
                id: found.id,
                name: found.name,
            }));
        }
        next = page.next;
    }

    Ok(None)
}

/// Creates a private, non-collaborative playlist for the current user.
pub(super) async fn create(client: &SpotifyClient, name: &str) -> Result<PlaylistRef, ClientError> {
    let user = client
        .get_json::<CurrentUser>(&client.endpoint("/me"))
        .await?;

    let body = CreatePlaylistRequest {
        name: name.to_string(),
        description: "Created by spotlistcli".to_string(),
        public: false,
        collaborative: false,
    };

    let url = client.endpoint(&format!("/users/{}/playlists", user.id));
    let response = client
        .authorized(client.http.post(&url).json(&body))
        .await?;
    let playlist = response.json::<Playlist>().await?;

    Ok(PlaylistRef {
        id: playlist.id,
        name: playlist.name,
    })
}

/// Fetches one page of playlist items. The cursor is the absolute `next` URL
/// returned by the previous page.
pub(super) async fn get_items_page(
    client: &SpotifyClient,
    playlist_id: &str,
    cursor: Option<String>,
) -> Result<TrackPage, ClientError> {
    let url = match cursor {
        Some(next) => next,
        None => {
            let base = client.endpoint(&format!("/playlists/{}/tracks", playlist_id));
            Url::parse_with_params(&base, &[("limit", "100"), ("fields", ITEM_FIELDS)])
                .map_err(|e| ClientError::Decode(format!("invalid playlist url: {}", e)))?
                .to_string()
        }
    };

    let page = client.get_json::<Paging<PlaylistItem>>(&url).await?;

    Ok(TrackPage {
        items: page
            .items
            .into_iter()
            .map(|item| item.track.and_then(|t| t.into_track()))
            .collect(),
        next: page.next,
    })
}

/// Inserts the tracks in batches of 100. With a position, each batch is placed
/// right behind the previous one so the overall order is preserved.
pub(super) async fn add_tracks(
    client: &SpotifyClient,
    playlist_id: &str,
    track_ids: &[String],
    position: Option<usize>,
) -> Result<(), ClientError> {
    let url = client.endpoint(&format!("/playlists/{}/tracks", playlist_id));

    for (i, chunk) in track_ids.chunks(MAX_ITEMS_PER_REQUEST).enumerate() {
        let body = AddTracksRequest {
            uris: chunk.iter().map(|id| track_uri(id)).collect(),
            position: position.map(|p| p + i * MAX_ITEMS_PER_REQUEST),
        };

        client
            .authorized(client.http.post(&url).json(&body))
            .await?
            .json::<SnapshotResponse>()
            .await?;
    }

    Ok(())
}

/// Removes all occurrences of the given tracks, 100 ids per request.
pub(super) async fn remove_tracks(
    client: &SpotifyClient,
    playlist_id: &str,
    track_ids: &[String],
) -> Result<(), ClientError> {
    let url = client.endpoint(&format!("/playlists/{}/tracks", playlist_id));

    for chunk in track_ids.chunks(MAX_ITEMS_PER_REQUEST) {
        let body = RemoveTracksRequest {
            tracks: chunk
                .iter()
                .map(|id| TrackUri { uri: track_uri(id) })
                .collect(),
        };

        client
            .authorized(client.http.delete(&url).json(&body))
            .await?
            .json::<SnapshotResponse>()
            .await?;
    }

    Ok(())
}
