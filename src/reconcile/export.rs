use std::path::Path;

use super::{ReconcileError, fetch_snapshot};
use crate::{info, management, remote::PlaylistClient, types::PlaylistRef};

/// Writes the playlist to `path` as `artist,title,album` (or `artist,title`
/// without album), one row per track in playlist order. Returns the number of
/// rows written.
pub async fn export_playlist(
    client: &dyn PlaylistClient,
    playlist: &PlaylistRef,
    path: &Path,
    include_album: bool,
) -> Result<usize, ReconcileError> {
    let snapshot = fetch_snapshot(client, &playlist.id).await?;

    if snapshot.is_empty() {
        info!("No tracks found in playlist {}", playlist.name);
    }

    let tracks = snapshot.into_tracks();
    management::write_tracks(path, &tracks, include_album)?;

    Ok(tracks.len())
}
