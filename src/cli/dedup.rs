use crate::{error, info, reconcile, success};

pub async fn deduplicate_playlist(playlist_name: String) {
    let client = super::connect().await;
    let playlist = super::resolve(&client, &playlist_name).await;

    info!("Deduplicating playlist {}", playlist.name);

    match reconcile::deduplicate(&client, &playlist).await {
        Ok(outcome) if outcome.copies_removed == 0 => {
            success!("Playlist {} contains no duplicates", playlist.name)
        }
        Ok(outcome) => success!(
            "Removed {} duplicate entries of {} tracks from playlist {}",
            outcome.copies_removed,
            outcome.tracks_deduplicated,
            playlist.name
        ),
        Err(e) => error!(
            "Deduplication of playlist {} aborted, it may be partially deduplicated: {}",
            playlist.name,
            e
        ),
    }
}
