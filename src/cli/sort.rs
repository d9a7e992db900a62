use crate::{
    error, reconcile, success,
    types::{SortKey, SortOrder},
};

pub async fn sort_playlist(playlist_name: String, sort_by: SortKey, order: SortOrder) {
    let client = super::connect().await;
    let playlist = super::resolve(&client, &playlist_name).await;

    match reconcile::sort_playlist(&client, &playlist, sort_by, order).await {
        Ok(outcome) if outcome.tracks == 0 => {}
        Ok(_) if sort_by == SortKey::Random => {
            success!("Playlist {} sorted randomly", playlist.name)
        }
        Ok(_) => success!(
            "Playlist {} sorted by {} in {} order",
            playlist.name,
            sort_by,
            order
        ),
        Err(e) => error!("Sorting playlist {} failed: {}", playlist.name, e),
    }
}
