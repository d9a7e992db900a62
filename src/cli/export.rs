use std::path::PathBuf;

use crate::{error, reconcile, success};

pub async fn export_playlist(playlist_name: String, output_file: PathBuf, skip_album: bool) {
    let client = super::connect().await;
    let playlist = super::resolve(&client, &playlist_name).await;

    match reconcile::export_playlist(&client, &playlist, &output_file, !skip_album).await {
        Ok(count) => success!(
            "Exported {} tracks of playlist {} to {}",
            count,
            playlist.name,
            output_file.display()
        ),
        Err(e) => error!("Export of playlist {} failed: {}", playlist.name, e),
    }
}
