use std::path::PathBuf;

use crate::{error, reconcile, success, warning};

pub async fn export_playlist_album_covers(playlist_name: String, output_directory: PathBuf) {
    let client = super::connect().await;
    let playlist = super::resolve(&client, &playlist_name).await;

    let outcome =
        match reconcile::export_album_covers(&client, &playlist, &output_directory).await {
            Ok(outcome) => outcome,
            Err(e) => error!("Export of album covers failed: {}", e),
        };

    if outcome.failed > 0 {
        warning!("{} album covers could not be downloaded", outcome.failed);
    }

    success!(
        "Saved {} album covers of playlist {} to {}",
        outcome.downloaded,
        playlist.name,
        output_directory.display()
    );
}
