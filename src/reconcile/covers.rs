use std::{collections::HashSet, path::Path, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use super::{ReconcileError, fetch_snapshot};
use crate::{
    info,
    remote::PlaylistClient,
    types::{PlaylistRef, Track},
    utils, warning,
};

#[derive(Debug, Clone, PartialEq)]
pub struct AlbumCover {
    pub key: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoverOutcome {
    pub downloaded: usize,
    pub failed: usize,
    pub without_image: usize,
}

/// One cover per distinct album, in order of first appearance. Returns the
/// covers and the keys of albums that have no image at all.
pub fn collect_album_covers(tracks: &[Track]) -> (Vec<AlbumCover>, Vec<String>) {
    let mut seen = HashSet::new();
    let mut covers = Vec::new();
    let mut missing = Vec::new();

    for track in tracks {
        let key = utils::album_cover_key(&track.album.name, &track.album.id);
        if !seen.insert(key.clone()) {
            continue;
        }

        match track.album.images.first() {
            Some(url) => covers.push(AlbumCover {
                key,
                url: url.clone(),
            }),
            None => missing.push(key),
        }
    }

    (covers, missing)
}

/// Downloads the cover of every album in the playlist into `directory` as
/// `<sanitized key>.jpg`, creating the directory if needed. Failed downloads
/// are reported and skipped; failing to write a file aborts.
pub async fn export_album_covers(
    client: &dyn PlaylistClient,
    playlist: &PlaylistRef,
    directory: &Path,
) -> Result<CoverOutcome, ReconcileError> {
    let tracks = fetch_snapshot(client, &playlist.id).await?.into_tracks();
    let (covers, missing) = collect_album_covers(&tracks);

    let mut outcome = CoverOutcome {
        without_image: missing.len(),
        ..Default::default()
    };

    for key in &missing {
        warning!("No album cover available for {}", key);
    }

    if covers.is_empty() {
        info!("No album covers found in playlist {}", playlist.name);
        return Ok(outcome);
    }

    async_fs::create_dir_all(directory).await?;

    let pb = ProgressBar::new(covers.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg} [{bar:30.blue}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );
    pb.set_message("Downloading album covers");
    pb.enable_steady_tick(Duration::from_millis(100));

    for cover in &covers {
        match client.download(&cover.url).await {
            Ok(bytes) => {
                let file = directory.join(format!("{}.jpg", utils::sanitize_filename(&cover.key)));
                if let Err(e) = async_fs::write(&file, bytes).await {
                    pb.finish_and_clear();
                    return Err(e.into());
                }
                outcome.downloaded += 1;
            }
            Err(e) => {
                pb.suspend(|| {
                    warning!(
                        "Failed to download album cover for {} from {}: {}",
                        cover.key,
                        cover.url,
                        e
                    )
                });
                outcome.failed += 1;
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(outcome)
}
