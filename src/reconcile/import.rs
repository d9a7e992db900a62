use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use super::ReconcileError;
use crate::{
    info,
    remote::PlaylistClient,
    types::{CsvRow, PlaylistRef},
    utils,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ImportOutcome {
    pub playlist: PlaylistRef,
    pub added: usize,
    /// Rows for which the search returned no track.
    pub unresolved: Vec<CsvRow>,
}

/// Picks the playlist to import into: an existing playlist with the given
/// name, a new one with that name, or a new `csv_playlist_<timestamp>` when no
/// name is given.
pub async fn target_playlist(
    client: &dyn PlaylistClient,
    name: Option<&str>,
    timestamp: &str,
) -> Result<PlaylistRef, ReconcileError> {
    let name = name.map(str::trim).filter(|n| !n.is_empty());

    match name {
        Some(name) => match client.find_playlist(name).await? {
            Some(existing) => {
                info!("Adding tracks to existing playlist {}", existing.name);
                Ok(existing)
            }
            None => {
                info!("Creating playlist {}", name);
                Ok(client.create_playlist(name).await?)
            }
        },
        None => {
            let generated = utils::generated_playlist_name(timestamp);
            info!("Creating playlist {}", generated);
            Ok(client.create_playlist(&generated).await?)
        }
    }
}

/// Resolves every row to a track id through search, then adds all resolved
/// ids in a single bulk call, in row order. Rows without a search result are
/// returned as unresolved; they do not fail the import.
pub async fn import_rows(
    client: &dyn PlaylistClient,
    rows: &[CsvRow],
    playlist_name: Option<&str>,
    timestamp: &str,
) -> Result<ImportOutcome, ReconcileError> {
    let playlist = target_playlist(client, playlist_name, timestamp).await?;

    let pb = ProgressBar::new(rows.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg} [{bar:30.blue}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );
    pb.set_message("Searching for matching tracks in Spotify");
    pb.enable_steady_tick(Duration::from_millis(100));

    let mut found_ids = Vec::new();
    let mut unresolved = Vec::new();

    for row in rows {
        let result = client.search_track(&row.query()).await;
        pb.inc(1);

        match result {
            Ok(Some(id)) => found_ids.push(id),
            Ok(None) => unresolved.push(row.clone()),
            Err(e) => {
                pb.finish_and_clear();
                return Err(e.into());
            }
        }
    }
    pb.finish_and_clear();

    if !found_ids.is_empty() {
        client.add_tracks(&playlist.id, &found_ids, None).await?;
    }

    Ok(ImportOutcome {
        playlist,
        added: found_ids.len(),
        unresolved,
    })
}
