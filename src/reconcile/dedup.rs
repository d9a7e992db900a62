use super::{ReconcileError, fetch_snapshot};
use crate::{info, remote::PlaylistClient, types::PlaylistRef};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DedupOutcome {
    /// Distinct tracks that had more than one occurrence.
    pub tracks_deduplicated: usize,
    /// Surplus copies removed in total.
    pub copies_removed: usize,
}

/// Removes repeated tracks, keeping each track at the position of its first
/// occurrence.
///
/// Runs until no duplicate is left. Every pass refetches the whole playlist,
/// removes all occurrences of the first duplicated track and re-inserts a
/// single copy at its first position. Refetching avoids working with positions
/// that the previous removal shifted.
///
/// Not atomic: a failing remove or insert aborts the loop and leaves the
/// playlist partially deduplicated (or missing the track that was being fixed).
pub async fn deduplicate(
    client: &dyn PlaylistClient,
    playlist: &PlaylistRef,
) -> Result<DedupOutcome, ReconcileError> {
    let mut outcome = DedupOutcome::default();

    loop {
        let snapshot = fetch_snapshot(client, &playlist.id).await?;

        if snapshot.is_empty() {
            info!("No tracks found in playlist {}", playlist.name);
            break;
        }

        let Some(group) = snapshot.duplicate_groups().into_iter().next() else {
            break;
        };

        info!(
            "removing duplicates of track \"{}\" (number of items to remove: {})",
            group.track_name,
            group.surplus()
        );

        let ids = [group.track_id.clone()];
        client.remove_tracks(&playlist.id, &ids).await?;
        client
            .add_tracks(&playlist.id, &ids, Some(group.first_position()))
            .await?;

        outcome.tracks_deduplicated += 1;
        outcome.copies_removed += group.surplus();
    }

    Ok(outcome)
}
