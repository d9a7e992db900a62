use std::{cmp::Ordering, collections::HashSet};

use rand::seq::SliceRandom;

use super::{ReconcileError, fetch_snapshot};
use crate::{
    info,
    remote::PlaylistClient,
    types::{PlaylistRef, SortKey, SortOrder, Track},
    warning,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortOutcome {
    pub tracks: usize,
}

/// Orders tracks in place. Every key except `Random` sorts stably, in both
/// directions, so tracks with equal keys keep their relative order. `order` is
/// ignored for `Random`.
pub fn sort_tracks(tracks: &mut [Track], key: SortKey, order: SortOrder) {
    match key {
        SortKey::Title => sort_stable_by(tracks, order, |a, b| a.name.cmp(&b.name)),
        SortKey::Popularity => sort_stable_by(tracks, order, |a, b| a.popularity.cmp(&b.popularity)),
        SortKey::Duration => sort_stable_by(tracks, order, |a, b| a.duration_ms.cmp(&b.duration_ms)),
        SortKey::Random => tracks.shuffle(&mut rand::rng()),
    }
}

fn sort_stable_by<F>(tracks: &mut [Track], order: SortOrder, compare: F)
where
    F: Fn(&Track, &Track) -> Ordering,
{
    match order {
        SortOrder::Asc => tracks.sort_by(|a, b| compare(a, b)),
        SortOrder::Desc => tracks.sort_by(|a, b| compare(b, a)),
    }
}

/// Reorders the whole playlist: one fetch, one removal of every track id and
/// one insert of the sorted sequence at position 0.
///
/// There is no rollback. If the insert fails after the removal succeeded the
/// playlist is left without its tracks; the error is returned after a warning.
pub async fn sort_playlist(
    client: &dyn PlaylistClient,
    playlist: &PlaylistRef,
    key: SortKey,
    order: SortOrder,
) -> Result<SortOutcome, ReconcileError> {
    let snapshot = fetch_snapshot(client, &playlist.id).await?;

    if snapshot.is_empty() {
        info!("No tracks found in playlist {}", playlist.name);
        return Ok(SortOutcome::default());
    }

    let mut tracks = snapshot.into_tracks();
    sort_tracks(&mut tracks, key, order);

    let ordered_ids: Vec<String> = tracks.iter().map(|t| t.id.clone()).collect();
    let mut seen = HashSet::new();
    let distinct_ids: Vec<String> = ordered_ids
        .iter()
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect();

    client.remove_tracks(&playlist.id, &distinct_ids).await?;

    if let Err(e) = client.add_tracks(&playlist.id, &ordered_ids, Some(0)).await {
        warning!(
            "Tracks of playlist {} were removed but could not be added back in sorted order",
            playlist.name
        );
        return Err(e.into());
    }

    Ok(SortOutcome {
        tracks: ordered_ids.len(),
    })
}
