use std::collections::HashMap;

use crate::{
    remote::{ClientError, PlaylistClient},
    types::Track,
};

/// The tracks of a playlist at one point in time, each with its position in
/// the remote playlist.
///
/// Positions count every remote item. Items without a Spotify id (local files,
/// unavailable tracks) are not part of the entries but still shift positions,
/// so a position here is always a valid insert index on the remote side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaylistSnapshot {
    entries: Vec<(usize, Track)>,
}

/// All positions at which one track id occurs, in ascending order.
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateGroup {
    pub track_id: String,
    pub track_name: String,
    pub positions: Vec<usize>,
}

impl DuplicateGroup {
    pub fn first_position(&self) -> usize {
        self.positions[0]
    }

    /// Number of copies beyond the first one.
    pub fn surplus(&self) -> usize {
        self.positions.len().saturating_sub(1)
    }
}

impl PlaylistSnapshot {
    pub fn from_items(items: Vec<Option<Track>>) -> Self {
        let entries = items
            .into_iter()
            .enumerate()
            .filter_map(|(position, item)| item.map(|track| (position, track)))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[(usize, Track)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn track_ids(&self) -> Vec<String> {
        self.entries.iter().map(|(_, t)| t.id.clone()).collect()
    }

    pub fn into_tracks(self) -> Vec<Track> {
        self.entries.into_iter().map(|(_, t)| t).collect()
    }

    /// Track ids occurring more than once, ordered by their first position.
    pub fn duplicate_groups(&self) -> Vec<DuplicateGroup> {
        let mut groups: Vec<DuplicateGroup> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for (position, track) in &self.entries {
            match index.get(track.id.as_str()) {
                Some(&i) => groups[i].positions.push(*position),
                None => {
                    index.insert(&track.id, groups.len());
                    groups.push(DuplicateGroup {
                        track_id: track.id.clone(),
                        track_name: track.name.clone(),
                        positions: vec![*position],
                    });
                }
            }
        }

        groups.retain(|g| g.positions.len() > 1);
        groups
    }
}

/// Fetches every page of the playlist before returning, since duplicates and
/// sort keys span page boundaries.
pub async fn fetch_snapshot(
    client: &dyn PlaylistClient,
    playlist_id: &str,
) -> Result<PlaylistSnapshot, ClientError> {
    let mut items = Vec::new();
    let mut cursor = None;

    loop {
        let page = client.playlist_page(playlist_id, cursor).await?;
        items.extend(page.items);
        match page.next {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    Ok(PlaylistSnapshot::from_items(items))
}
