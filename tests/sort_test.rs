mod common;

use std::collections::BTreeSet;

use common::{FakeClient, track};
use spotlistcli::{
    reconcile::{self, ReconcileError},
    types::{SortKey, SortOrder, Track},
};

fn with_popularity(id: &str, popularity: u32) -> Track {
    Track {
        popularity,
        ..track(id, &format!("Song {}", id), "Artist")
    }
}

fn with_duration(id: &str, duration_ms: u64) -> Track {
    Track {
        duration_ms,
        ..track(id, &format!("Song {}", id), "Artist")
    }
}

fn ids(tracks: &[Track]) -> Vec<&str> {
    tracks.iter().map(|t| t.id.as_str()).collect()
}

#[test]
fn test_sort_by_popularity_is_stable() {
    let mut tracks = vec![
        with_popularity("X", 50),
        with_popularity("Y", 50),
        with_popularity("Z", 10),
    ];

    reconcile::sort_tracks(&mut tracks, SortKey::Popularity, SortOrder::Asc);

    assert_eq!(ids(&tracks), vec!["Z", "X", "Y"]);
}

#[test]
fn test_sort_descending_is_stable() {
    let mut tracks = vec![
        with_popularity("Z", 10),
        with_popularity("X", 50),
        with_popularity("Y", 50),
    ];

    reconcile::sort_tracks(&mut tracks, SortKey::Popularity, SortOrder::Desc);

    assert_eq!(ids(&tracks), vec!["X", "Y", "Z"]);
}

#[test]
fn test_sort_by_title_is_case_sensitive() {
    let mut tracks = vec![
        track("1", "beta", "A"),
        track("2", "Alpha", "A"),
        track("3", "alpha", "A"),
        track("4", "Beta", "A"),
    ];

    reconcile::sort_tracks(&mut tracks, SortKey::Title, SortOrder::Asc);

    // uppercase sorts before lowercase
    assert_eq!(ids(&tracks), vec!["2", "4", "3", "1"]);
}

#[test]
fn test_sort_by_duration() {
    let mut tracks = vec![
        with_duration("A", 240_000),
        with_duration("B", 95_000),
        with_duration("C", 180_000),
    ];

    reconcile::sort_tracks(&mut tracks, SortKey::Duration, SortOrder::Desc);

    assert_eq!(ids(&tracks), vec!["A", "C", "B"]);
}

#[test]
fn test_random_sort_is_a_permutation() {
    let mut tracks: Vec<Track> = (0..50)
        .map(|i| track(&format!("t{}", i), "Song", "Artist"))
        .collect();
    let before: BTreeSet<String> = tracks.iter().map(|t| t.id.clone()).collect();

    reconcile::sort_tracks(&mut tracks, SortKey::Random, SortOrder::Asc);

    let after: BTreeSet<String> = tracks.iter().map(|t| t.id.clone()).collect();
    assert_eq!(tracks.len(), 50);
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_sort_playlist_applies_order_remotely() {
    let client = FakeClient::new(2).with_playlist(
        "p1",
        "Mix",
        vec![
            Some(with_popularity("X", 50)),
            Some(with_popularity("Y", 50)),
            Some(with_popularity("Z", 10)),
        ],
    );
    let playlist = client.playlist_ref("p1");

    let outcome = reconcile::sort_playlist(&client, &playlist, SortKey::Popularity, SortOrder::Asc)
        .await
        .unwrap();

    assert_eq!(outcome.tracks, 3);
    assert_eq!(client.track_ids("p1"), vec!["Z", "X", "Y"]);
    assert_eq!(client.remove_calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    assert_eq!(client.add_calls.load(std::sync::atomic::Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_sort_playlist_keeps_every_track() {
    let tracks: Vec<Option<Track>> = [("A", 30), ("B", 90), ("A", 30), ("C", 10), ("D", 90)]
        .iter()
        .map(|(id, p)| Some(with_popularity(id, *p)))
        .collect();
    let client = FakeClient::new(2).with_playlist("p1", "Mix", tracks);
    let playlist = client.playlist_ref("p1");

    reconcile::sort_playlist(&client, &playlist, SortKey::Popularity, SortOrder::Desc)
        .await
        .unwrap();

    assert_eq!(client.track_ids("p1"), vec!["B", "D", "A", "A", "C"]);
}

#[tokio::test]
async fn test_random_sort_playlist_keeps_every_track() {
    let tracks: Vec<Option<Track>> = (0..20)
        .map(|i| Some(track(&format!("t{}", i), "Song", "Artist")))
        .collect();
    let client = FakeClient::new(7).with_playlist("p1", "Mix", tracks);
    let playlist = client.playlist_ref("p1");

    reconcile::sort_playlist(&client, &playlist, SortKey::Random, SortOrder::Desc)
        .await
        .unwrap();

    let mut after = client.track_ids("p1");
    after.sort();
    let mut expected: Vec<String> = (0..20).map(|i| format!("t{}", i)).collect();
    expected.sort();
    assert_eq!(after, expected);
}

#[tokio::test]
async fn test_sort_empty_playlist_does_not_mutate() {
    let client = FakeClient::new(100).with_playlist("p1", "Empty", Vec::new());
    let playlist = client.playlist_ref("p1");

    let outcome = reconcile::sort_playlist(&client, &playlist, SortKey::Title, SortOrder::Asc)
        .await
        .unwrap();

    assert_eq!(outcome.tracks, 0);
    assert_eq!(client.mutations(), 0);
}

#[tokio::test]
async fn test_sort_failed_insert_leaves_playlist_emptied() {
    let client = FakeClient::new(100).with_playlist(
        "p1",
        "Mix",
        vec![Some(with_popularity("X", 50)), Some(with_popularity("Y", 10))],
    );
    *client.fail_add.lock().unwrap() = true;
    let playlist = client.playlist_ref("p1");

    let result =
        reconcile::sort_playlist(&client, &playlist, SortKey::Popularity, SortOrder::Asc).await;

    assert!(matches!(result, Err(ReconcileError::Client(_))));
    assert!(client.track_ids("p1").is_empty());
}

#[tokio::test]
async fn test_sort_failed_remove_leaves_playlist_untouched() {
    let client = FakeClient::new(100).with_playlist(
        "p1",
        "Mix",
        vec![Some(with_popularity("X", 50)), Some(with_popularity("Y", 10))],
    );
    *client.fail_remove.lock().unwrap() = true;
    let playlist = client.playlist_ref("p1");

    let result =
        reconcile::sort_playlist(&client, &playlist, SortKey::Popularity, SortOrder::Asc).await;

    assert!(result.is_err());
    assert_eq!(client.track_ids("p1"), vec!["X", "Y"]);
    assert_eq!(client.add_calls.load(std::sync::atomic::Ordering::SeqCst), 0);
}
