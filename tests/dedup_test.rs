mod common;

use common::{FakeClient, track};
use spotlistcli::reconcile::{self, DedupOutcome, ReconcileError};

fn items(ids: &[&str]) -> Vec<Option<spotlistcli::types::Track>> {
    ids.iter()
        .map(|id| Some(track(id, &format!("Song {}", id), "Artist")))
        .collect()
}

#[tokio::test]
async fn test_dedup_keeps_first_position() {
    let client = FakeClient::new(100).with_playlist("p1", "Mix", items(&["A", "B", "A", "C", "A"]));
    let playlist = client.playlist_ref("p1");

    let outcome = reconcile::deduplicate(&client, &playlist).await.unwrap();

    assert_eq!(client.track_ids("p1"), vec!["A", "B", "C"]);
    assert_eq!(
        outcome,
        DedupOutcome {
            tracks_deduplicated: 1,
            copies_removed: 2,
        }
    );
}

#[tokio::test]
async fn test_dedup_is_idempotent() {
    let client = FakeClient::new(100).with_playlist("p1", "Mix", items(&["A", "B", "A", "C", "A"]));
    let playlist = client.playlist_ref("p1");

    reconcile::deduplicate(&client, &playlist).await.unwrap();
    let mutations_after_first_run = client.mutations();

    let second = reconcile::deduplicate(&client, &playlist).await.unwrap();

    assert_eq!(second, DedupOutcome::default());
    assert_eq!(client.mutations(), mutations_after_first_run);
    assert_eq!(client.track_ids("p1"), vec!["A", "B", "C"]);
}

#[tokio::test]
async fn test_dedup_handles_duplicates_across_pages() {
    // page size 2 puts every duplicate on a different page than its original
    let client =
        FakeClient::new(2).with_playlist("p1", "Mix", items(&["A", "B", "C", "D", "B", "A", "E"]));
    let playlist = client.playlist_ref("p1");

    let outcome = reconcile::deduplicate(&client, &playlist).await.unwrap();

    assert_eq!(client.track_ids("p1"), vec!["A", "B", "C", "D", "E"]);
    assert_eq!(outcome.tracks_deduplicated, 2);
    assert_eq!(outcome.copies_removed, 2);
}

#[tokio::test]
async fn test_dedup_one_remove_and_one_add_per_duplicated_track() {
    let client =
        FakeClient::new(3).with_playlist("p1", "Mix", items(&["A", "B", "A", "B", "C", "C"]));
    let playlist = client.playlist_ref("p1");

    reconcile::deduplicate(&client, &playlist).await.unwrap();

    assert_eq!(client.track_ids("p1"), vec!["A", "B", "C"]);
    assert_eq!(client.add_calls.load(std::sync::atomic::Ordering::SeqCst), 3);
    assert_eq!(client.remove_calls.load(std::sync::atomic::Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_dedup_positions_account_for_local_tracks() {
    let mut playlist_items = items(&["A", "B"]);
    playlist_items.insert(0, None);
    playlist_items.push(None);
    playlist_items.push(Some(track("B", "Song B", "Artist")));
    let client = FakeClient::new(100).with_playlist("p1", "Mix", playlist_items);
    let playlist = client.playlist_ref("p1");

    reconcile::deduplicate(&client, &playlist).await.unwrap();

    assert_eq!(
        client.item_ids("p1"),
        vec![None, Some("A".to_string()), Some("B".to_string()), None]
    );
}

#[tokio::test]
async fn test_dedup_without_duplicates_does_not_mutate() {
    let client = FakeClient::new(100).with_playlist("p1", "Mix", items(&["A", "B", "C"]));
    let playlist = client.playlist_ref("p1");

    let outcome = reconcile::deduplicate(&client, &playlist).await.unwrap();

    assert_eq!(outcome, DedupOutcome::default());
    assert_eq!(client.mutations(), 0);
}

#[tokio::test]
async fn test_dedup_empty_playlist_does_not_mutate() {
    let client = FakeClient::new(100).with_playlist("p1", "Empty", Vec::new());
    let playlist = client.playlist_ref("p1");

    let outcome = reconcile::deduplicate(&client, &playlist).await.unwrap();

    assert_eq!(outcome, DedupOutcome::default());
    assert_eq!(client.mutations(), 0);
}

#[tokio::test]
async fn test_dedup_aborts_on_api_error() {
    let client = FakeClient::new(100).with_playlist("p1", "Mix", items(&["A", "B", "A"]));
    *client.fail_add.lock().unwrap() = true;
    let playlist = client.playlist_ref("p1");

    let result = reconcile::deduplicate(&client, &playlist).await;

    assert!(matches!(result, Err(ReconcileError::Client(_))));
    // the removal went through before the insert failed
    assert_eq!(client.track_ids("p1"), vec!["B"]);
    assert_eq!(client.add_calls.load(std::sync::atomic::Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_resolve_unknown_playlist() {
    let client = FakeClient::new(100).with_playlist("p1", "Mix", items(&["A"]));

    let result = reconcile::resolve_playlist(&client, "Missing").await;

    match result {
        Err(ReconcileError::PlaylistNotFound(name)) => assert_eq!(name, "Missing"),
        other => panic!("expected PlaylistNotFound, got {:?}", other),
    }
    assert_eq!(client.mutations(), 0);
}
