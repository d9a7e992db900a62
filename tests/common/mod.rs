#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use spotlistcli::{
    remote::{ClientError, PlaylistClient},
    types::{AlbumInfo, PlaylistRef, Track, TrackPage, TrackQuery},
};

pub fn track(id: &str, name: &str, artist: &str) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        artists: vec![artist.to_string()],
        album: AlbumInfo {
            id: format!("{}_album", id),
            name: format!("{} Album", name),
            images: vec![format!("https://img.example/{}.jpg", id)],
        },
        duration_ms: 180_000,
        popularity: 50,
    }
}

/// In-memory stand-in for the Spotify API with page-wise item access.
pub struct FakeClient {
    page_size: usize,
    catalog: Mutex<HashMap<String, Track>>,
    playlists: Mutex<Vec<(PlaylistRef, Vec<Option<Track>>)>>,
    search_results: Mutex<HashMap<(String, String), String>>,
    downloads: Mutex<HashMap<String, Vec<u8>>>,
    pub fail_add: Mutex<bool>,
    pub fail_remove: Mutex<bool>,
    pub searches: Mutex<Vec<TrackQuery>>,
    pub created: Mutex<Vec<String>>,
    pub page_calls: AtomicUsize,
    pub add_calls: AtomicUsize,
    pub remove_calls: AtomicUsize,
}

impl FakeClient {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            catalog: Mutex::new(HashMap::new()),
            playlists: Mutex::new(Vec::new()),
            search_results: Mutex::new(HashMap::new()),
            downloads: Mutex::new(HashMap::new()),
            fail_add: Mutex::new(false),
            fail_remove: Mutex::new(false),
            searches: Mutex::new(Vec::new()),
            created: Mutex::new(Vec::new()),
            page_calls: AtomicUsize::new(0),
            add_calls: AtomicUsize::new(0),
            remove_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_playlist(self, id: &str, name: &str, items: Vec<Option<Track>>) -> Self {
        {
            let mut catalog = self.catalog.lock().unwrap();
            for t in items.iter().flatten() {
                catalog.insert(t.id.clone(), t.clone());
            }
        }
        self.playlists.lock().unwrap().push((
            PlaylistRef {
                id: id.to_string(),
                name: name.to_string(),
            },
            items,
        ));
        self
    }

    pub fn with_search_result(self, artist: &str, title: &str, track: Track) -> Self {
        self.search_results
            .lock()
            .unwrap()
            .insert((artist.to_string(), title.to_string()), track.id.clone());
        self.catalog.lock().unwrap().insert(track.id.clone(), track);
        self
    }

    pub fn with_download(self, url: &str, bytes: &[u8]) -> Self {
        self.downloads
            .lock()
            .unwrap()
            .insert(url.to_string(), bytes.to_vec());
        self
    }

    pub fn playlist_ref(&self, id: &str) -> PlaylistRef {
        self.playlists
            .lock()
            .unwrap()
            .iter()
            .find(|(p, _)| p.id == id)
            .map(|(p, _)| p.clone())
            .expect("unknown playlist")
    }

    /// Current item ids of a playlist, `None` for local entries.
    pub fn item_ids(&self, playlist_id: &str) -> Vec<Option<String>> {
        self.playlists
            .lock()
            .unwrap()
            .iter()
            .find(|(p, _)| p.id == playlist_id)
            .map(|(_, items)| items.iter().map(|t| t.as_ref().map(|t| t.id.clone())).collect())
            .unwrap_or_default()
    }

    /// Current track ids of a playlist, local entries skipped.
    pub fn track_ids(&self, playlist_id: &str) -> Vec<String> {
        self.item_ids(playlist_id).into_iter().flatten().collect()
    }

    pub fn mutations(&self) -> usize {
        self.add_calls.load(Ordering::SeqCst) + self.remove_calls.load(Ordering::SeqCst)
    }

    fn with_items<R>(
        &self,
        playlist_id: &str,
        f: impl FnOnce(&mut Vec<Option<Track>>) -> R,
    ) -> Result<R, ClientError> {
        let mut playlists = self.playlists.lock().unwrap();
        match playlists.iter_mut().find(|(p, _)| p.id == playlist_id) {
            Some((_, items)) => Ok(f(items)),
            None => Err(ClientError::Api {
                status: 404,
                message: format!("playlist {} not found", playlist_id),
            }),
        }
    }
}

fn server_error() -> ClientError {
    ClientError::Api {
        status: 500,
        message: "internal server error".to_string(),
    }
}

#[async_trait]
impl PlaylistClient for FakeClient {
    async fn find_playlist(&self, name: &str) -> Result<Option<PlaylistRef>, ClientError> {
        Ok(self
            .playlists
            .lock()
            .unwrap()
            .iter()
            .find(|(p, _)| p.name == name)
            .map(|(p, _)| p.clone()))
    }

    async fn create_playlist(&self, name: &str) -> Result<PlaylistRef, ClientError> {
        let mut playlists = self.playlists.lock().unwrap();
        let playlist = PlaylistRef {
            id: format!("created_{}", playlists.len()),
            name: name.to_string(),
        };
        playlists.push((playlist.clone(), Vec::new()));
        self.created.lock().unwrap().push(name.to_string());
        Ok(playlist)
    }

    async fn playlist_page(
        &self,
        playlist_id: &str,
        cursor: Option<String>,
    ) -> Result<TrackPage, ClientError> {
        self.page_calls.fetch_add(1, Ordering::SeqCst);
        let offset: usize = cursor.map(|c| c.parse().unwrap()).unwrap_or(0);
        let page_size = self.page_size;

        self.with_items(playlist_id, |items| {
            let end = (offset + page_size).min(items.len());
            TrackPage {
                items: items[offset.min(end)..end].to_vec(),
                next: (end < items.len()).then(|| end.to_string()),
            }
        })
    }

    async fn add_tracks(
        &self,
        playlist_id: &str,
        track_ids: &[String],
        position: Option<usize>,
    ) -> Result<(), ClientError> {
        self.add_calls.fetch_add(1, Ordering::SeqCst);
        if *self.fail_add.lock().unwrap() {
            return Err(server_error());
        }

        let tracks: Vec<Option<Track>> = {
            let catalog = self.catalog.lock().unwrap();
            track_ids.iter().map(|id| catalog.get(id).cloned()).collect()
        };

        self.with_items(playlist_id, |items| {
            let at = position.unwrap_or(items.len()).min(items.len());
            items.splice(at..at, tracks);
        })
    }

    async fn remove_tracks(
        &self,
        playlist_id: &str,
        track_ids: &[String],
    ) -> Result<(), ClientError> {
        self.remove_calls.fetch_add(1, Ordering::SeqCst);
        if *self.fail_remove.lock().unwrap() {
            return Err(server_error());
        }

        self.with_items(playlist_id, |items| {
            items.retain(|item| match item {
                Some(t) => !track_ids.contains(&t.id),
                None => true,
            })
        })
    }

    async fn search_track(&self, query: &TrackQuery) -> Result<Option<String>, ClientError> {
        self.searches.lock().unwrap().push(query.clone());
        Ok(self
            .search_results
            .lock()
            .unwrap()
            .get(&(query.artist.clone(), query.title.clone()))
            .cloned())
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, ClientError> {
        self.downloads
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or(ClientError::Api {
                status: 404,
                message: format!("{} not found", url),
            })
    }
}
