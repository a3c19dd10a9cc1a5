//! Shared test fixtures: in-memory collaborator mocks and a pre-populated
//! RPC server.

// Each integration test binary compiles its own copy of this module and
// uses a different subset of it.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use tonearm_common::error::Result;
use tonearm_common::library::MusicLibrary;
use tonearm_common::model::{
    Album, Artist, Directory, File, MetadataUpdate, Playlist, PlaylistItem, Statistics,
};
use tonearm_common::player::{PlaybackState, PlayerController, PlayerStatus};
use tonearm_common::queue::QueueItem;
use tonearm_rpc::RpcServer;

// ============================================================================
// Library mock
// ============================================================================

#[derive(Default)]
pub struct LibraryState {
    pub artists: Vec<Artist>,
    pub albums: Vec<Album>,
    pub files: HashMap<i64, File>,
    pub directories: HashMap<i64, Directory>,
    pub playlists: Vec<Playlist>,
    pub directory_files: HashMap<i64, Vec<i64>>,
    pub album_files: HashMap<i64, Vec<i64>>,
    pub artist_files: HashMap<i64, Vec<i64>>,
    pub subdirectories: HashMap<i64, Vec<i64>>,
    pub scans: usize,
    pub metadata_updates: Vec<MetadataUpdate>,
    pub next_id: i64,
}

/// In-memory [`MusicLibrary`] recording mutations for assertions.
#[derive(Default)]
pub struct MockLibrary {
    pub state: Mutex<LibraryState>,
}

impl MusicLibrary for MockLibrary {
    fn scan(&self) -> Result<()> {
        self.state.lock().unwrap().scans += 1;
        Ok(())
    }

    fn statistics(&self) -> Result<Statistics> {
        let state = self.state.lock().unwrap();
        Ok(Statistics {
            num_of_artists: state.artists.len() as i64,
            num_of_albums: state.albums.len() as i64,
            num_of_files: state.files.len() as i64,
            sum_of_song_length: state.files.values().map(|f| f.length).sum(),
        })
    }

    fn artists(&self) -> Result<Vec<Artist>> {
        Ok(self.state.lock().unwrap().artists.clone())
    }

    fn albums(&self, ids: &[i64]) -> Result<Vec<Album>> {
        let state = self.state.lock().unwrap();
        if ids.is_empty() {
            return Ok(state.albums.clone());
        }
        Ok(state
            .albums
            .iter()
            .filter(|a| ids.contains(&a.id))
            .cloned()
            .collect())
    }

    fn album_ids_by_artist(&self, artist_id: i64) -> Result<Vec<i64>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .albums
            .iter()
            .filter(|a| a.artist_id == artist_id)
            .map(|a| a.id)
            .collect())
    }

    fn files(&self, ids: &[i64]) -> Result<Vec<File>> {
        let state = self.state.lock().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| state.files.get(id).cloned())
            .collect())
    }

    fn directories(&self, ids: &[i64]) -> Result<Vec<Directory>> {
        let state = self.state.lock().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| state.directories.get(id).cloned())
            .collect())
    }

    fn playlists(&self, ids: &[i64]) -> Result<Vec<Playlist>> {
        let state = self.state.lock().unwrap();
        if ids.is_empty() {
            return Ok(state.playlists.clone());
        }
        Ok(state
            .playlists
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }

    fn file_ids_of_album(&self, album_id: i64) -> Result<Vec<i64>> {
        let state = self.state.lock().unwrap();
        Ok(state.album_files.get(&album_id).cloned().unwrap_or_default())
    }

    fn file_ids_of_artist(&self, artist_id: i64) -> Result<Vec<i64>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .artist_files
            .get(&artist_id)
            .cloned()
            .unwrap_or_default())
    }

    fn file_ids_of_directory(&self, directory_id: i64) -> Result<Vec<i64>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .directory_files
            .get(&directory_id)
            .cloned()
            .unwrap_or_default())
    }

    fn subdirectory_ids(&self, directory_id: i64) -> Result<Vec<i64>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .subdirectories
            .get(&directory_id)
            .cloned()
            .unwrap_or_default())
    }

    fn create_playlist(&self, name: &str) -> Result<i64> {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = state.next_id;
        state.playlists.push(Playlist {
            id,
            name: name.to_string(),
            items: Vec::new(),
        });
        Ok(id)
    }

    fn delete_playlist(&self, playlist_id: i64) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.playlists.retain(|p| p.id != playlist_id);
        Ok(())
    }

    fn add_playlist_item(&self, playlist_id: i64, kind: &str, item_id: i64) -> Result<i64> {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = state.next_id;
        let playlist = state
            .playlists
            .iter_mut()
            .find(|p| p.id == playlist_id)
            .expect("playlist fixture missing");
        playlist.items.push(PlaylistItem {
            id,
            kind: kind.to_string(),
            item_id,
        });
        Ok(id)
    }

    fn delete_playlist_item(&self, item_id: i64) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        for playlist in &mut state.playlists {
            playlist.items.retain(|i| i.id != item_id);
        }
        Ok(())
    }

    fn update_file_metadata(&self, update: &MetadataUpdate) -> Result<()> {
        self.state.lock().unwrap().metadata_updates.push(update.clone());
        Ok(())
    }
}

// ============================================================================
// Controller mock
// ============================================================================

/// In-memory [`PlayerController`] recording every call for assertions.
#[derive(Default)]
pub struct MockController {
    pub enqueued: Mutex<Vec<QueueItem>>,
    pub removed: Mutex<Vec<Vec<i64>>>,
    pub gotos: Mutex<Vec<Vec<i64>>>,
    pub calls: Mutex<Vec<String>>,
    pub volume: Mutex<i64>,
    pub queue: Mutex<Vec<QueueItem>>,
}

impl MockController {
    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl PlayerController for MockController {
    fn enqueue(&self, item: QueueItem) -> Result<()> {
        self.record("enqueue");
        self.enqueued.lock().unwrap().push(item);
        Ok(())
    }

    fn remove(&self, index: &[i64]) -> Result<()> {
        self.record("remove");
        self.removed.lock().unwrap().push(index.to_vec());
        Ok(())
    }

    fn remove_all(&self) -> Result<()> {
        self.record("remove_all");
        Ok(())
    }

    fn queue(&self) -> Result<Vec<QueueItem>> {
        Ok(self.queue.lock().unwrap().clone())
    }

    fn status(&self) -> Result<PlayerStatus> {
        Ok(PlayerStatus {
            current: Some(3),
            state: PlaybackState::Playing,
            position: 42,
            volume: *self.volume.lock().unwrap(),
            index: vec![1, 0],
        })
    }

    fn play(&self) -> Result<()> {
        self.record("play");
        Ok(())
    }

    fn pause(&self) -> Result<()> {
        self.record("pause");
        Ok(())
    }

    fn stop(&self) -> Result<()> {
        self.record("stop");
        Ok(())
    }

    fn prev(&self) -> Result<()> {
        self.record("prev");
        Ok(())
    }

    fn next(&self) -> Result<()> {
        self.record("next");
        Ok(())
    }

    fn seek(&self, _seconds: i64) -> Result<()> {
        self.record("seek");
        Ok(())
    }

    fn go_to(&self, index: &[i64]) -> Result<()> {
        self.record("go_to");
        self.gotos.lock().unwrap().push(index.to_vec());
        Ok(())
    }

    fn volume(&self) -> Result<i64> {
        Ok(*self.volume.lock().unwrap())
    }

    fn set_volume(&self, level: i64) -> Result<()> {
        self.record("set_volume");
        *self.volume.lock().unwrap() = level;
        Ok(())
    }

    fn inc_volume(&self) -> Result<()> {
        self.record("inc_volume");
        *self.volume.lock().unwrap() += 5;
        Ok(())
    }

    fn dec_volume(&self) -> Result<()> {
        self.record("dec_volume");
        *self.volume.lock().unwrap() -= 5;
        Ok(())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn file(id: i64, name: &str, track_index: i64) -> File {
    File {
        id,
        path: format!("/music/{}", name),
        name: name.to_string(),
        length: 100 + id,
        artist_id: Some(1),
        album_id: None,
        title: format!("title {}", id),
        year: 2003,
        track_index,
        codec: "mp3".to_string(),
        sampling_rate: 44100,
        artist: Some("The Artist".to_string()),
        album: Some("The Album".to_string()),
    }
}

/// Library contents shared by most tests:
/// - artist 1 owning every file
/// - file 1 `single.mp3`
/// - directory 10 with files 2 `b.mp3` and 3 `a.mp3` (unsorted on purpose)
/// - album 20 with files 5 (track 2) and 6 (track 1)
/// - playlist 30 referencing the file, the directory and the album
pub fn populate(library: &MockLibrary) {
    let mut state = library.state.lock().unwrap();

    state.artists.push(Artist {
        id: 1,
        name: "The Artist".to_string(),
        albums: 1,
    });

    state.albums.push(Album {
        id: 20,
        artist_id: 1,
        name: "The Album".to_string(),
        songs: 2,
        length: 420,
    });
    state.album_files.insert(20, vec![5, 6]);
    state.artist_files.insert(1, vec![1, 2, 3, 5, 6]);

    state.directories.insert(
        10,
        Directory {
            id: 10,
            parent_id: Some(1),
            name: "mixed".to_string(),
        },
    );
    state.directory_files.insert(10, vec![2, 3]);

    for f in [
        file(1, "single.mp3", 1),
        file(2, "b.mp3", 1),
        file(3, "a.mp3", 2),
        file(5, "t2.flac", 2),
        file(6, "t1.flac", 1),
    ] {
        state.files.insert(f.id, f);
    }

    state.playlists.push(Playlist {
        id: 30,
        name: "mixtape".to_string(),
        items: vec![
            PlaylistItem {
                id: 1,
                kind: "file".to_string(),
                item_id: 1,
            },
            PlaylistItem {
                id: 2,
                kind: "directory".to_string(),
                item_id: 10,
            },
            PlaylistItem {
                id: 3,
                kind: "album".to_string(),
                item_id: 20,
            },
        ],
    });

    state.next_id = 100;
}

/// A server over populated mocks, plus handles to both mocks.
pub fn setup_server() -> (Arc<RpcServer>, Arc<MockLibrary>, Arc<MockController>) {
    let library = Arc::new(MockLibrary::default());
    populate(&library);
    let player = Arc::new(MockController::default());
    let server = Arc::new(RpcServer::new(
        Arc::clone(&library) as Arc<dyn MusicLibrary>,
        Arc::clone(&player) as Arc<dyn PlayerController>,
    ));
    (server, library, player)
}

/// Dispatches a method call with params and id 1, returning the parsed reply.
pub fn call(server: &RpcServer, method: &str, params: Value) -> Value {
    let request = json!({ "method": method, "id": 1, "params": params });
    dispatch_raw(server, &request.to_string())
}

/// Dispatches a raw request body, returning the parsed reply.
pub fn dispatch_raw(server: &RpcServer, raw: &str) -> Value {
    serde_json::from_str(&server.dispatch(raw.as_bytes())).expect("reply must be valid JSON")
}
