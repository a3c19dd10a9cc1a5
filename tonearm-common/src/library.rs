//! Media-library collaborator interface
//!
//! The storage engine behind this trait (persistence, scanning, playlist
//! CRUD) is owned by an external component. The RPC core calls it through
//! this fixed contract and never caches results: two calls made within one
//! request may disagree because the library mutates concurrently, and a
//! referent that vanished between calls must surface as a normal not-found
//! outcome.

use crate::error::Result;
use crate::model::{Album, Artist, Directory, File, MetadataUpdate, Playlist, Statistics};

/// Synchronous media-library interface.
///
/// Bulk getters take id sets and omit ids that do not resolve; the caller
/// decides whether a missing referent is fatal.
pub trait MusicLibrary: Send + Sync {
    /// Trigger a (re)scan of the media directories.
    fn scan(&self) -> Result<()>;

    /// Aggregate counters of the library.
    fn statistics(&self) -> Result<Statistics>;

    /// All artists.
    fn artists(&self) -> Result<Vec<Artist>>;

    /// Albums by id; an empty id set returns all albums.
    fn albums(&self, ids: &[i64]) -> Result<Vec<Album>>;

    /// Ids of the albums attributed to an artist.
    fn album_ids_by_artist(&self, artist_id: i64) -> Result<Vec<i64>>;

    /// Files by id; missing ids are omitted.
    fn files(&self, ids: &[i64]) -> Result<Vec<File>>;

    /// Directories by id; missing ids are omitted.
    fn directories(&self, ids: &[i64]) -> Result<Vec<Directory>>;

    /// Playlists by id; an empty id set returns all playlists.
    fn playlists(&self, ids: &[i64]) -> Result<Vec<Playlist>>;

    /// Ids of the files belonging to an album, in storage order.
    fn file_ids_of_album(&self, album_id: i64) -> Result<Vec<i64>>;

    /// Ids of every file attributed to an artist, in storage order.
    fn file_ids_of_artist(&self, artist_id: i64) -> Result<Vec<i64>>;

    /// Ids of the files directly inside a directory, in storage order.
    fn file_ids_of_directory(&self, directory_id: i64) -> Result<Vec<i64>>;

    /// Ids of the immediate subdirectories of a directory.
    fn subdirectory_ids(&self, directory_id: i64) -> Result<Vec<i64>>;

    /// Create an empty playlist, returning its id.
    fn create_playlist(&self, name: &str) -> Result<i64>;

    /// Delete a playlist and its items.
    fn delete_playlist(&self, playlist_id: i64) -> Result<()>;

    /// Append a typed item reference to a playlist, returning the item id.
    fn add_playlist_item(&self, playlist_id: i64, kind: &str, item_id: i64) -> Result<i64>;

    /// Delete a single playlist item.
    fn delete_playlist_item(&self, item_id: i64) -> Result<()>;

    /// Overwrite the user-editable metadata of a file.
    fn update_file_metadata(&self, update: &MetadataUpdate) -> Result<()>;
}
