//! Hierarchical playback-queue tree and its wire codec
//!
//! A queue entry is one of four variants: a single file, a directory or an
//! album wrapping an ordered list of files, or a playlist wrapping an
//! ordered list of heterogeneous entries. In practice the tree is at most
//! three levels deep (playlist → directory/album → file), but both codec
//! directions recurse and handle arbitrary depth.
//!
//! Serialization walks each container in stored insertion order and never
//! sorts. Construction resolves entity references against the library at
//! build time; the directory and album builders are shared between the
//! direct `player_queue_*` handlers and playlist materialization so both
//! paths produce identical ordering.

use serde_json::{json, Value};
use tracing::warn;

use crate::error::{Error, Result};
use crate::library::MusicLibrary;
use crate::model::{Album, Directory, File, Playlist};

/// A node of the hierarchical playback queue.
#[derive(Debug, Clone)]
pub enum QueueItem {
    /// A single file.
    File(File),
    /// A directory and the files queued from it.
    Directory {
        directory: Directory,
        files: Vec<QueueItem>,
    },
    /// An album and the files queued from it.
    Album { album: Album, files: Vec<QueueItem> },
    /// A playlist and its materialized entries (files, directories, albums).
    Playlist {
        playlist: Playlist,
        files: Vec<QueueItem>,
    },
}

impl QueueItem {
    /// Serializes this node and its children into the wire format.
    pub fn serialize(&self) -> Value {
        match self {
            QueueItem::File(file) => json!({
                "type": "file",
                "id": file.id,
                "path": file.path,
                "name": file.name,
                "title": file.title,
                "length": file.length,
                "codec": file.codec,
                "sampling_rate": file.sampling_rate,
            }),
            QueueItem::Directory { directory, files } => json!({
                "type": "dir",
                "id": directory.id,
                "name": directory.name,
                "files": serialize_children(files),
            }),
            QueueItem::Album { album, files } => json!({
                "type": "album",
                "id": album.id,
                "name": album.name,
                "files": serialize_children(files),
            }),
            QueueItem::Playlist { playlist, files } => json!({
                "type": "playlist",
                "id": playlist.id,
                "name": playlist.name,
                "files": serialize_children(files),
            }),
        }
    }
}

fn serialize_children(items: &[QueueItem]) -> Vec<Value> {
    items.iter().map(QueueItem::serialize).collect()
}

/// Builds a directory queue item: the directory's files, filename ascending.
///
/// Fails with [`Error::NotFound`] when the directory id does not resolve.
/// A file that disappears between the id fetch and the file fetch is simply
/// absent from the result.
pub fn directory_item(library: &dyn MusicLibrary, directory_id: i64) -> Result<QueueItem> {
    let directory = library
        .directories(&[directory_id])?
        .into_iter()
        .next()
        .ok_or_else(|| Error::NotFound(format!("directory {}", directory_id)))?;

    let file_ids = library.file_ids_of_directory(directory_id)?;
    let mut files = library.files(&file_ids)?;
    files.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(QueueItem::Directory {
        directory,
        files: files.into_iter().map(QueueItem::File).collect(),
    })
}

/// Builds an album queue item: the album's files, track index ascending.
///
/// Fails with [`Error::NotFound`] when the album id does not resolve.
pub fn album_item(library: &dyn MusicLibrary, album_id: i64) -> Result<QueueItem> {
    let album = library
        .albums(&[album_id])?
        .into_iter()
        .next()
        .ok_or_else(|| Error::NotFound(format!("album {}", album_id)))?;

    let file_ids = library.file_ids_of_album(album_id)?;
    let mut files = library.files(&file_ids)?;
    files.sort_by_key(|f| f.track_index);

    Ok(QueueItem::Album {
        album,
        files: files.into_iter().map(QueueItem::File).collect(),
    })
}

/// Materializes a stored playlist into a live queue tree.
///
/// Each persisted item is resolved against the library by its type tag.
/// Unlike the direct queue handlers, resolution here is lenient: a referent
/// that no longer exists is skipped and the rest of the playlist still
/// materializes. An unknown type tag drops the item with a warning. Other
/// collaborator failures still abort the build.
pub fn playlist_item(library: &dyn MusicLibrary, playlist: Playlist) -> Result<QueueItem> {
    let mut files = Vec::new();

    for entry in &playlist.items {
        match entry.kind.as_str() {
            "file" => {
                if let Some(file) = library.files(&[entry.item_id])?.into_iter().next() {
                    files.push(QueueItem::File(file));
                }
            }
            "directory" => match directory_item(library, entry.item_id) {
                Ok(item) => files.push(item),
                Err(Error::NotFound(_)) => {}
                Err(e) => return Err(e),
            },
            "album" => match album_item(library, entry.item_id) {
                Ok(item) => files.push(item),
                Err(Error::NotFound(_)) => {}
                Err(e) => return Err(e),
            },
            other => {
                warn!(
                    playlist_id = playlist.id,
                    item_id = entry.id,
                    kind = other,
                    "dropping playlist item with unknown type tag"
                );
            }
        }
    }

    Ok(QueueItem::Playlist { playlist, files })
}
