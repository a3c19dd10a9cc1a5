//! Library entity records
//!
//! Plain data records owned by the media-library collaborator. The RPC core
//! only reads and re-shapes them; creation, persistence and scanning happen
//! behind the [`crate::library::MusicLibrary`] trait.
//!
//! The `Serialize` derives produce the wire field names used by the
//! `library_*` RPC results.

use serde::Serialize;

/// An artist with its album count.
#[derive(Debug, Clone, Serialize)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    /// Number of albums attributed to this artist.
    pub albums: i64,
}

/// An album with its song count and total length.
#[derive(Debug, Clone, Serialize)]
pub struct Album {
    pub id: i64,
    #[serde(rename = "artist")]
    pub artist_id: i64,
    pub name: String,
    pub songs: i64,
    /// Total length of all songs, in seconds.
    pub length: i64,
}

/// A scanned directory of the library tree.
#[derive(Debug, Clone, Serialize)]
pub struct Directory {
    pub id: i64,
    pub parent_id: Option<i64>,
    pub name: String,
}

/// A media file and its scanned metadata.
#[derive(Debug, Clone, Serialize)]
pub struct File {
    pub id: i64,
    pub path: String,
    pub name: String,
    /// Play length in seconds.
    pub length: i64,
    pub artist_id: Option<i64>,
    pub album_id: Option<i64>,
    pub title: String,
    pub year: i64,
    pub track_index: i64,
    pub codec: String,
    pub sampling_rate: i64,
    /// Resolved artist display name; only used by `library_get_metadata`.
    #[serde(skip_serializing)]
    pub artist: Option<String>,
    /// Resolved album display name; only used by `library_get_metadata`.
    #[serde(skip_serializing)]
    pub album: Option<String>,
}

/// A stored playlist with its persisted item references.
#[derive(Debug, Clone, Serialize)]
pub struct Playlist {
    pub id: i64,
    pub name: String,
    pub items: Vec<PlaylistItem>,
}

/// A persisted reference inside a stored playlist.
///
/// The type tag is nominally one of `"file"`, `"directory"` or `"album"`,
/// but it is kept as a free string: persisted data may carry tags this
/// version no longer understands, and those must survive until queue-build
/// time where they are dropped with a warning.
#[derive(Debug, Clone, Serialize)]
pub struct PlaylistItem {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub item_id: i64,
}

/// User-editable metadata fields of a file.
#[derive(Debug, Clone, Default)]
pub struct MetadataUpdate {
    pub id: i64,
    pub artist: String,
    pub album: String,
    pub title: String,
    pub year: i64,
    pub track_index: i64,
}

/// Aggregate counters of the library.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Statistics {
    pub num_of_artists: i64,
    pub num_of_albums: i64,
    pub num_of_files: i64,
    pub sum_of_song_length: i64,
}
