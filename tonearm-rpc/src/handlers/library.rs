//! Handlers for the `library_*` methods

use serde_json::{json, Value};
use tonearm_common::model::MetadataUpdate;
use tonearm_common::{Error, Result};

use crate::dispatch::RpcServer;
use crate::params::{optional_i64, optional_str, require_i64, require_id_array, require_str};

pub(crate) fn scan(server: &RpcServer, _params: &Value) -> Result<Value> {
    server.library().scan()?;
    Ok(Value::Null)
}

pub(crate) fn get_statistics(server: &RpcServer, _params: &Value) -> Result<Value> {
    let stats = server.library().statistics()?;
    Ok(serde_json::to_value(stats)?)
}

pub(crate) fn get_artists(server: &RpcServer, _params: &Value) -> Result<Value> {
    let artists = server.library().artists()?;
    Ok(serde_json::to_value(artists)?)
}

pub(crate) fn get_albums(server: &RpcServer, _params: &Value) -> Result<Value> {
    let albums = server.library().albums(&[])?;
    Ok(serde_json::to_value(albums)?)
}

pub(crate) fn get_album_ids_by_artist(server: &RpcServer, params: &Value) -> Result<Value> {
    let artist_id = require_i64(params, "artist_id")?;
    let ids = server.library().album_ids_by_artist(artist_id)?;
    Ok(serde_json::to_value(ids)?)
}

pub(crate) fn get_files(server: &RpcServer, params: &Value) -> Result<Value> {
    let ids = require_id_array(params, "ids")?;
    let files = server.library().files(&ids)?;
    Ok(serde_json::to_value(files)?)
}

/// Lists an artist's files in storage order, as flat file records.
pub(crate) fn get_files_of_artist(server: &RpcServer, params: &Value) -> Result<Value> {
    let artist_id = require_i64(params, "artist_id")?;
    let ids = server.library().file_ids_of_artist(artist_id)?;
    let files = server.library().files(&ids)?;
    Ok(serde_json::to_value(files)?)
}

/// Lists an album's files in storage order, as flat file records.
pub(crate) fn get_files_of_album(server: &RpcServer, params: &Value) -> Result<Value> {
    let album_id = require_i64(params, "album_id")?;
    let ids = server.library().file_ids_of_album(album_id)?;
    let files = server.library().files(&ids)?;
    Ok(serde_json::to_value(files)?)
}

pub(crate) fn get_directories(server: &RpcServer, params: &Value) -> Result<Value> {
    let ids = require_id_array(params, "ids")?;
    let directories = server.library().directories(&ids)?;
    Ok(serde_json::to_value(directories)?)
}

/// Lists a directory: subdirectories first (tagged `"dir"`), then files
/// (tagged `"file"`), both in storage order.
pub(crate) fn list_directory(server: &RpcServer, params: &Value) -> Result<Value> {
    let directory_id = require_i64(params, "directory_id")?;
    let library = server.library();

    let subdirectory_ids = library.subdirectory_ids(directory_id)?;
    let directories = library.directories(&subdirectory_ids)?;
    let file_ids = library.file_ids_of_directory(directory_id)?;
    let files = library.files(&file_ids)?;

    let mut entries = Vec::with_capacity(directories.len() + files.len());

    for directory in directories {
        entries.push(json!({
            "type": "dir",
            "id": directory.id,
            "name": directory.name,
        }));
    }

    for file in files {
        let mut entry = serde_json::to_value(&file)?;
        if let Value::Object(map) = &mut entry {
            map.insert("type".to_string(), Value::from("file"));
        }
        entries.push(entry);
    }

    Ok(Value::Array(entries))
}

pub(crate) fn get_metadata(server: &RpcServer, params: &Value) -> Result<Value> {
    let id = require_i64(params, "id")?;
    let file = server
        .library()
        .files(&[id])?
        .into_iter()
        .next()
        .ok_or_else(|| Error::NotFound(format!("file {}", id)))?;

    Ok(json!({
        "id": file.id,
        "name": file.name,
        "artist": file.artist,
        "album": file.album,
        "title": file.title,
        "year": file.year,
        "track_index": file.track_index,
    }))
}

pub(crate) fn update_metadata(server: &RpcServer, params: &Value) -> Result<Value> {
    let update = MetadataUpdate {
        id: require_i64(params, "id")?,
        artist: optional_str(params, "artist"),
        album: optional_str(params, "album"),
        title: optional_str(params, "title"),
        year: optional_i64(params, "year"),
        track_index: optional_i64(params, "track_index"),
    };

    server.library().update_file_metadata(&update)?;
    Ok(Value::Null)
}

pub(crate) fn get_playlists(server: &RpcServer, _params: &Value) -> Result<Value> {
    let playlists = server.library().playlists(&[])?;
    Ok(serde_json::to_value(playlists)?)
}

pub(crate) fn create_playlist(server: &RpcServer, params: &Value) -> Result<Value> {
    let name = require_str(params, "name")?;
    let id = server.library().create_playlist(name)?;
    Ok(json!(id))
}

pub(crate) fn delete_playlist(server: &RpcServer, params: &Value) -> Result<Value> {
    let id = require_i64(params, "id")?;
    server.library().delete_playlist(id)?;
    Ok(Value::Null)
}

/// Adds a typed reference to a playlist. Unlike queue materialization,
/// inserting an unknown type tag is rejected outright.
pub(crate) fn add_playlist_item(server: &RpcServer, params: &Value) -> Result<Value> {
    let playlist_id = require_i64(params, "playlist_id")?;
    let kind = require_str(params, "type")?;
    let item_id = require_i64(params, "item_id")?;

    if !matches!(kind, "file" | "directory" | "album") {
        return Err(Error::InvalidMethodCall);
    }

    let id = server.library().add_playlist_item(playlist_id, kind, item_id)?;
    Ok(json!(id))
}

pub(crate) fn delete_playlist_item(server: &RpcServer, params: &Value) -> Result<Value> {
    let id = require_i64(params, "id")?;
    server.library().delete_playlist_item(id)?;
    Ok(Value::Null)
}
