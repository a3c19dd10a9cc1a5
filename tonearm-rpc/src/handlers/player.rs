//! Handlers for the `player_*` methods

use serde_json::{json, Value};
use tonearm_common::queue::{self, QueueItem};
use tonearm_common::{Error, Result};

use crate::dispatch::RpcServer;
use crate::params::{require_i64, require_id_array};

pub(crate) fn queue_file(server: &RpcServer, params: &Value) -> Result<Value> {
    let id = require_i64(params, "id")?;
    let file = server
        .library()
        .files(&[id])?
        .into_iter()
        .next()
        .ok_or_else(|| Error::NotFound(format!("file {}", id)))?;

    server.player().enqueue(QueueItem::File(file))?;
    Ok(Value::Null)
}

pub(crate) fn queue_directory(server: &RpcServer, params: &Value) -> Result<Value> {
    let directory_id = require_i64(params, "directory_id")?;
    let item = queue::directory_item(server.library(), directory_id)?;
    server.player().enqueue(item)?;
    Ok(Value::Null)
}

pub(crate) fn queue_album(server: &RpcServer, params: &Value) -> Result<Value> {
    let album_id = require_i64(params, "id")?;
    let item = queue::album_item(server.library(), album_id)?;
    server.player().enqueue(item)?;
    Ok(Value::Null)
}

/// Queues a whole playlist. The playlist itself must resolve; its items are
/// materialized leniently by the queue builder.
pub(crate) fn queue_playlist(server: &RpcServer, params: &Value) -> Result<Value> {
    let playlist_id = require_i64(params, "id")?;
    let playlist = server
        .library()
        .playlists(&[playlist_id])?
        .into_iter()
        .next()
        .ok_or_else(|| Error::NotFound(format!("playlist {}", playlist_id)))?;

    let item = queue::playlist_item(server.library(), playlist)?;
    server.player().enqueue(item)?;
    Ok(Value::Null)
}

pub(crate) fn queue_get(server: &RpcServer, _params: &Value) -> Result<Value> {
    let items = server.player().queue()?;
    Ok(Value::Array(items.iter().map(QueueItem::serialize).collect()))
}

pub(crate) fn queue_remove(server: &RpcServer, params: &Value) -> Result<Value> {
    let index = require_id_array(params, "index")?;
    server.player().remove(&index)?;
    Ok(Value::Null)
}

pub(crate) fn queue_remove_all(server: &RpcServer, _params: &Value) -> Result<Value> {
    server.player().remove_all()?;
    Ok(Value::Null)
}

pub(crate) fn status(server: &RpcServer, _params: &Value) -> Result<Value> {
    let status = server.player().status()?;

    Ok(json!({
        "current": status.current,
        "state": status.state as i64,
        "position": status.position,
        "volume": status.volume,
        "index": status.index,
    }))
}

pub(crate) fn play(server: &RpcServer, _params: &Value) -> Result<Value> {
    server.player().play()?;
    Ok(Value::Null)
}

pub(crate) fn pause(server: &RpcServer, _params: &Value) -> Result<Value> {
    server.player().pause()?;
    Ok(Value::Null)
}

pub(crate) fn stop(server: &RpcServer, _params: &Value) -> Result<Value> {
    server.player().stop()?;
    Ok(Value::Null)
}

pub(crate) fn seek(server: &RpcServer, params: &Value) -> Result<Value> {
    let seconds = require_i64(params, "seconds")?;
    server.player().seek(seconds)?;
    Ok(Value::Null)
}

pub(crate) fn prev(server: &RpcServer, _params: &Value) -> Result<Value> {
    server.player().prev()?;
    Ok(Value::Null)
}

pub(crate) fn next(server: &RpcServer, _params: &Value) -> Result<Value> {
    server.player().next()?;
    Ok(Value::Null)
}

pub(crate) fn goto(server: &RpcServer, params: &Value) -> Result<Value> {
    let index = require_id_array(params, "index")?;
    server.player().go_to(&index)?;
    Ok(Value::Null)
}

pub(crate) fn get_volume(server: &RpcServer, _params: &Value) -> Result<Value> {
    let level = server.player().volume()?;
    Ok(json!(level))
}

pub(crate) fn set_volume(server: &RpcServer, params: &Value) -> Result<Value> {
    let level = require_i64(params, "level")?;
    server.player().set_volume(level)?;
    Ok(Value::Null)
}

pub(crate) fn inc_volume(server: &RpcServer, _params: &Value) -> Result<Value> {
    server.player().inc_volume()?;
    Ok(Value::Null)
}

pub(crate) fn dec_volume(server: &RpcServer, _params: &Value) -> Result<Value> {
    server.player().dec_volume()?;
    Ok(Value::Null)
}
