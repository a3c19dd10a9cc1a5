//! Method registry and request dispatcher
//!
//! The registry is a name → handler map built once at construction and
//! never mutated afterwards, so concurrent lookups from parallel requests
//! need no lock. Handlers are plain functions over explicit arguments; all
//! mutable state lives behind the library/controller collaborators.
//!
//! [`RpcServer::dispatch`] owns the whole failure contract: nothing a
//! handler or collaborator does can propagate past it, every failure
//! degrades to a per-request error reply.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use tonearm_common::library::MusicLibrary;
use tonearm_common::player::PlayerController;
use tonearm_common::Result;

use crate::envelope::{
    error_reply, result_reply, ERR_INVALID_METHOD, ERR_INVALID_METHOD_CALL, ERR_INVALID_REQUEST,
    ERR_METHOD_ID_NOT_FOUND,
};
use crate::handlers;

/// A registered method handler: pure function of params to result.
pub type Handler = fn(&RpcServer, &Value) -> Result<Value>;

/// The RPC façade over the media library and the playback controller.
pub struct RpcServer {
    library: Arc<dyn MusicLibrary>,
    player: Arc<dyn PlayerController>,
    methods: HashMap<&'static str, Handler>,
}

impl RpcServer {
    /// Creates the server and builds the immutable method registry.
    pub fn new(library: Arc<dyn MusicLibrary>, player: Arc<dyn PlayerController>) -> Self {
        let mut methods: HashMap<&'static str, Handler> = HashMap::new();

        // library
        methods.insert("library_scan", handlers::library::scan);
        methods.insert("library_get_statistics", handlers::library::get_statistics);

        // library - artists
        methods.insert("library_get_artists", handlers::library::get_artists);

        // library - albums
        methods.insert("library_get_albums", handlers::library::get_albums);
        methods.insert(
            "library_get_album_ids_by_artist",
            handlers::library::get_album_ids_by_artist,
        );

        // library - files and directories
        methods.insert("library_get_files", handlers::library::get_files);
        methods.insert(
            "library_get_files_of_artist",
            handlers::library::get_files_of_artist,
        );
        methods.insert(
            "library_get_files_of_album",
            handlers::library::get_files_of_album,
        );
        methods.insert("library_get_directories", handlers::library::get_directories);
        methods.insert("library_list_directory", handlers::library::list_directory);

        // library - metadata
        methods.insert("library_get_metadata", handlers::library::get_metadata);
        methods.insert("library_update_metadata", handlers::library::update_metadata);

        // library - playlists
        methods.insert("library_get_playlists", handlers::library::get_playlists);
        methods.insert("library_create_playlist", handlers::library::create_playlist);
        methods.insert("library_delete_playlist", handlers::library::delete_playlist);
        methods.insert(
            "library_add_playlist_item",
            handlers::library::add_playlist_item,
        );
        methods.insert(
            "library_delete_playlist_item",
            handlers::library::delete_playlist_item,
        );

        // player - queue
        methods.insert("player_queue_file", handlers::player::queue_file);
        methods.insert("player_queue_directory", handlers::player::queue_directory);
        methods.insert("player_queue_album", handlers::player::queue_album);
        methods.insert("player_queue_playlist", handlers::player::queue_playlist);
        methods.insert("player_queue_get", handlers::player::queue_get);
        methods.insert("player_queue_remove", handlers::player::queue_remove);
        methods.insert("player_queue_remove_all", handlers::player::queue_remove_all);

        // player - status and control
        methods.insert("player_status", handlers::player::status);
        methods.insert("player_play", handlers::player::play);
        methods.insert("player_pause", handlers::player::pause);
        methods.insert("player_stop", handlers::player::stop);
        methods.insert("player_seek", handlers::player::seek);
        methods.insert("player_prev", handlers::player::prev);
        methods.insert("player_next", handlers::player::next);
        methods.insert("player_goto", handlers::player::goto);

        // player - volume
        methods.insert("player_get_volume", handlers::player::get_volume);
        methods.insert("player_set_volume", handlers::player::set_volume);
        methods.insert("player_inc_volume", handlers::player::inc_volume);
        methods.insert("player_dec_volume", handlers::player::dec_volume);

        Self {
            library,
            player,
            methods,
        }
    }

    /// The media-library collaborator.
    pub(crate) fn library(&self) -> &dyn MusicLibrary {
        self.library.as_ref()
    }

    /// The playback-controller collaborator.
    pub(crate) fn player(&self) -> &dyn PlayerController {
        self.player.as_ref()
    }

    /// Dispatches one raw request body to its handler and encodes the reply.
    ///
    /// Invoked once per inbound HTTP request, possibly concurrently; takes
    /// `&self` and touches no mutable state of its own.
    pub fn dispatch(&self, raw: &[u8]) -> String {
        let root: Value = match serde_json::from_slice(raw) {
            Ok(value) => value,
            Err(err) => {
                debug!(error = %err, "unparsable request payload");
                return error_reply(&Value::Null, ERR_INVALID_REQUEST);
            }
        };

        // A non-string method counts as absent: the envelope is incomplete.
        let method = root.get("method").and_then(Value::as_str);
        let id = root.get("id");

        let (Some(method), Some(id)) = (method, id) else {
            let id = root.get("id").cloned().unwrap_or(Value::Null);
            return error_reply(&id, ERR_METHOD_ID_NOT_FOUND);
        };

        let params = root.get("params").unwrap_or(&Value::Null);

        let Some(handler) = self.methods.get(method) else {
            debug!(method, "unknown method");
            return error_reply(id, ERR_INVALID_METHOD);
        };

        match handler(self, params) {
            Ok(result) => result_reply(id, result),
            Err(err) => {
                debug!(method, error = %err, "method call failed");
                error_reply(id, ERR_INVALID_METHOD_CALL)
            }
        }
    }
}
