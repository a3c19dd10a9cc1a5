//! Playback-controller collaborator interface
//!
//! The audio engine, transport state machine and queue storage behind this
//! trait are owned by an external component; the RPC core only forwards
//! validated requests to it.

use crate::error::Result;
use crate::queue::QueueItem;

/// Coarse playback state, serialized as an integer on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped = 0,
    Playing = 1,
    Paused = 2,
}

/// Snapshot of the controller state returned by `player_status`.
#[derive(Debug, Clone)]
pub struct PlayerStatus {
    /// Id of the currently loaded file, if any.
    pub current: Option<i64>,
    pub state: PlaybackState,
    /// Playback position inside the current file, in seconds.
    pub position: i64,
    /// Volume level, 0-100.
    pub volume: i64,
    /// Position of the current file inside the queue tree, one index per
    /// nesting level.
    pub index: Vec<i64>,
}

/// Synchronous playback-controller interface.
///
/// Index lists passed to [`remove`](PlayerController::remove) and
/// [`go_to`](PlayerController::go_to) arrive exactly as the client sent
/// them; the core performs no reordering or deduplication.
pub trait PlayerController: Send + Sync {
    /// Append a queue item (file, directory, album or playlist tree).
    fn enqueue(&self, item: QueueItem) -> Result<()>;

    /// Remove the queue entry addressed by the index path.
    fn remove(&self, index: &[i64]) -> Result<()>;

    /// Clear the whole queue.
    fn remove_all(&self) -> Result<()>;

    /// Current queue contents, in insertion order.
    fn queue(&self) -> Result<Vec<QueueItem>>;

    /// Snapshot of the playback state.
    fn status(&self) -> Result<PlayerStatus>;

    fn play(&self) -> Result<()>;
    fn pause(&self) -> Result<()>;
    fn stop(&self) -> Result<()>;
    fn prev(&self) -> Result<()>;
    fn next(&self) -> Result<()>;

    /// Seek inside the current file, to an absolute position in seconds.
    fn seek(&self, seconds: i64) -> Result<()>;

    /// Jump to the queue entry addressed by the index path.
    fn go_to(&self, index: &[i64]) -> Result<()>;

    /// Current volume level, 0-100.
    fn volume(&self) -> Result<i64>;

    /// Set the volume level, 0-100.
    fn set_volume(&self, level: i64) -> Result<()>;

    /// Raise the volume by one step.
    fn inc_volume(&self) -> Result<()>;

    /// Lower the volume by one step.
    fn dec_volume(&self) -> Result<()>;
}
