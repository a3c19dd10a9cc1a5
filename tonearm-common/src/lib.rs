//! # Tonearm Common Library
//!
//! Shared code for the Tonearm remote-control modules:
//! - Library entity records (artists, albums, files, directories, playlists)
//! - Collaborator traits for the media library and the playback controller
//! - The hierarchical playback-queue tree and its wire codec
//! - Common error type

pub mod error;
pub mod library;
pub mod model;
pub mod player;
pub mod queue;

pub use error::{Error, Result};
pub use queue::QueueItem;
