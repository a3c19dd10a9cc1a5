//! # Tonearm RPC Module (tonearm-rpc)
//!
//! JSON-RPC style remote-control façade over a media library and a playback
//! controller.
//!
//! **Purpose:** Parse request envelopes, dispatch them through an immutable
//! method registry, validate parameters, call the library/controller
//! collaborators, and encode results (including recursive queue trees) back
//! onto the wire.
//!
//! **Architecture:** One synchronous dispatch entry point
//! ([`RpcServer::dispatch`]) bound to a single HTTP path through a
//! version-checked transport ([`transport::HttpTransport`]); axum provides
//! the bundled transport implementation.

pub mod config;
pub mod dispatch;
pub mod envelope;
pub mod params;
pub mod transport;

mod handlers;

pub use config::RpcConfig;
pub use dispatch::RpcServer;
pub use transport::{AxumTransport, HttpTransport, HTTP_TRANSPORT_VERSION};
