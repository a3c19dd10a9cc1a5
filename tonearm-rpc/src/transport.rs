//! HTTP transport binding
//!
//! The dispatcher binds to whatever HTTP layer the process provides through
//! the [`HttpTransport`] trait: one handler registered at one configured
//! path. The trait carries a version number that [`RpcServer::start`]
//! checks against [`HTTP_TRANSPORT_VERSION`] before registering, refusing
//! to start against an incompatible layer.
//!
//! [`AxumTransport`] is the bundled implementation: a single POST route,
//! always HTTP 200 with the error encoded in the body.

use std::sync::Arc;

use axum::body::Bytes;
use axum::http::header;
use axum::routing::post;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use tonearm_common::{Error, Result};

use crate::config::RpcConfig;
use crate::dispatch::RpcServer;

/// Transport interface version this core is compatible with.
pub const HTTP_TRANSPORT_VERSION: u32 = 1;

const CONTENT_TYPE_JSON: &str = "application/json;charset=utf-8";

/// Entry point handed to the transport: raw request body in, reply out.
pub type RequestHandler = Arc<dyn Fn(&[u8]) -> String + Send + Sync>;

/// An HTTP layer capable of hosting the dispatcher.
pub trait HttpTransport {
    /// Interface version of this transport implementation.
    fn version(&self) -> u32;

    /// Registers a handler for POST requests on `path`.
    fn register(&mut self, path: &str, handler: RequestHandler) -> Result<()>;
}

impl RpcServer {
    /// Binds the dispatcher to the transport at the configured path.
    ///
    /// Refuses to start when the transport reports an incompatible
    /// interface version.
    pub fn start(self: &Arc<Self>, config: &RpcConfig, transport: &mut dyn HttpTransport) -> Result<()> {
        if transport.version() != HTTP_TRANSPORT_VERSION {
            return Err(Error::Config(format!(
                "unsupported http transport version {} (expected {})",
                transport.version(),
                HTTP_TRANSPORT_VERSION
            )));
        }

        let server = Arc::clone(self);
        transport.register(&config.path, Arc::new(move |raw| server.dispatch(raw)))?;

        info!(path = %config.path, "rpc dispatcher registered");
        Ok(())
    }

    /// Lifecycle counterpart of [`RpcServer::start`]; the core holds no
    /// resources of its own to release.
    pub fn stop(&self) {}
}

/// Axum-backed [`HttpTransport`].
#[derive(Default)]
pub struct AxumTransport {
    router: Router,
}

impl AxumTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the transport, yielding the router for embedding or tests.
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Serves the registered routes until the task is cancelled.
    pub async fn serve(self, bind_addr: &str) -> anyhow::Result<()> {
        let app = self.router.layer(TraceLayer::new_for_http());

        let listener = tokio::net::TcpListener::bind(bind_addr).await?;
        info!("HTTP server listening on {}", bind_addr);

        axum::serve(listener, app).await?;
        Ok(())
    }
}

impl HttpTransport for AxumTransport {
    fn version(&self) -> u32 {
        HTTP_TRANSPORT_VERSION
    }

    fn register(&mut self, path: &str, handler: RequestHandler) -> Result<()> {
        if !path.starts_with('/') {
            return Err(Error::Config(format!(
                "rpc path must begin with '/': {}",
                path
            )));
        }

        let router = std::mem::take(&mut self.router);
        self.router = router.route(
            path,
            post(move |body: Bytes| {
                let reply = handler(&body);
                async move { ([(header::CONTENT_TYPE, CONTENT_TYPE_JSON)], reply) }
            }),
        );

        Ok(())
    }
}
