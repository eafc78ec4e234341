//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the upstream target and client from config
//! - Register the forwarding handler for every path and method
//! - Wire up middleware (tracing, request ID)
//! - Serve HTTP/1.x on a bound listener until it fails

use std::net::SocketAddr;

use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ProxyConfig;
use crate::error::ProxyError;
use crate::http::forward::{forward, ForwardState};
use crate::http::request::RequestIdLayer;
use crate::upstream::{build_client, UpstreamTarget};

/// HTTP server for the forward proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> Result<Self, ProxyError> {
        let target = UpstreamTarget::parse(&config.upstream.url)?;
        let client = build_client(&config.timeouts);
        let state = ForwardState::new(target, client, &config);

        let router = Self::build_router(state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: ForwardState) -> Router {
        Router::new()
            .route("/", any(forward))
            .route("/{*path}", any(forward))
            // Request targets that are not paths, such as `OPTIONS *`.
            .fallback(forward)
            .with_state(state)
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// The router, for driving the proxy without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Only returns if serving fails; there is no graceful shutdown.
    pub async fn run(self, listener: TcpListener) -> Result<(), ProxyError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.url,
            "Starting proxy server on {}",
            addr
        );

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();
        axum::serve(listener, app).await?;

        tracing::warn!("HTTP server stopped");
        Ok(())
    }
}
