//! The forwarding handler.
//!
//! One inbound exchange becomes exactly one upstream round trip and exactly
//! one response to the caller:
//!
//! ```text
//! inbound request
//!     → rewrite (scheme + authority → upstream, listener state cleared)
//!     → round trip (optionally bounded by the request timeout)
//!     ├─ Ok  → relay status, headers, streaming body
//!     └─ Err → 500 "Server Error"
//! ```
//!
//! No retries. Transport errors stop here and are only logged.

use std::net::SocketAddr;
use std::time::Duration;

use axum::body::Body;
use axum::extract::{ConnectInfo, State};
use axum::http::{header, Extensions, Request, Version};
use axum::response::Response;
use hyper::body::Incoming;

use crate::config::ProxyConfig;
use crate::error::ProxyError;
use crate::http::request::RequestIdExt;
use crate::http::response::{proxy_failure, relay};
use crate::upstream::{UpstreamClient, UpstreamTarget};

/// State shared by every request task. Read-only after startup.
#[derive(Clone)]
pub struct ForwardState {
    target: UpstreamTarget,
    client: UpstreamClient,
    rewrite_host: bool,
    request_timeout: Option<Duration>,
}

impl ForwardState {
    pub fn new(target: UpstreamTarget, client: UpstreamClient, config: &ProxyConfig) -> Self {
        Self {
            target,
            client,
            rewrite_host: config.upstream.rewrite_host,
            request_timeout: config.timeouts.request_secs.map(Duration::from_secs),
        }
    }

    pub fn target(&self) -> &UpstreamTarget {
        &self.target
    }

    /// Redirect a request to the upstream.
    ///
    /// Method, path, query, headers and body are kept. The URI gets the
    /// upstream scheme and authority, the version is pinned to HTTP/1.1
    /// for the outbound connection, and extensions left by the listening
    /// layer are dropped.
    pub fn rewrite_request(&self, request: Request<Body>) -> Result<Request<Body>, ProxyError> {
        let (mut parts, body) = request.into_parts();

        parts.uri = self.target.rewrite(&parts.uri)?;
        parts.version = Version::HTTP_11;
        parts.extensions = Extensions::new();
        if self.rewrite_host {
            parts.headers.insert(header::HOST, self.target.host_header().clone());
        }

        Ok(Request::from_parts(parts, body))
    }

    /// Send the request upstream and wait for the response headers.
    pub async fn round_trip(&self, request: Request<Body>) -> Result<Response<Incoming>, ProxyError> {
        let outbound = self.rewrite_request(request)?;
        let pending = self.client.request(outbound);

        match self.request_timeout {
            Some(limit) => tokio::time::timeout(limit, pending)
                .await
                .map_err(|_| ProxyError::Timeout(limit))?
                .map_err(ProxyError::from),
            None => pending.await.map_err(ProxyError::from),
        }
    }
}

/// Forward one request to the upstream and relay the result.
pub async fn forward(State(state): State<ForwardState>, request: Request<Body>) -> Response {
    let request_id = request
        .request_id()
        .map(ToString::to_string)
        .unwrap_or_else(|| "unknown".to_string());
    let client_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    tracing::debug!(
        request_id = %request_id,
        client = %client_addr,
        method = %method,
        path = %path,
        upstream = %state.target(),
        "Forwarding request"
    );

    match state.round_trip(request).await {
        Ok(upstream) => {
            tracing::info!(
                request_id = %request_id,
                method = %method,
                path = %path,
                status = upstream.status().as_u16(),
                "Relaying upstream response"
            );
            relay(upstream)
        }
        Err(e) if e.is_round_trip_failure() => {
            tracing::warn!(
                request_id = %request_id,
                method = %method,
                path = %path,
                error = %e,
                "Upstream round trip failed"
            );
            proxy_failure()
        }
        Err(e) => {
            // Nothing was sent upstream.
            tracing::error!(
                request_id = %request_id,
                method = %method,
                path = %path,
                error = %e,
                "Request could not be prepared for the upstream"
            );
            proxy_failure()
        }
    }
}
