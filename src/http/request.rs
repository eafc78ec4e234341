//! Request correlation IDs.
//!
//! # Responsibilities
//! - Give every inbound exchange an ID for log correlation
//! - Reuse an inbound `x-request-id` when the caller supplies one
//!
//! # Design Decisions
//! - The ID lives in request extensions only; forwarded headers are
//!   never touched
//! - Extensions are cleared before forwarding, so the ID stays local

use std::fmt;
use std::task::{Context, Poll};

use axum::http::{HeaderMap, Request};
use tower::{Layer, Service};

/// Header name read for caller-supplied IDs.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Longest caller-supplied ID accepted as-is.
const MAX_INBOUND_ID_LEN: usize = 128;

/// Correlation ID for one exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a fresh UUID v4 ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Take the caller's `x-request-id` if it is printable and short,
    /// otherwise generate one.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty() && v.len() <= MAX_INBOUND_ID_LEN)
            .map(|v| Self(v.to_string()))
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Access to the [`RequestId`] stored on a request.
pub trait RequestIdExt {
    fn request_id(&self) -> Option<&RequestId>;
}

impl<B> RequestIdExt for Request<B> {
    fn request_id(&self) -> Option<&RequestId> {
        self.extensions().get::<RequestId>()
    }
}

/// Layer that stores a [`RequestId`] in each request's extensions.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestIdLayer;

impl<S> Layer<S> for RequestIdLayer {
    type Service = RequestIdService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestIdService { inner }
    }
}

/// Service produced by [`RequestIdLayer`].
#[derive(Debug, Clone)]
pub struct RequestIdService<S> {
    inner: S,
}

impl<S, B> Service<Request<B>> for RequestIdService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        let id = RequestId::from_headers(req.headers());
        req.extensions_mut().insert(id);
        self.inner.call(req)
    }
}
