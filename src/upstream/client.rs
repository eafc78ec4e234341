//! HTTP client used for the upstream round trip.

use std::time::Duration;

use axum::body::Body;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};

use crate::config::TimeoutConfig;

/// Pooled HTTP/1.1 client to the upstream.
pub type UpstreamClient = Client<HttpConnector, Body>;

/// Build the client shared by all request tasks.
///
/// Only the connect timeout lives here; the request timeout wraps the
/// round trip in the handler.
pub fn build_client(timeouts: &TimeoutConfig) -> UpstreamClient {
    let mut connector = HttpConnector::new();
    connector.set_connect_timeout(timeouts.connect_secs.map(Duration::from_secs));

    Client::builder(TokioExecutor::new()).build(connector)
}
