//! Minimal HTTP forward proxy.
//!
//! Every inbound request, on any path and with any method, is sent to one
//! fixed upstream with only its scheme and host changed. The upstream's
//! status, headers and body are relayed back unchanged. If the round trip
//! fails the caller gets `500 Server Error`.

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod net;
pub mod observability;
pub mod upstream;

pub use config::ProxyConfig;
pub use error::ProxyError;
pub use http::HttpServer;
