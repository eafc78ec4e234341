//! Error types shared across the proxy.
//!
//! Only two of these ever reach a caller, and both collapse to the same
//! fixed `500 Server Error` response: [`ProxyError::Transport`] and
//! [`ProxyError::Timeout`]. Everything else is a startup failure.

use std::time::Duration;

use crate::config::ConfigError;
use crate::net::ListenerError;

/// Errors produced by the proxy.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The configured upstream could not be turned into a target.
    #[error("invalid upstream '{url}': {reason}")]
    InvalidUpstream { url: String, reason: String },

    /// The inbound URI could not be rewritten onto the upstream authority.
    #[error("failed to rewrite request uri: {0}")]
    Rewrite(#[from] axum::http::uri::InvalidUriParts),

    /// The round trip to the upstream failed at the transport level.
    #[error("upstream round trip failed: {0}")]
    Transport(#[from] hyper_util::client::legacy::Error),

    /// The round trip exceeded the configured request timeout.
    #[error("upstream did not respond within {0:?}")]
    Timeout(Duration),

    #[error(transparent)]
    Listener(#[from] ListenerError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ProxyError {
    /// True for failures that happen while an exchange is in flight.
    pub fn is_round_trip_failure(&self) -> bool {
        matches!(self, ProxyError::Transport(_) | ProxyError::Timeout(_))
    }
}
