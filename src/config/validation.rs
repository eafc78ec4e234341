//! Configuration validation.
//!
//! Serde handles the syntax; this module checks the values make sense.
//! All problems are collected so an operator sees every mistake at once.

use std::fmt;
use std::net::SocketAddr;

use crate::config::schema::ProxyConfig;

/// One semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. `upstream.url`.
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, returning every problem found.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            "listener.bind_address",
            format!("'{}' is not a socket address", config.listener.bind_address),
        ));
    }

    if let Err(mut upstream_errors) = validate_upstream_url(&config.upstream.url) {
        errors.append(&mut upstream_errors);
    }

    if config.timeouts.connect_secs == Some(0) {
        errors.push(ValidationError::new("timeouts.connect_secs", "must be greater than zero"));
    }
    if config.timeouts.request_secs == Some(0) {
        errors.push(ValidationError::new("timeouts.request_secs", "must be greater than zero"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check an upstream URL: `http`, a host, an optional port, nothing else.
///
/// Returns the parsed URL so callers can build the target from the same
/// parse that was checked.
pub fn validate_upstream_url(raw: &str) -> Result<url::Url, Vec<ValidationError>> {
    let url = url::Url::parse(raw)
        .map_err(|e| vec![ValidationError::new("upstream.url", format!("'{}': {}", raw, e))])?;

    let mut errors = Vec::new();

    // TLS to the upstream is not supported.
    if url.scheme() != "http" {
        errors.push(ValidationError::new(
            "upstream.url",
            format!("unsupported scheme '{}', expected 'http'", url.scheme()),
        ));
    }
    if url.host_str().map_or(true, str::is_empty) {
        errors.push(ValidationError::new("upstream.url", "missing host"));
    }
    if !url.username().is_empty() || url.password().is_some() {
        errors.push(ValidationError::new("upstream.url", "credentials are not allowed"));
    }
    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        errors.push(ValidationError::new(
            "upstream.url",
            "must be scheme and host only; the inbound path and query are kept",
        ));
    }

    if errors.is_empty() {
        Ok(url)
    } else {
        Err(errors)
    }
}
