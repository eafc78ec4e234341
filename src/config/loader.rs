//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::Path;

use crate::config::schema::ProxyConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Read a TOML file into a config without validating it.
///
/// For callers that layer overrides before validating.
pub fn read_config(path: &Path) -> Result<ProxyConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ProxyConfig, ConfigError> {
    let config = read_config(path)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Values supplied by flags or environment variables.
///
/// Each `Some` replaces whatever the file (or the defaults) set.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub upstream: Option<String>,
    pub bind_address: Option<String>,
    /// Port on all interfaces; ignored when `bind_address` is set.
    pub port: Option<u16>,
    pub rewrite_host: Option<bool>,
    pub connect_timeout_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub log_level: Option<String>,
}

impl ProxyConfig {
    /// Layer overrides on top of this config.
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(url) = &overrides.upstream {
            self.upstream.url = url.clone();
        }

        if let Some(addr) = &overrides.bind_address {
            self.listener.bind_address = addr.clone();
        } else if let Some(port) = overrides.port {
            self.listener.bind_address = format!("0.0.0.0:{}", port);
        }

        if let Some(rewrite) = overrides.rewrite_host {
            self.upstream.rewrite_host = rewrite;
        }
        if overrides.connect_timeout_secs.is_some() {
            self.timeouts.connect_secs = overrides.connect_timeout_secs;
        }
        if overrides.request_timeout_secs.is_some() {
            self.timeouts.request_secs = overrides.request_timeout_secs;
        }
        if let Some(level) = &overrides.log_level {
            self.observability.log_level = level.clone();
        }
    }

    /// Validate this config, wrapping problems in a [`ConfigError`].
    pub fn validated(self) -> Result<Self, ConfigError> {
        validate_config(&self).map_err(ConfigError::Validation)?;
        Ok(self)
    }
}
