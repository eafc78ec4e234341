//! Command-line interface.
//!
//! Every flag also reads an environment variable, so the proxy can be
//! configured with no arguments at all.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{read_config, ConfigError, Overrides, ProxyConfig};

#[derive(Debug, Parser)]
#[command(name = "forward-proxy")]
#[command(about = "Forward every HTTP request to one fixed upstream", long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long, env = "PROXY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Upstream URL, scheme and host only (e.g. http://example.com)
    #[arg(short, long, env = "PROXY_UPSTREAM")]
    pub upstream: Option<String>,

    /// Full bind address (e.g. 127.0.0.1:8080)
    #[arg(short, long, env = "PROXY_BIND")]
    pub bind: Option<String>,

    /// Port to listen on, all interfaces
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Send the upstream authority as the Host header
    #[arg(long, env = "PROXY_REWRITE_HOST")]
    pub rewrite_host: bool,

    /// Upstream connect timeout in seconds
    #[arg(long, env = "PROXY_CONNECT_TIMEOUT_SECS")]
    pub connect_timeout_secs: Option<u64>,

    /// Upstream response timeout in seconds
    #[arg(long, env = "PROXY_REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,

    /// Log level when RUST_LOG is not set
    #[arg(long, env = "PROXY_LOG_LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            upstream: self.upstream.clone(),
            bind_address: self.bind.clone(),
            port: self.port,
            rewrite_host: self.rewrite_host.then_some(true),
            connect_timeout_secs: self.connect_timeout_secs,
            request_timeout_secs: self.request_timeout_secs,
            log_level: self.log_level.clone(),
        }
    }

    /// Defaults, then the config file, then flags and environment.
    /// Validation runs once, on the merged result.
    pub fn load(&self) -> Result<ProxyConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => ProxyConfig::default(),
        };
        config.apply_overrides(&self.overrides());
        config.validated()
    }
}
