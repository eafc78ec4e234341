use clap::Parser;

use forward_proxy::cli::Cli;
use forward_proxy::observability::logging;
use forward_proxy::{net, HttpServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.load()?;

    logging::init(&config.observability);

    tracing::info!("forward-proxy v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.url,
        request_timeout_secs = ?config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = net::bind(&config.listener).await?;
    let server = HttpServer::new(config)?;

    if let Err(e) = server.run(listener).await {
        tracing::error!(error = %e, "Proxy server failed");
        return Err(e.into());
    }

    Ok(())
}
